pub mod demo;
pub mod init;
pub mod issue;
pub mod present;
pub mod verify;

use std::path::Path;

/// Write `contents` to `out`, or to stdout when no path is given.
pub(crate) fn emit(contents: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, contents)?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => println!("{}", contents),
    }
    Ok(())
}
