//! Small filesystem helpers shared by the configuration layer and stages.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;

/// Create every directory in `paths`, including missing parents.
///
/// Already-existing directories count as success. With `verbose` set, one
/// log line is emitted per path processed.
pub fn create_directories<I, P>(paths: I, verbose: bool) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path)?;
        if verbose {
            info!("created directory: {}", path.display());
        }
    }
    Ok(())
}

/// File size rendered in whole kilobytes, e.g. `~ 42 KB`.
pub fn get_size(path: &Path) -> Result<String> {
    let bytes = fs::metadata(path)?.len();
    let size_in_kb = (bytes as f64 / 1024.0).round() as u64;
    Ok(format!("~ {size_in_kb} KB"))
}
