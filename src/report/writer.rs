// Report persistence - the only filesystem write in the crate

use crate::error::ExportError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the rendered markup to `path`, overwriting any existing content.
/// Failures surface as `ExportError::Write`; callers keep their in-memory
/// tree and may retry.
pub fn write_report(path: &Path, markup: &str) -> Result<(), ExportError> {
    let mut file = File::create(path).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(markup.as_bytes())
        .map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(())
}
