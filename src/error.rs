// Export error taxonomy
// Only write failures reach callers; routing anomalies and template read
// failures are recovered internally (diagnostic + fallback) and the
// exporter must never abort the host session

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the export pipeline
#[derive(Debug, Error)]
pub enum ExportError {
    /// The report file could not be written. The in-memory tree is untouched
    /// by a failed write, so the export can be retried.
    #[error("unable to write report to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_display_names_path() {
        let err = ExportError::Write {
            path: PathBuf::from("/tmp/report.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = err.to_string();
        assert!(text.contains("/tmp/report.html"));
        assert!(text.contains("write"));
    }

    #[test]
    fn test_write_error_keeps_source() {
        use std::error::Error;

        let err = ExportError::Write {
            path: PathBuf::from("report.html"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());
    }
}
