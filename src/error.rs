//! Error types for icon generation

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing icon files
///
/// Rendering itself cannot fail; the only failure surface is file I/O.
/// Generation is idempotent, so callers report the error and re-run rather
/// than retrying.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Writing an icon file failed
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
