//! FileSystem port - abstraction over the handful of file operations the
//! pipeline performs
//!
//! Errors are plain `std::io::Error`; callers attach the path when converting
//! into `ScaffoldError::Io`.

use std::io;
use std::path::Path;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
pub trait FileSystem {
    /// Stat-style existence probe.
    ///
    /// Returns `Ok(false)` only for "not found"; every other failure is
    /// returned as an error.
    fn probe(&self, path: &Path) -> io::Result<bool>;

    /// Create a directory and all missing parents (mode 0755)
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write a file (mode 0644), replacing existing content
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}
