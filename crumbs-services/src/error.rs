// SPDX-License-Identifier: LGPL-3.0-only
//! Error types shared by all data providers.

use std::path::PathBuf;

/// Errors reported by data providers.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The path does not exist in the hierarchy.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// Access was denied while resolving or enumerating a path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The provider does not implement an optional capability.
    #[error("capability not supported: {0}")]
    NotSupported(&'static str),

    /// The provider's data document is malformed. Raised at construction
    /// and fatal to the provider instance.
    #[error("invalid provider data: {0}")]
    Config(String),
}

/// Convenience result alias for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

impl ProviderError {
    /// Map an I/O error encountered while resolving `path` onto the
    /// provider taxonomy. Anything that is not a permission problem is
    /// treated as the path not existing.
    pub fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                ProviderError::PermissionDenied(path.to_path_buf())
            }
            _ => ProviderError::NotFound(path.to_path_buf()),
        }
    }
}
