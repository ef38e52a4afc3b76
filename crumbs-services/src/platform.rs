// SPDX-License-Identifier: LGPL-3.0-only
//! Host platform boundary for shell integration.
//!
//! Volume labels, shortcut-link resolution and volume enumeration need
//! platform shell interop (COM on Windows). The core only depends on this
//! trait; a host supplies the real implementation and the default stub
//! reports every capability as unsupported.

use std::path::{Path, PathBuf};

use crate::error::{ProviderError, ProviderResult};

/// Shell capabilities the filesystem provider delegates to the host.
pub trait PlatformShell {
    /// Enumerate mounted volume roots.
    fn list_volumes(&self) -> ProviderResult<Vec<PathBuf>>;

    /// Human-readable label for a volume root.
    fn volume_label(&self, path: &Path) -> ProviderResult<String>;

    /// Resolve a shortcut/link file to its target path.
    fn resolve_link(&self, link: &Path) -> ProviderResult<PathBuf>;

    /// Link files representing user-defined network shortcuts.
    fn network_shortcuts(&self) -> ProviderResult<Vec<PathBuf>> {
        Err(ProviderError::NotSupported("network shortcuts"))
    }
}

/// Stub shell used when the host supplies nothing.
pub struct StubShell;

impl PlatformShell for StubShell {
    fn list_volumes(&self) -> ProviderResult<Vec<PathBuf>> {
        Err(ProviderError::NotSupported("volume enumeration"))
    }

    fn volume_label(&self, _path: &Path) -> ProviderResult<String> {
        Err(ProviderError::NotSupported("volume labels"))
    }

    fn resolve_link(&self, _link: &Path) -> ProviderResult<PathBuf> {
        Err(ProviderError::NotSupported("link resolution"))
    }
}
