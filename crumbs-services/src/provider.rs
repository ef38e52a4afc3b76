// SPDX-License-Identifier: LGPL-3.0-only
//! The data provider contract consumed by the address bar.

use std::path::{Path, PathBuf};

use crate::error::{ProviderError, ProviderResult};
use crate::icon::Icon;

/// One menu record: a labelled path with an optional icon.
///
/// Not persisted; records are constructed on demand when a menu is about
/// to open.
#[derive(Clone, Debug)]
pub struct Entry {
    /// Display label.
    pub label: String,
    /// Full path the entry navigates to.
    pub path: PathBuf,
    /// Icon, when the provider resolves one.
    pub icon: Option<Icon>,
}

impl Entry {
    /// Create an entry without an icon.
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon: None,
        }
    }

    /// Attach an icon to the entry.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Interface implemented by all hierarchy data providers.
///
/// `check_path` and `list_dir` are mandatory; the remaining capabilities
/// are optional and report [ProviderError::NotSupported] when absent, which
/// callers treat as "feature missing", not as an application error.
pub trait DataProvider {
    /// Validate and canonicalize a candidate path.
    fn check_path(&self, path: &Path) -> ProviderResult<PathBuf>;

    /// Enumerate the children of `path`, one level deep.
    fn list_dir(&self, path: &Path) -> ProviderResult<Vec<Entry>>;

    /// Top-level enumerable roots (drives, mounted volumes, top-level
    /// keys). An empty list is valid.
    fn get_devices(&self) -> ProviderResult<Vec<Entry>>;

    /// Curated shortcut list (Home, Desktop, a declared places table).
    fn get_places(&self) -> ProviderResult<Vec<(String, PathBuf)>> {
        Err(ProviderError::NotSupported("places"))
    }

    /// Resolve an icon for a path. The default is a plain file icon.
    fn icon(&self, _path: &Path) -> Icon {
        Icon::named("file")
    }

    /// Declare whether the provider can feed the completion model.
    fn init_completer(&self) -> ProviderResult<()> {
        Err(ProviderError::NotSupported("completion"))
    }

    /// Feed a newly typed prefix into the completion model.
    fn set_completion_prefix(&self, _prefix: &str) {}

    /// Snapshot of the current completion suggestions.
    fn completions(&self) -> Vec<String> {
        Vec::new()
    }
}
