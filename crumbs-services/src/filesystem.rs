// SPDX-License-Identifier: LGPL-3.0-only
//! Filesystem data provider.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

use crate::completion::CompletionModel;
use crate::error::{ProviderError, ProviderResult};
use crate::icon::{builtin_pixmap, Icon, IconCache};
use crate::platform::{PlatformShell, StubShell};
use crate::provider::{DataProvider, Entry};

/// Data provider backed by the real filesystem.
///
/// Platform shell interop (volume labels, shortcut links) is delegated to
/// an injected [PlatformShell]; the default stub reports those capabilities
/// as unsupported.
pub struct Filesystem {
    shell: Box<dyn PlatformShell>,
    icons: IconCache,
    completion: Mutex<CompletionModel>,
}

impl Filesystem {
    /// Create a provider with the stub platform shell.
    pub fn new() -> Self {
        Self::with_shell(Box::new(StubShell))
    }

    /// Create a provider with a host-supplied platform shell.
    pub fn with_shell(shell: Box<dyn PlatformShell>) -> Self {
        Self {
            shell,
            icons: IconCache::new(),
            completion: Mutex::new(CompletionModel::new()),
        }
    }

    /// Enumerate one directory level as (name, path, is_dir) triples in
    /// Explorer order: directories first, then files, each sorted
    /// case-insensitively. Entries that fail to stat are skipped.
    fn read_children(&self, path: &Path) -> ProviderResult<Vec<(String, PathBuf, bool)>> {
        let reader = fs::read_dir(path).map_err(|e| ProviderError::from_io(path, e))?;
        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in reader {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    log::debug!("skipping unreadable entry in {}: {e}", path.display());
                    continue;
                }
            };
            let is_dir = match entry.file_type() {
                Ok(t) => t.is_dir(),
                Err(e) => {
                    log::debug!("skipping unstatable entry in {}: {e}", path.display());
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            let bucket = if is_dir { &mut dirs } else { &mut files };
            bucket.push((name, entry.path(), is_dir));
        }
        dirs.sort_by_key(|(name, _, _)| name.to_lowercase());
        files.sort_by_key(|(name, _, _)| name.to_lowercase());
        dirs.extend(files);
        Ok(dirs)
    }

    fn is_hidden(path: &Path) -> bool {
        path.file_name()
            .map(|n| n.to_string_lossy().starts_with('.'))
            .unwrap_or(false)
    }
}

impl Default for Filesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProvider for Filesystem {
    fn check_path(&self, path: &Path) -> ProviderResult<PathBuf> {
        // An empty path means "current location", as with `resolve()` on a
        // bare relative path.
        let mut candidate = lexical_normalize(path);
        if candidate.as_os_str().is_empty() {
            candidate = PathBuf::from(".");
        }
        let resolved = fs::canonicalize(&candidate)
            .map_err(|e| ProviderError::from_io(&candidate, e))?;
        Ok(strip_verbatim(resolved))
    }

    fn list_dir(&self, path: &Path) -> ProviderResult<Vec<Entry>> {
        let children = self.read_children(path)?;
        Ok(children
            .into_iter()
            .map(|(name, path, _)| {
                let icon = self.icon(&path);
                Entry::new(name, path).with_icon(icon)
            })
            .collect())
    }

    fn get_devices(&self) -> ProviderResult<Vec<Entry>> {
        let mut devices = Vec::new();
        for root in self.shell.list_volumes()? {
            let label = self
                .shell
                .volume_label(&root)
                .unwrap_or_else(|_| root.display().to_string());
            let icon = self.icon(&root);
            devices.push(Entry::new(label, root).with_icon(icon));
        }
        // Network shortcuts are additive; a broken link never aborts the
        // enumeration.
        match self.shell.network_shortcuts() {
            Ok(links) => {
                for link in links {
                    match self.shell.resolve_link(&link) {
                        Ok(target) => {
                            let label = link
                                .file_stem()
                                .map(|n| n.to_string_lossy().into_owned())
                                .unwrap_or_else(|| target.display().to_string());
                            devices.push(Entry::new(label, target));
                        }
                        Err(e) => {
                            log::debug!("skipping shortcut {}: {e}", link.display());
                        }
                    }
                }
            }
            Err(ProviderError::NotSupported(_)) => {}
            Err(e) => return Err(e),
        }
        Ok(devices)
    }

    fn get_places(&self) -> ProviderResult<Vec<(String, PathBuf)>> {
        let candidates = [
            ("Home", dirs::home_dir()),
            ("Desktop", dirs::desktop_dir()),
            ("Documents", dirs::document_dir()),
            ("Downloads", dirs::download_dir()),
        ];
        Ok(candidates
            .into_iter()
            .filter_map(|(name, path)| path.map(|p| (name.to_string(), p)))
            .filter(|(_, p)| p.is_dir())
            .collect())
    }

    fn icon(&self, path: &Path) -> Icon {
        let id = if path.parent().is_none() {
            "drive"
        } else if path.is_dir() {
            "folder"
        } else {
            "file"
        };
        let base = self
            .icons
            .get_or_insert_with(id, || Icon::image(builtin_pixmap(id)));
        if Self::is_hidden(path) {
            let key = format!("{id}#hidden");
            self.icons.get_or_insert_with(&key, || base.translucent())
        } else {
            base
        }
    }

    fn init_completer(&self) -> ProviderResult<()> {
        Ok(())
    }

    fn set_completion_prefix(&self, prefix: &str) {
        let mut model = self.completion.lock().unwrap();
        model.set_prefix(prefix, |parent| {
            self.read_children(parent).ok().map(|children| {
                children
                    .into_iter()
                    .map(|(_, path, _)| path.display().to_string())
                    .collect()
            })
        });
    }

    fn completions(&self) -> Vec<String> {
        self.completion.lock().unwrap().entries().to_vec()
    }
}

/// Resolve `.` and `..` components and normalize bare drive forms
/// (`C:` gains a trailing separator) without touching the filesystem.
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let text = path.to_string_lossy();
    let path = if let Some(drive) = normalize_drive(&text) {
        PathBuf::from(drive)
    } else {
        path.to_path_buf()
    };
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(p) => out.push(p.as_os_str()),
            Component::RootDir => out.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(Component::ParentDir.as_os_str());
                }
            }
            Component::Normal(name) => out.push(name),
        }
    }
    out
}

/// `"C:"` → `"C:\"`. Returns `None` for anything that is not a bare drive.
pub fn normalize_drive(text: &str) -> Option<String> {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(letter), Some(':'), None) if letter.is_ascii_alphabetic() => {
            Some(format!("{letter}:\\"))
        }
        _ => None,
    }
}

/// Strip the Windows verbatim prefix `\\?\` that `canonicalize` produces.
fn strip_verbatim(path: PathBuf) -> PathBuf {
    let text = path.to_string_lossy();
    match text.strip_prefix(r"\\?\") {
        Some(stripped) => PathBuf::from(stripped.to_string()),
        None => path,
    }
}
