// SPDX-License-Identifier: LGPL-3.0-only
//! Live auto-completion data source keyed by a typed path prefix.

use std::path::{Path, PathBuf};

/// Suggestion list backing the address edit field.
///
/// The list holds the children of the prefix's parent directory and is only
/// rebuilt when that parent changes, so retyping inside one directory never
/// re-enumerates it.
#[derive(Debug, Default)]
pub struct CompletionModel {
    current_parent: Option<PathBuf>,
    entries: Vec<String>,
}

impl CompletionModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the model for a newly typed `prefix`.
    ///
    /// `list` enumerates one directory level and returns `None` when the
    /// directory cannot be listed, in which case the previous suggestions
    /// are kept.
    pub fn set_prefix<F>(&mut self, prefix: &str, list: F)
    where
        F: FnOnce(&Path) -> Option<Vec<String>>,
    {
        let parent = Self::prefix_parent(prefix);
        if self.current_parent.as_deref() == Some(parent.as_path()) {
            return; // already listed
        }
        if let Some(entries) = list(&parent) {
            self.entries = entries;
            self.current_parent = Some(parent);
        }
    }

    /// The directory whose children the suggestions are drawn from: the
    /// prefix itself when it ends in a separator, otherwise its parent.
    pub fn prefix_parent(prefix: &str) -> PathBuf {
        let path = Path::new(prefix);
        if prefix.ends_with(std::path::MAIN_SEPARATOR) || prefix.ends_with('/') {
            path.to_path_buf()
        } else {
            path.parent().unwrap_or_else(|| Path::new("")).to_path_buf()
        }
    }

    /// The current suggestion list.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The parent directory the suggestions were drawn from.
    pub fn current_parent(&self) -> Option<&Path> {
        self.current_parent.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_reenumerates_only_when_parent_changes() {
        let mut model = CompletionModel::new();
        let calls = Cell::new(0usize);
        let list = |_p: &Path| {
            calls.set(calls.get() + 1);
            Some(vec!["a".into(), "b".into()])
        };
        model.set_prefix("/home/us", list);
        model.set_prefix("/home/use", list);
        model.set_prefix("/home/user", list);
        assert_eq!(calls.get(), 1);
        assert_eq!(model.entries(), ["a", "b"]);

        model.set_prefix("/home/user/", list);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_failed_listing_keeps_previous_entries() {
        let mut model = CompletionModel::new();
        model.set_prefix("/a/b", |_| Some(vec!["one".into()]));
        model.set_prefix("/missing/x", |_| None);
        assert_eq!(model.entries(), ["one"]);
        assert_eq!(model.current_parent(), Some(Path::new("/a")));
    }

    #[test]
    fn test_prefix_with_trailing_separator_lists_itself() {
        assert_eq!(
            CompletionModel::prefix_parent("/home/"),
            PathBuf::from("/home")
        );
        assert_eq!(CompletionModel::prefix_parent("/home"), PathBuf::from("/"));
    }
}
