// SPDX-License-Identifier: LGPL-3.0-only
//! YAML-file data provider: a [Dictionary] loaded from a YAML document.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::dictionary::Dictionary;
use crate::error::{ProviderError, ProviderResult};
use crate::icon::Icon;
use crate::provider::{DataProvider, Entry};

/// Dictionary provider fed from YAML text, a reader or a file.
///
/// Validation happens at load time; a document whose top level is not a
/// mapping, or that violates the dictionary rules, fails construction.
#[derive(Debug)]
pub struct YamlDict {
    inner: Dictionary,
}

impl YamlDict {
    /// Parse a YAML document from text.
    pub fn from_str(text: &str) -> ProviderResult<Self> {
        let value: Value = serde_yaml::from_str(text)
            .map_err(|err| ProviderError::Config(err.to_string()))?;
        Ok(Self {
            inner: Dictionary::new(value)?,
        })
    }

    /// Parse a YAML document from a reader.
    pub fn from_reader(reader: impl Read) -> ProviderResult<Self> {
        let value: Value = serde_yaml::from_reader(reader)
            .map_err(|err| ProviderError::Config(err.to_string()))?;
        Ok(Self {
            inner: Dictionary::new(value)?,
        })
    }

    /// Load a YAML document from a file on disk.
    pub fn from_file(path: &Path) -> ProviderResult<Self> {
        let file = File::open(path)
            .map_err(|err| ProviderError::from_io(path, err))?;
        Self::from_reader(file)
    }
}

impl DataProvider for YamlDict {
    fn check_path(&self, path: &Path) -> ProviderResult<PathBuf> {
        self.inner.check_path(path)
    }

    fn list_dir(&self, path: &Path) -> ProviderResult<Vec<Entry>> {
        self.inner.list_dir(path)
    }

    fn get_devices(&self) -> ProviderResult<Vec<Entry>> {
        self.inner.get_devices()
    }

    fn get_places(&self) -> ProviderResult<Vec<(String, PathBuf)>> {
        self.inner.get_places()
    }

    fn icon(&self, path: &Path) -> Icon {
        self.inner.icon(path)
    }

    fn init_completer(&self) -> ProviderResult<()> {
        self.inner.init_completer()
    }

    fn set_completion_prefix(&self, prefix: &str) {
        self.inner.set_completion_prefix(prefix)
    }

    fn completions(&self) -> Vec<String> {
        self.inner.completions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DOC: &str = "\
\"/\":
  home:
    user:
      documents: icon=Docs
\"/metadata\":
  icon: Default
  places:
    Home: /home/user
";

    #[test]
    fn test_loads_from_text() {
        let provider = YamlDict::from_str(DOC).unwrap();
        assert_eq!(
            provider.check_path(Path::new("/home/user")).unwrap(),
            PathBuf::from("/home/user")
        );
        let places = provider.get_places().unwrap();
        assert_eq!(
            places,
            vec![("Home".to_string(), PathBuf::from("/home/user"))]
        );
    }

    #[test]
    fn test_loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.yml");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(DOC.as_bytes())
            .unwrap();
        let provider = YamlDict::from_file(&path).unwrap();
        let labels: Vec<String> = provider
            .list_dir(Path::new("/home/user"))
            .unwrap()
            .into_iter()
            .map(|e| e.label)
            .collect();
        assert_eq!(labels, ["documents"]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = YamlDict::from_file(Path::new("/no/such/tree.yml")).unwrap_err();
        assert!(matches!(err, ProviderError::NotFound(_)));
    }

    #[test]
    fn test_invalid_yaml_is_a_config_error() {
        let err = YamlDict::from_str(": : :").unwrap_err();
        assert!(matches!(err, ProviderError::Config(_)));
        // A scalar document is rejected too.
        let err = YamlDict::from_str("just a string").unwrap_err();
        assert!(matches!(err, ProviderError::Config(_)));
    }
}
