// SPDX-License-Identifier: LGPL-3.0-only
//! Dictionary data provider backed by an in-memory nested mapping.
//!
//! Keys are node names, values are the node's children. All keys are
//! coerced to strings on load. A node may carry a metadata child under the
//! reserved `/metadata` key in one of three forms:
//!
//! * Full: `/metadata` maps to a mapping of values.
//! * Short: `/metadata` maps to a compact `key=value,key=value` string.
//! * Compact: the node's own value is the compact string, usable when the
//!   node has no other children.
//!
//! Metadata on the root level applies to all nodes. Recognized keys:
//!
//! * `icon`: icon identifier; the nearest ancestor carrying one wins.
//! * `places`: name → path mapping for the shortcuts menu (root only).
//!
//! A root segment `/` may appear only at the top level of the data;
//! anywhere deeper it is a configuration error.

use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

use indexmap::IndexMap;
use serde_yaml::Value;

use crate::completion::CompletionModel;
use crate::error::{ProviderError, ProviderResult};
use crate::icon::{Icon, IconCache};
use crate::provider::{DataProvider, Entry};

/// Reserved key marking a metadata child.
pub const META_KEY: &str = "/metadata";

/// Icon identifier used when neither the node nor the root declares one.
const DEFAULT_ICON: &str = "file";

/// A metadata value: either a scalar or a nested table.
#[derive(Clone, Debug, PartialEq)]
pub enum MetaValue {
    /// Scalar text value.
    Text(String),
    /// Nested name → value table (used by `places`).
    Table(IndexMap<String, String>),
}

/// One normalized hierarchy node.
#[derive(Clone, Debug, Default)]
struct Node {
    children: IndexMap<String, Node>,
    meta: IndexMap<String, MetaValue>,
}

/// Data provider over a nested in-memory mapping.
#[derive(Debug)]
pub struct Dictionary {
    root: Node,
    icons: IconCache,
    completion: Mutex<CompletionModel>,
}

impl Dictionary {
    /// Build a provider from a nested document.
    ///
    /// The input is deep-copied and normalized: keys are stringified and
    /// compact metadata strings are expanded. A malformed document fails
    /// here with [ProviderError::Config]; nothing is validated lazily.
    pub fn new(data: Value) -> ProviderResult<Self> {
        let map = match data {
            Value::Mapping(m) => m,
            _ => {
                return Err(ProviderError::Config(
                    "top level of the data must be a mapping".into(),
                ))
            }
        };
        let root = build_node(&map, true)?;
        Ok(Self {
            root,
            icons: IconCache::new(),
            completion: Mutex::new(CompletionModel::new()),
        })
    }

    /// Walk `path` segment by segment through the tree.
    ///
    /// A missing segment, or traversal through a leaf, reports the path as
    /// not found.
    fn traverse(&self, path: &Path) -> ProviderResult<&Node> {
        let mut node = &self.root;
        for part in path_parts(path) {
            node = node
                .children
                .get(&part)
                .ok_or_else(|| ProviderError::NotFound(path.to_path_buf()))?;
        }
        Ok(node)
    }
}

impl DataProvider for Dictionary {
    fn check_path(&self, path: &Path) -> ProviderResult<PathBuf> {
        let parts = path_parts(path);
        if parts.is_empty() {
            // The "current location" path maps to the first top-level key.
            return self
                .root
                .children
                .keys()
                .next()
                .map(PathBuf::from)
                .ok_or_else(|| ProviderError::NotFound(path.to_path_buf()));
        }
        self.traverse(path)?;
        let mut canonical = PathBuf::new();
        for part in parts {
            canonical.push(part);
        }
        Ok(canonical)
    }

    fn list_dir(&self, path: &Path) -> ProviderResult<Vec<Entry>> {
        let node = self.traverse(path)?;
        Ok(node
            .children
            .keys()
            .map(|name| {
                let child = path.join(name);
                let icon = self.icon(&child);
                Entry::new(name.clone(), child).with_icon(icon)
            })
            .collect())
    }

    fn get_devices(&self) -> ProviderResult<Vec<Entry>> {
        Ok(self
            .root
            .children
            .keys()
            .map(|name| Entry::new(name.clone(), name.clone()))
            .collect())
    }

    fn get_places(&self) -> ProviderResult<Vec<(String, PathBuf)>> {
        match self.root.meta.get("places") {
            Some(MetaValue::Table(table)) => Ok(table
                .iter()
                .map(|(name, path)| (name.clone(), PathBuf::from(path)))
                .collect()),
            Some(MetaValue::Text(_)) => {
                log::warn!("root 'places' metadata is not a table, ignoring");
                Err(ProviderError::NotSupported("places"))
            }
            None => Err(ProviderError::NotSupported("places")),
        }
    }

    fn icon(&self, path: &Path) -> Icon {
        // Nearest-ancestor icon metadata wins; root metadata is the
        // default for everything below it.
        let mut id = match self.root.meta.get("icon") {
            Some(MetaValue::Text(s)) => s.as_str(),
            _ => DEFAULT_ICON,
        };
        let mut node = &self.root;
        for part in path_parts(path) {
            node = match node.children.get(&part) {
                Some(child) => child,
                None => break,
            };
            if let Some(MetaValue::Text(s)) = node.meta.get("icon") {
                id = s.as_str();
            }
        }
        self.icons.get_or_insert_with(id, || Icon::named(id))
    }

    fn init_completer(&self) -> ProviderResult<()> {
        Ok(())
    }

    fn set_completion_prefix(&self, prefix: &str) {
        let mut model = self.completion.lock().unwrap();
        model.set_prefix(prefix, |parent| {
            self.traverse(parent).ok().map(|node| {
                node.children
                    .keys()
                    .map(|name| parent.join(name).display().to_string())
                    .collect()
            })
        });
    }

    fn completions(&self) -> Vec<String> {
        self.completion.lock().unwrap().entries().to_vec()
    }
}

/// Split a path into hierarchy segments; the root directory is the
/// segment `"/"`.
fn path_parts(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::RootDir => Some("/".to_string()),
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            Component::Prefix(prefix) => {
                Some(prefix.as_os_str().to_string_lossy().into_owned())
            }
            Component::CurDir => None,
            // Never present in dictionary data; yields NotFound on lookup.
            Component::ParentDir => Some("..".to_string()),
        })
        .collect()
}

fn build_node(map: &serde_yaml::Mapping, top_level: bool) -> ProviderResult<Node> {
    let mut node = Node::default();
    for (key, value) in map {
        let key = key_to_string(key)?;
        if key == META_KEY {
            node.meta = parse_meta(value)?;
            continue;
        }
        if key == "/" && !top_level {
            return Err(ProviderError::Config(
                "root segment '/' is only allowed at the top level".into(),
            ));
        }
        let child = match value {
            Value::Null => Node::default(),
            Value::String(compact) => Node {
                children: IndexMap::new(),
                meta: parse_compact(compact)?,
            },
            Value::Mapping(children) => build_node(children, false)?,
            other => {
                return Err(ProviderError::Config(format!(
                    "unsupported value for node '{key}': {other:?}"
                )))
            }
        };
        node.children.insert(key, child);
    }
    Ok(node)
}

fn parse_meta(value: &Value) -> ProviderResult<IndexMap<String, MetaValue>> {
    match value {
        Value::String(compact) => parse_compact(compact),
        Value::Mapping(map) => {
            let mut meta = IndexMap::new();
            for (key, value) in map {
                let key = key_to_string(key)?;
                let value = match value {
                    Value::String(s) => MetaValue::Text(s.clone()),
                    Value::Number(n) => MetaValue::Text(n.to_string()),
                    Value::Bool(b) => MetaValue::Text(b.to_string()),
                    Value::Mapping(table) => {
                        let mut entries = IndexMap::new();
                        for (k, v) in table {
                            let k = key_to_string(k)?;
                            let v = match v {
                                Value::String(s) => s.clone(),
                                Value::Number(n) => n.to_string(),
                                other => {
                                    return Err(ProviderError::Config(format!(
                                        "metadata table value for '{k}' must be \
                                         scalar, got {other:?}"
                                    )))
                                }
                            };
                            entries.insert(k, v);
                        }
                        MetaValue::Table(entries)
                    }
                    other => {
                        return Err(ProviderError::Config(format!(
                            "unsupported metadata value for '{key}': {other:?}"
                        )))
                    }
                };
                meta.insert(key, value);
            }
            Ok(meta)
        }
        other => Err(ProviderError::Config(format!(
            "metadata must be a mapping or a compact string, got {other:?}"
        ))),
    }
}

/// Expand a compact `key=value,key=value` metadata string.
fn parse_compact(compact: &str) -> ProviderResult<IndexMap<String, MetaValue>> {
    let mut meta = IndexMap::new();
    for pair in compact.split(',') {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            ProviderError::Config(format!("malformed metadata pair '{pair}'"))
        })?;
        meta.insert(
            key.trim().to_string(),
            MetaValue::Text(value.trim().to_string()),
        );
    }
    Ok(meta)
}

fn key_to_string(key: &Value) -> ProviderResult<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(ProviderError::Config(format!(
            "node key must be scalar, got {other:?}"
        ))),
    }
}
