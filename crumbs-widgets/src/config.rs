// SPDX-License-Identifier: LGPL-3.0-only
//! Host-facing configuration for the address bar.

use std::path::PathBuf;

use serde::Deserialize;

/// Configuration accepted by the address bar at construction.
///
/// Deserializable so a host can load it straight from its own config file.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarConfig {
    /// Reserved trailing space before crumbs start hiding: `[0.0, 1.0)` is
    /// a fraction of the bar width, `>= 1.0` absolute pixels.
    pub minimal_space: f32,
    /// Path shown initially. Empty means the provider's "current location".
    pub initial_path: PathBuf,
    /// Spacing in pixels between neighbouring crumbs.
    pub spacing: f32,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            minimal_space: 0.1,
            initial_path: PathBuf::new(),
            spacing: 0.0,
        }
    }
}

impl BarConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
