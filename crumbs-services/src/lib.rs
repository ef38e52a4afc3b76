// SPDX-License-Identifier: LGPL-3.0-only
//! Hierarchy data providers for the crumbs address bar.
//!
//! A [provider::DataProvider] abstracts over the source of hierarchical
//! data so the address bar never knows whether it is browsing a real
//! filesystem or a synthetic tree. Three implementations ship here:
//! [filesystem::Filesystem], [dictionary::Dictionary] and the YAML-backed
//! [yamldict::YamlDict].

pub mod completion;
pub mod dictionary;
pub mod error;
pub mod filesystem;
pub mod icon;
pub mod platform;
pub mod provider;
pub mod yamldict;

pub use error::{ProviderError, ProviderResult};
pub use icon::{Icon, IconCache};
pub use provider::{DataProvider, Entry};
