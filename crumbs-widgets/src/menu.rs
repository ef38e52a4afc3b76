// SPDX-License-Identifier: LGPL-3.0-only
//! Contains the menu models backing the crumb drop-downs and the root menu.

use std::path::PathBuf;

use crumbs_services::{Entry, Icon};

/// One selectable menu row.
#[derive(Clone, Debug)]
pub struct MenuEntry {
    /// Display label.
    pub label: String,
    /// Path selected when the entry is activated.
    pub path: PathBuf,
    /// Icon shown next to the label, when the provider resolves one.
    pub icon: Option<Icon>,
}

impl From<Entry> for MenuEntry {
    fn from(entry: Entry) -> Self {
        Self {
            label: entry.label,
            path: entry.path,
            icon: entry.icon,
        }
    }
}

/// The drop-down listing one crumb's children.
///
/// Populated lazily when it is about to open and discarded on close, so a
/// reopened menu always reflects the current state of the hierarchy.
#[derive(Debug, Default)]
pub struct CrumbMenu {
    entries: Vec<MenuEntry>,
    open: bool,
}

impl CrumbMenu {
    /// Open the menu with freshly enumerated entries.
    pub fn open(&mut self, entries: Vec<MenuEntry>) {
        self.entries = entries;
        self.open = true;
    }

    /// Close the menu, discarding its entries.
    pub fn close(&mut self) {
        self.entries.clear();
        self.open = false;
    }

    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The current entries.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }
}

/// The root menu: a static places section plus a rebuildable devices
/// section.
#[derive(Debug, Default)]
pub struct RootMenu {
    places: Vec<(String, PathBuf)>,
    devices: Vec<MenuEntry>,
}

impl RootMenu {
    /// Set the curated shortcut list. Loaded once at construction.
    pub fn set_places(&mut self, places: Vec<(String, PathBuf)>) {
        self.places = places;
    }

    /// The curated shortcut list.
    pub fn places(&self) -> &[(String, PathBuf)] {
        &self.places
    }

    /// Replace the devices section, rebuilt on demand.
    pub fn set_devices(&mut self, devices: Vec<MenuEntry>) {
        self.devices = devices;
    }

    /// The devices section.
    pub fn devices(&self) -> &[MenuEntry] {
        &self.devices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crumb_menu_discards_entries_on_close() {
        let mut menu = CrumbMenu::default();
        menu.open(vec![MenuEntry {
            label: "docs".into(),
            path: PathBuf::from("/home/docs"),
            icon: None,
        }]);
        assert!(menu.is_open());
        assert_eq!(menu.entries().len(), 1);
        menu.close();
        assert!(!menu.is_open());
        assert!(menu.entries().is_empty());
    }
}
