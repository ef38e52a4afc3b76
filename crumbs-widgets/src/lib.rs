// SPDX-License-Identifier: LGPL-3.0-only
//! Widget set of the crumbs address bar.
//!
//! The entry point is [address_bar::BreadcrumbsAddressBar], built over any
//! [crumbs_services::DataProvider].

/// Contains the [address_bar::BreadcrumbsAddressBar] widget.
pub mod address_bar;

/// Contains the [config::BarConfig] configuration surface.
pub mod config;

/// Contains the [crumb::CrumbButton] widget.
pub mod crumb;

/// Contains the [line_edit::AddressEdit] widget state.
pub mod line_edit;

/// Contains the menu models for crumb drop-downs and the root menu.
pub mod menu;

/// Contains the [spacer::SwitchSpace] trailing filler widget.
pub mod spacer;

pub use address_bar::{AddressBarEvent, ArrowDirection, BreadcrumbsAddressBar, ViewMode};
pub use config::BarConfig;
