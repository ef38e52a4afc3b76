// SPDX-License-Identifier: LGPL-3.0-only
//! Contains the [CrumbButton] widget: one clickable path segment.

use std::path::{Path, PathBuf};

use nalgebra::Vector2;

use crumbs_core::geometry::Rect;
use crumbs_core::widget::LayoutItem;
use crumbs_services::filesystem::normalize_drive;
use crumbs_services::Icon;

/// Fixed height of a crumb button.
pub const CRUMB_HEIGHT: f32 = 24.0;

/// Horizontal padding on each side of the label.
const CRUMB_PADDING: f32 = 8.0;

/// Width reserved for the drop-down arrow.
const ARROW_WIDTH: f32 = 12.0;

/// Estimated advance of one label character.
///
/// Text metrics live in the host's font stack; this estimate only has to be
/// stable, the layout never compresses a crumb below it.
const CHAR_WIDTH: f32 = 7.0;

/// One segment of the breadcrumb trail.
///
/// Carries the display label and the full path it navigates to. Crumbs are
/// rebuilt wholesale on every path change, never updated in place.
#[derive(Debug)]
pub struct CrumbButton {
    label: String,
    path: PathBuf,
    icon: Option<Icon>,
    geometry: Rect,
    visible: bool,
}

impl CrumbButton {
    /// Create a crumb for `path` labelled with [path_title].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            label: path_title(&path),
            path,
            icon: None,
            geometry: Rect::default(),
            visible: true,
        }
    }

    /// Attach an icon shown left of the label.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The full path this crumb navigates to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The icon, when one was attached.
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }
}

impl LayoutItem for CrumbButton {
    fn min_size(&self) -> Vector2<f32> {
        let label = self.label.chars().count() as f32 * CHAR_WIDTH;
        Vector2::new(2.0 * CRUMB_PADDING + label + ARROW_WIDTH, CRUMB_HEIGHT)
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.geometry = rect;
    }

    fn geometry(&self) -> Rect {
        self.geometry
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// The display label for a path: its leaf name, or an uppercased root label
/// when the leaf name is empty (drive roots, the filesystem root).
///
/// Drive roots are detected lexically so the label is the same on every
/// platform, where `Path::file_name` would treat `c:\` as a leaf on Unix.
pub fn path_title(path: &Path) -> String {
    let text = path.display().to_string();
    let trimmed = text.trim_end_matches(['/', '\\']);
    if normalize_drive(trimmed).is_some() {
        return trimmed.to_uppercase();
    }
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    if trimmed.is_empty() {
        text
    } else {
        trimmed.to_uppercase()
    }
}
