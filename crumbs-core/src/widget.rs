// SPDX-License-Identifier: LGPL-3.0-only
use nalgebra::Vector2;

use crate::geometry::Rect;

/// The base trait for anything managed by the row layout.
///
/// Items report a minimum size which the layout treats as their fixed,
/// natural size: items are never compressed below it and never stretched,
/// only hidden or shown whole. Visibility is owned by the layout; items just
/// store the flag so painting and hit-testing can consult it.
pub trait LayoutItem {
    /// The minimum (and natural) size of the item.
    fn min_size(&self) -> Vector2<f32>;

    /// Store the geometry assigned by the layout.
    fn set_geometry(&mut self, rect: Rect);

    /// The geometry last assigned by the layout.
    fn geometry(&self) -> Rect;

    /// Show or hide the item.
    fn set_visible(&mut self, visible: bool);

    /// Whether the item is currently shown.
    fn is_visible(&self) -> bool;
}
