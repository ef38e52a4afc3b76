// SPDX-License-Identifier: LGPL-3.0-only
//! Contains the [SwitchSpace] widget filling the trailing empty space.

use nalgebra::Vector2;

use crumbs_core::geometry::Rect;
use crumbs_core::widget::LayoutItem;

use crate::crumb::CRUMB_HEIGHT;

/// The flexible filler to the right of the crumbs.
///
/// It has no content of its own; its job is to absorb leftover width and to
/// turn a left-click on the empty area into the switch to edit view.
#[derive(Debug, Default)]
pub struct SwitchSpace {
    geometry: Rect,
    visible: bool,
}

impl SwitchSpace {
    /// Create the filler.
    pub fn new() -> Self {
        Self {
            geometry: Rect::default(),
            visible: true,
        }
    }

    /// Whether `point` falls inside the filler's current area.
    pub fn hit(&self, point: Vector2<f32>) -> bool {
        self.visible && self.geometry.contains(point)
    }
}

impl LayoutItem for SwitchSpace {
    fn min_size(&self) -> Vector2<f32> {
        Vector2::new(0.0, CRUMB_HEIGHT)
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
