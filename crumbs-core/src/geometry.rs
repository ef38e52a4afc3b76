// SPDX-License-Identifier: LGPL-3.0-only
use nalgebra::Vector2;

/// An axis-aligned rectangle in widget coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The right edge of the rectangle.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// The bottom edge of the rectangle.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The size of the rectangle as a vector.
    pub fn size(&self) -> Vector2<f32> {
        Vector2::new(self.width, self.height)
    }

    /// Whether the given point lies inside the rectangle.
    pub fn contains(&self, point: Vector2<f32>) -> bool {
        point.x >= self.x
            && point.x < self.right()
            && point.y >= self.y
            && point.y < self.bottom()
    }

    /// Return a copy shrunk by the given margins on all sides.
    ///
    /// The result never has a negative size.
    pub fn shrunk(&self, margins: Margins) -> Self {
        Self {
            x: self.x + margins.left,
            y: self.y + margins.top,
            width: (self.width - margins.horizontal()).max(0.0),
            height: (self.height - margins.vertical()).max(0.0),
        }
    }
}

/// Contents margins around a layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    /// Left margin.
    pub left: f32,
    /// Top margin.
    pub top: f32,
    /// Right margin.
    pub right: f32,
    /// Bottom margin.
    pub bottom: f32,
}

impl Margins {
    /// Create margins from the four sides.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Sum of left and right margins.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of top and bottom margins.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
