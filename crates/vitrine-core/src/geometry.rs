//! Viewport-space geometry for interactive surfaces.

use ratatui::layout::Rect;

/// Bounding region of an interactive surface, in viewport coordinates.
///
/// A region is read fresh on every pointer event rather than cached
/// across frames, since the surface may reflow between events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// X coordinate of the left edge.
    pub left: f32,
    /// Y coordinate of the top edge.
    pub top: f32,
    /// Width of the region.
    pub width: f32,
    /// Height of the region.
    pub height: f32,
}

impl Region {
    /// Create a new region from its origin and extents.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether the region can drive geometry at all.
    /// Degenerate (zero or negative extent) regions cannot be measured.
    pub fn is_measurable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Center of the region relative to its own origin.
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Whether a viewport-space point falls inside the region.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.left + self.width && y >= self.top && y < self.top + self.height
    }
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Self::new(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
        )
    }
}
