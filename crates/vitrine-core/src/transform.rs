//! The tilt transform descriptor published by interactive surfaces.

use std::fmt;

/// Maximum nominal tilt in degrees when the pointer reaches a region edge.
pub const MAX_TILT_DEG: f32 = 10.0;

/// Fixed perspective depth of the tilt transform, in CSS pixels.
pub const PERSPECTIVE_PX: f32 = 1000.0;

/// Fixed scale applied while a surface is tilted (hovered).
pub const HOVER_SCALE: f32 = 1.05;

/// A composed perspective/rotation/scale descriptor for a tilted surface.
///
/// The descriptor is a pure function of the latest pointer position and
/// region; it carries no smoothing or inertia. `Display` renders it in the
/// CSS transform syntax the render boundary expects, e.g.
/// `perspective(1000px) rotateX(5deg) rotateY(5deg) scale(1.05)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    /// Rotation around the X axis, in degrees.
    pub rotate_x_deg: f32,
    /// Rotation around the Y axis, in degrees.
    pub rotate_y_deg: f32,
    /// Uniform scale factor.
    pub scale: f32,
}

impl TiltTransform {
    /// The identity descriptor applied when no pointer is active.
    pub fn neutral() -> Self {
        Self {
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            scale: 1.0,
        }
    }

    /// Whether this is the neutral (no-tilt) descriptor.
    pub fn is_neutral(&self) -> bool {
        self.rotate_x_deg == 0.0 && self.rotate_y_deg == 0.0 && self.scale == 1.0
    }
}

impl Default for TiltTransform {
    fn default() -> Self {
        Self::neutral()
    }
}

impl fmt::Display for TiltTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "perspective({PERSPECTIVE_PX}px) rotateX({}deg) rotateY({}deg) scale({})",
            self.rotate_x_deg, self.rotate_y_deg, self.scale
        )
    }
}
