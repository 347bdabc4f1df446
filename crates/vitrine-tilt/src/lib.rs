//! Pointer-driven 3D tilt engine for interactive surfaces.
//!
//! A [`TiltSurface`] observes pointer-move and pointer-leave events within
//! its own bounds and republishes a perspective transform that makes the
//! surface appear to tilt toward the pointer. Each surface owns its state
//! exclusively; instances never coordinate.

use vitrine_core::{HOVER_SCALE, MAX_TILT_DEG, Region, TiltTransform};

/// Logical interaction state of a surface.
///
/// `Neutral -> Tilted` on the first pointer-move, `Tilted -> Tilted` on
/// subsequent moves (replacing the transform), and back to `Neutral` only
/// on an explicit pointer-leave. There is no timeout-based reversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TiltPhase {
    #[default]
    Neutral,
    Tilted,
}

/// Per-instance tilt state for one interactive surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TiltSurface {
    phase: TiltPhase,
    transform: TiltTransform,
}

impl TiltSurface {
    /// Create a surface in the neutral state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a pointer-move event.
    ///
    /// `pointer_x`/`pointer_y` are viewport coordinates; `region` is the
    /// surface's bounding region measured fresh for this event, or `None`
    /// when the surface cannot be measured (e.g. not yet laid out). An
    /// unmeasurable region makes the event a no-op: the prior transform is
    /// preserved and nothing is raised.
    pub fn on_pointer_move(
        &mut self,
        pointer_x: f32,
        pointer_y: f32,
        region: Option<Region>,
    ) -> &TiltTransform {
        if let Some(region) = region.filter(Region::is_measurable) {
            self.transform = tilt_transform(pointer_x, pointer_y, region);
            self.phase = TiltPhase::Tilted;
        }
        &self.transform
    }

    /// Handle a pointer-leave event.
    ///
    /// Unconditionally resets to the neutral transform, discarding any
    /// in-flight pointer state. Idempotent.
    pub fn on_pointer_leave(&mut self) -> &TiltTransform {
        self.phase = TiltPhase::Neutral;
        self.transform = TiltTransform::neutral();
        &self.transform
    }

    /// The transform currently published for rendering.
    pub fn transform(&self) -> &TiltTransform {
        &self.transform
    }

    /// Whether the surface is currently tilted.
    pub fn is_tilted(&self) -> bool {
        self.phase == TiltPhase::Tilted
    }
}

/// Compute the tilt transform for a pointer position over a region.
///
/// Tilt is linear in the normalized offset from the region center: the
/// pointer at the center yields zero rotation, and a pointer on an edge
/// yields the nominal maximum. Moving toward the top tilts the top edge
/// away from the viewer (negative rotateX); moving right tilts the right
/// edge toward the viewer (positive rotateY).
///
/// Coordinates outside the region (possible during fast pointer movement)
/// are not rejected and may produce tilt beyond [`MAX_TILT_DEG`]; callers
/// wanting strictly bounded output must clamp themselves.
pub fn tilt_transform(pointer_x: f32, pointer_y: f32, region: Region) -> TiltTransform {
    let local_x = pointer_x - region.left;
    let local_y = pointer_y - region.top;
    let (center_x, center_y) = region.center();

    TiltTransform {
        rotate_x_deg: ((local_y - center_y) / center_y) * -MAX_TILT_DEG,
        rotate_y_deg: ((local_x - center_x) / center_x) * MAX_TILT_DEG,
        scale: HOVER_SCALE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Region {
        Region::new(0.0, 0.0, 200.0, 100.0)
    }

    #[test]
    fn test_center_yields_zero_rotation() {
        let t = tilt_transform(100.0, 50.0, region());
        assert_eq!(t.rotate_x_deg, 0.0);
        assert_eq!(t.rotate_y_deg, 0.0);
        assert_eq!(t.scale, HOVER_SCALE);
    }

    #[test]
    fn test_corner_extremes() {
        // Top-left corner: top edge away, left edge away.
        let t = tilt_transform(0.0, 0.0, region());
        assert_eq!(t.rotate_x_deg, MAX_TILT_DEG);
        assert_eq!(t.rotate_y_deg, -MAX_TILT_DEG);

        // Bottom-right corner inverts both signs.
        let t = tilt_transform(200.0, 100.0, region());
        assert_eq!(t.rotate_x_deg, -MAX_TILT_DEG);
        assert_eq!(t.rotate_y_deg, MAX_TILT_DEG);
    }

    #[test]
    fn test_bounded_inside_region() {
        let region = Region::new(40.0, 10.0, 64.0, 18.0);
        for (x, y) in [(41.0, 11.0), (72.0, 19.0), (103.0, 27.0), (55.0, 24.5)] {
            let t = tilt_transform(x, y, region);
            assert!(t.rotate_x_deg.abs() <= MAX_TILT_DEG);
            assert!(t.rotate_y_deg.abs() <= MAX_TILT_DEG);
        }
    }

    #[test]
    fn test_outside_region_may_exceed_nominal_max() {
        // Fast pointer movement can report coordinates past the region
        // edge; the transform is still computed, unclamped.
        let t = tilt_transform(400.0, 50.0, region());
        assert!(t.rotate_y_deg > MAX_TILT_DEG);
    }

    #[test]
    fn test_worked_example() {
        // 200x100 region, pointer at (150, 25): rotateX = 5, rotateY = 5.
        let t = tilt_transform(150.0, 25.0, region());
        assert_eq!(t.rotate_x_deg, 5.0);
        assert_eq!(t.rotate_y_deg, 5.0);
        assert_eq!(
            t.to_string(),
            "perspective(1000px) rotateX(5deg) rotateY(5deg) scale(1.05)"
        );
    }

    #[test]
    fn test_offset_region_uses_local_coordinates() {
        let region = Region::new(50.0, 20.0, 200.0, 100.0);
        let t = tilt_transform(200.0, 45.0, region);
        assert_eq!(t.rotate_x_deg, 5.0);
        assert_eq!(t.rotate_y_deg, 5.0);
    }

    #[test]
    fn test_state_machine_transitions() {
        let mut surface = TiltSurface::new();
        assert!(!surface.is_tilted());
        assert!(surface.transform().is_neutral());

        surface.on_pointer_move(150.0, 25.0, Some(region()));
        assert!(surface.is_tilted());
        assert_eq!(surface.transform().rotate_x_deg, 5.0);

        // Subsequent move replaces the transform; last write wins.
        surface.on_pointer_move(100.0, 50.0, Some(region()));
        assert!(surface.is_tilted());
        assert_eq!(surface.transform().rotate_x_deg, 0.0);
        assert_eq!(surface.transform().scale, HOVER_SCALE);

        surface.on_pointer_leave();
        assert!(!surface.is_tilted());
        assert!(surface.transform().is_neutral());
    }

    #[test]
    fn test_pointer_leave_is_idempotent() {
        let mut surface = TiltSurface::new();
        surface.on_pointer_leave();
        assert!(surface.transform().is_neutral());
        surface.on_pointer_move(0.0, 0.0, Some(region()));
        surface.on_pointer_leave();
        surface.on_pointer_leave();
        assert!(!surface.is_tilted());
        assert!(surface.transform().is_neutral());
    }

    #[test]
    fn test_unmeasurable_region_is_noop() {
        let mut surface = TiltSurface::new();
        surface.on_pointer_move(150.0, 25.0, Some(region()));
        let before = *surface.transform();

        surface.on_pointer_move(10.0, 10.0, None);
        assert_eq!(*surface.transform(), before);
        assert!(surface.is_tilted());

        surface.on_pointer_move(10.0, 10.0, Some(Region::new(0.0, 0.0, 0.0, 0.0)));
        assert_eq!(*surface.transform(), before);
        assert!(surface.is_tilted());
    }

    #[test]
    fn test_independent_surfaces() {
        let mut a = TiltSurface::new();
        let mut b = TiltSurface::new();
        a.on_pointer_move(0.0, 0.0, Some(region()));
        assert!(a.is_tilted());
        assert!(!b.is_tilted());
        b.on_pointer_leave();
        assert!(a.is_tilted());
    }
}
