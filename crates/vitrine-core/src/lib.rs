//! Core types shared across the vitrine landing page.
//!
//! This crate holds the viewport geometry used by the tilt engine, the
//! tilt transform descriptor published to the render layer, the link card
//! descriptors the page presents, and the accent color theme.

mod geometry;
mod link;
mod theme;
mod transform;

pub use geometry::Region;
pub use link::CardLink;
pub use theme::AccentTheme;
pub use transform::{HOVER_SCALE, MAX_TILT_DEG, PERSPECTIVE_PX, TiltTransform};
