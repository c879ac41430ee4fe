pub mod model;
pub mod view;

pub use model::{Card, CarouselState};
pub use view::CardPainter;

pub const ICON_SIZE: i32 = 256;
pub const ICON_INACTIVE_ALPHA: f64 = 0.6;
pub const CORNER_RADIUS: f64 = 18.0;
pub const LABEL_SIZE: f64 = 16.0;
/// Pointer travel, in pixels, below which a press and release is a tap.
pub const TAP_SLOP: f64 = 6.0;
/// Swipes slower than this, in pixels per second, do not fling.
pub const MIN_FLING_VELOCITY: f64 = 120.0;

/// Converts horizontal pointer travel into wheel rotation. One ring radius
/// of travel (half the width) turns the ring by one radian.
pub fn drag_to_degrees(dx: f64, width: f64) -> f64 {
    let radius = width / 2.0;
    if radius <= 0.0 {
        return 0.0;
    }
    -(dx / radius).to_degrees()
}
