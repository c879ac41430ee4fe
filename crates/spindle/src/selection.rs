//! Picks the item to pin at the zero slot once the wheel comes to rest.

use crate::angle;
use crate::layout::{ItemState, WheelLayout};

/// Rotations smaller than this, in degrees, count as already in place.
pub const SNAP_RESOLUTION: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub index: usize,
    /// Signed rotation that brings `index` to zero.
    pub rotation: f64,
}

impl Resolution {
    pub fn is_in_place(&self) -> bool {
        self.rotation.abs() < SNAP_RESOLUTION
    }
}

/// Item with the smallest distance to zero; equal distances go to the lowest index.
pub fn nearest_to_zero(items: &[ItemState]) -> Option<&ItemState> {
    items.iter().min_by(|a, b| {
        angle::tie_break(a.angle())
            .total_cmp(&angle::tie_break(b.angle()))
            .then(a.index().cmp(&b.index()))
    })
}

pub fn resolve(layout: &WheelLayout) -> Option<Resolution> {
    nearest_to_zero(layout.items()).map(|item| Resolution {
        index: item.index(),
        rotation: angle::minimal_rotation(item.angle()),
    })
}
