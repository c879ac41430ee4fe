//! Circular arithmetic on wheel angles, in degrees.

pub const FULL_TURN: f64 = 360.0;
pub const HALF_TURN: f64 = 180.0;

/// Normalizes any finite angle into `[0, 360)`.
pub fn wrap360(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Distance from the zero slot irrespective of direction, used only to compare items.
pub fn tie_break(angle: f64) -> f64 {
    if angle > HALF_TURN {
        FULL_TURN - angle
    } else {
        angle
    }
}

/// Signed rotation with the smallest magnitude that brings `angle` to zero.
pub fn minimal_rotation(angle: f64) -> f64 {
    if angle > HALF_TURN {
        FULL_TURN - angle
    } else {
        -angle
    }
}

/// Angle assigned to slot `index` when the ring is laid out around `selected`.
pub fn slot_angle(index: usize, selected: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let unit = FULL_TURN / count as f64;
    wrap360(unit * index as f64 - unit * selected as f64)
}
