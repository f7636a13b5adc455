//! Angle bookkeeping for circular arcs.
//!
//! An arc is described by `start_angle` and a signed `sweep`:
//! - `sweep > 0`: counter-clockwise
//! - `sweep < 0`: clockwise
//! - `|sweep| = 2π`: full circle
use std::f64::consts::{PI, TAU};

use super::TOLERANCE;

/// Normalizes an angle into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative input.
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Signed sweep travelled from `start_angle` to `end_angle` in the given direction.
///
/// The magnitude lies in `[0, 2π]`. Angles exactly `2π` apart describe a full
/// circle; coincident angles describe a degenerate (zero) sweep.
#[must_use]
pub fn sweep_between(start_angle: f64, end_angle: f64, ccw: bool) -> f64 {
    let eps = TOLERANCE * 100.0;
    let raw = end_angle - start_angle;
    if raw.abs() < eps {
        return 0.0;
    }
    if (raw.abs() - TAU).abs() < eps {
        return if ccw { TAU } else { -TAU };
    }
    let magnitude = if ccw {
        normalize_angle(raw)
    } else {
        normalize_angle(-raw)
    };
    if ccw {
        magnitude
    } else {
        -magnitude
    }
}

/// Converts an absolute angle to an arc parameter `t` in `[0, 1]`.
///
/// Returns `None` if the angle is not within the arc's angular range.
#[must_use]
pub fn angle_to_arc_param(angle: f64, start_angle: f64, sweep: f64) -> Option<f64> {
    let eps = TOLERANCE * 100.0;
    if sweep.abs() < eps {
        return None;
    }

    let mut delta = angle - start_angle;

    // Bring delta into the sweep's direction.
    if sweep > 0.0 {
        while delta < -eps {
            delta += 2.0 * PI;
        }
        while delta > 2.0 * PI + eps {
            delta -= 2.0 * PI;
        }
    } else {
        while delta > eps {
            delta -= 2.0 * PI;
        }
        while delta < -2.0 * PI - eps {
            delta += 2.0 * PI;
        }
    }

    let t = delta / sweep;
    if t >= -eps && t <= 1.0 + eps {
        Some(t.clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Returns whether `angle` lies inside the arc's angular range.
#[must_use]
pub fn angle_in_sweep(angle: f64, start_angle: f64, sweep: f64) -> bool {
    if sweep.abs() >= TAU - TOLERANCE {
        return true;
    }
    angle_to_arc_param(angle, start_angle, sweep).is_some()
}
