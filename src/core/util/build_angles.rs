use std::f64::consts::PI;

use crate::core::data::angle_set::AngleSet;

const FULL_TURN_DEGREES: u32 = 360;

/// Angles `0, step, 2 * step, ...` below a full turn, converted to radians.
///
/// `step_degrees` must be in `1..=180`; callers validate it beforehand.
#[must_use]
pub fn build_angles(step_degrees: u32) -> AngleSet {
    let radians = (0..FULL_TURN_DEGREES)
        .step_by(step_degrees as usize)
        .map(|degrees| f64::from(degrees) * PI / 180.0)
        .collect();

    AngleSet::from_radians(radians)
}
