use crate::core::data::point::Point;

/// Moves `origin` by `distance` along `angle` (radians).
#[must_use]
pub fn move_point(origin: Point, distance: f64, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();

    Point {
        x: origin.x + cos * distance,
        y: origin.y + sin * distance,
    }
}
