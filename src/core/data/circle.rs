use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    #[must_use]
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.center.x, self.center.y, self.radius)
    }
}
