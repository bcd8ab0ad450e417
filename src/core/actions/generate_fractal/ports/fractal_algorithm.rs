use crate::core::data::circle::Circle;
use crate::core::data::point::Point;

/// Geometry of a branching circle fractal.
///
/// The generators own the traversal and the depth accounting; an algorithm
/// only answers where the seed is and what a parent's children look like.
pub trait FractalAlgorithm {
    fn seed(&self) -> Circle;

    fn max_depth(&self) -> u32;

    /// Number of children placed around every parent.
    fn branch_count(&self) -> usize;

    /// Radius shared by all children of `parent`, or `None` when `parent`
    /// must not descend any further.
    fn child_radius(&self, parent: &Circle) -> Option<f64>;

    fn child_center(&self, parent: &Circle, branch: usize) -> Point;
}
