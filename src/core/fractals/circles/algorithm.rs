use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::angle_set::AngleSet;
use crate::core::data::circle::Circle;
use crate::core::data::fractal::Fractal;
use crate::core::data::point::Point;
use crate::core::fractals::circles::params::CircleFractalParams;
use crate::core::util::build_angles::build_angles;
use crate::core::util::move_point::move_point;

/// Children at or below this radius are not generated.
pub const MIN_CHILD_RADIUS: f64 = 1.0;
/// Children above this radius are not generated.
pub const MAX_CHILD_RADIUS: f64 = 10_000.0;

// With at least two branches, 64 fertile generations overflow a u64 count.
const SATURATING_GENERATIONS: u64 = 64;

/// Rings of shrinking circles placed around each parent at fixed angles.
///
/// Children sit on the parent's own circumference (distance = parent radius)
/// and share the radius `parent.radius * shrink_coefficient`.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleFractalAlgorithm {
    seed: Circle,
    angles: AngleSet,
    shrink_coefficient: f64,
    max_depth: u32,
}

impl FractalAlgorithm for CircleFractalAlgorithm {
    fn seed(&self) -> Circle {
        self.seed
    }

    fn max_depth(&self) -> u32 {
        self.max_depth
    }

    fn branch_count(&self) -> usize {
        self.angles.len()
    }

    fn child_radius(&self, parent: &Circle) -> Option<f64> {
        self.child_radius_of(parent.radius)
    }

    fn child_center(&self, parent: &Circle, branch: usize) -> Point {
        move_point(parent.center, parent.radius, self.angles[branch])
    }
}

impl CircleFractalAlgorithm {
    #[must_use]
    pub fn new(seed: Circle, angles: AngleSet, shrink_coefficient: f64, max_depth: u32) -> Self {
        Self {
            seed,
            angles,
            shrink_coefficient,
            max_depth,
        }
    }

    #[must_use]
    pub fn from_params(params: &CircleFractalParams) -> Self {
        Self::new(
            Circle::new(params.seed_center(), params.seed_radius()),
            build_angles(params.step_degrees()),
            params.shrink_coefficient(),
            params.max_depth(),
        )
    }

    #[must_use]
    pub fn angles(&self) -> &AngleSet {
        &self.angles
    }

    #[must_use]
    pub fn shrink_coefficient(&self) -> f64 {
        self.shrink_coefficient
    }

    fn child_radius_of(&self, parent_radius: f64) -> Option<f64> {
        let radius = parent_radius * self.shrink_coefficient;

        (radius > MIN_CHILD_RADIUS && radius <= MAX_CHILD_RADIUS).then_some(radius)
    }

    /// Exact number of circles generation would produce, seed included,
    /// saturating at `u64::MAX`.
    #[must_use]
    pub fn predicted_circle_count(&self) -> u64 {
        self.count_circles(u64::MAX)
    }

    /// Whether generation would produce more than `limit` circles.
    ///
    /// Stops counting as soon as the answer is known, so it stays cheap for
    /// configurations whose full count is astronomically large.
    #[must_use]
    pub fn exceeds_circle_limit(&self, limit: u64) -> bool {
        self.count_circles(limit) > limit
    }

    /// Counts circles, returning early with some value above `stop_above`
    /// once the total is known to exceed it.
    ///
    /// A child's radius depends only on its parent's radius, so every circle
    /// of shrink generation `j` with budget `d` has the same number of
    /// descendants `n(j, d)`:
    ///
    /// ```text
    /// n(j, 0) = 0
    /// n(j, d) = n(j, d - 1) + branches * (1 + n(j + 1, d - 1))
    /// ```
    ///
    /// and `n(j, d) = 0` for generations that cannot have children.
    fn count_circles(&self, stop_above: u64) -> u64 {
        let branches = self.angles.len() as u64;
        let max_depth = u64::from(self.max_depth);

        let mut fertile: u64 = 0;
        let mut radius = self.seed.radius;
        while fertile < max_depth.min(SATURATING_GENERATIONS) {
            match self.child_radius_of(radius) {
                Some(child_radius) => {
                    radius = child_radius;
                    fertile += 1;
                }
                None => break,
            }
        }

        if fertile == 0 || branches == 0 {
            return 1;
        }

        if fertile >= SATURATING_GENERATIONS && branches >= 2 {
            return u64::MAX;
        }

        // descendants[j] = n(j, d) for the current budget d; the extra slot is
        // the barren generation below the last fertile one.
        let mut descendants = vec![0u64; fertile as usize + 1];

        for _ in 0..max_depth {
            for j in 0..fertile as usize {
                let ring = branches.saturating_mul(descendants[j + 1].saturating_add(1));
                descendants[j] = descendants[j].saturating_add(ring);
            }

            let total = descendants[0].saturating_add(1);
            if total > stop_above || total == u64::MAX {
                return total;
            }
        }

        descendants[0].saturating_add(1)
    }
}

/// Generates the circle fractal for a seed circle and a prebuilt angle set.
#[must_use]
pub fn generate_circle_fractal(
    seed_center: Point,
    seed_radius: f64,
    angles: &AngleSet,
    shrink_coefficient: f64,
    max_depth: u32,
) -> Fractal {
    let algorithm = CircleFractalAlgorithm::new(
        Circle::new(seed_center, seed_radius),
        angles.clone(),
        shrink_coefficient,
        max_depth,
    );

    generate_fractal(&algorithm)
}
