use crate::core::{
    data::{canvas_size::CanvasSize, point::Point},
    fractals::circles::errors::CircleFractalError,
};

pub const MIN_STEP_DEGREES: u32 = 1;
pub const MAX_STEP_DEGREES: u32 = 180;
const MAX_SHRINK_COEFFICIENT_FOR_LARGE_SEED: f64 = 10.0;

/// Validated geometry for a circle fractal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleFractalParams {
    seed_center: Point,
    seed_radius: f64,
    canvas: CanvasSize,
    step_degrees: u32,
    shrink_coefficient: f64,
    max_depth: u32,
}

impl CircleFractalParams {
    pub fn new(
        seed_center: Point,
        seed_radius: f64,
        canvas: (f64, f64),
        step_degrees: u32,
        shrink_coefficient: f64,
        max_depth: u32,
    ) -> Result<Self, CircleFractalError> {
        for (name, value) in [
            ("seed center x", seed_center.x),
            ("seed center y", seed_center.y),
            ("seed radius", seed_radius),
            ("shrink coefficient", shrink_coefficient),
        ] {
            if !value.is_finite() {
                return Err(CircleFractalError::NonFiniteValue { name, value });
            }
        }

        let (width, height) = canvas;
        let canvas = CanvasSize::new(width, height)
            .map_err(|_| CircleFractalError::InvalidCanvasSize { width, height })?;

        if seed_radius > width || seed_radius > height {
            return Err(CircleFractalError::RadiusExceedsCanvas {
                radius: seed_radius,
                width,
                height,
            });
        }

        if !(MIN_STEP_DEGREES..=MAX_STEP_DEGREES).contains(&step_degrees) {
            return Err(CircleFractalError::StepOutOfRange { step_degrees });
        }

        if shrink_coefficient > MAX_SHRINK_COEFFICIENT_FOR_LARGE_SEED && seed_radius > 1.0 {
            return Err(CircleFractalError::RunawayGrowth {
                shrink_coefficient,
                radius: seed_radius,
            });
        }

        Ok(Self {
            seed_center,
            seed_radius,
            canvas,
            step_degrees,
            shrink_coefficient,
            max_depth,
        })
    }

    pub fn seed_center(&self) -> Point {
        self.seed_center
    }

    pub fn seed_radius(&self) -> f64 {
        self.seed_radius
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn step_degrees(&self) -> u32 {
        self.step_degrees
    }

    pub fn shrink_coefficient(&self) -> f64 {
        self.shrink_coefficient
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}
