use crate::core::{
    data::{point::Point, style::Style},
    fractals::circles::{
        algorithm::CircleFractalAlgorithm,
        errors::CircleFractalError,
        params::CircleFractalParams,
        styling::{
            errors::StyleMapError, factory::style_map_factory, kinds::StyleMapKinds,
            map::CircleStyleMap,
        },
    },
};

pub const DEFAULT_CIRCLE_LIMIT: u64 = 5_000_000;

pub(crate) fn default_palette() -> Vec<String> {
    ["red", "blue", "green", "yellow"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Everything needed for one run, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleFractalConfig {
    pub seed_center: Point,
    pub seed_radius: f64,
    pub canvas: (f64, f64),
    pub step_degrees: u32,
    pub shrink_coefficient: f64,
    pub max_depth: u32,
    pub style: Style,
    pub style_map_kind: StyleMapKinds,
    pub palette: Vec<String>,
    pub rng_seed: Option<u64>,
    pub circle_limit: u64,
}

impl Default for CircleFractalConfig {
    fn default() -> Self {
        Self {
            seed_center: Point::new(400.0, 400.0),
            seed_radius: 200.0,
            canvas: (800.0, 800.0),
            step_degrees: 15,
            shrink_coefficient: 0.5,
            max_depth: 2,
            style: Style::default(),
            style_map_kind: StyleMapKinds::default(),
            palette: default_palette(),
            rng_seed: None,
            circle_limit: DEFAULT_CIRCLE_LIMIT,
        }
    }
}

impl CircleFractalConfig {
    pub fn params(&self) -> Result<CircleFractalParams, CircleFractalError> {
        CircleFractalParams::new(
            self.seed_center,
            self.seed_radius,
            self.canvas,
            self.step_degrees,
            self.shrink_coefficient,
            self.max_depth,
        )
    }

    pub fn build_algorithm(&self) -> Result<CircleFractalAlgorithm, CircleFractalError> {
        Ok(CircleFractalAlgorithm::from_params(&self.params()?))
    }

    pub fn build_style_map(&self) -> Result<Box<dyn CircleStyleMap>, StyleMapError> {
        style_map_factory(self.style_map_kind, self.style.clone(), &self.palette, self.rng_seed)
    }
}
