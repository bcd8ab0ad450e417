mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::cli_controller::CliController;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::generate_drawing::generate_drawing::generate_drawing;
pub use crate::core::actions::generate_drawing::ports::style_map::StyleMap;
pub use crate::core::actions::generate_fractal::errors::GenerateFractalError;
pub use crate::core::actions::generate_fractal::generate_fractal::{generate_fractal, generate_fractal_limited};
pub use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::data::{
    angle_set::AngleSet, canvas_size::CanvasSize, circle::Circle, drawing::Drawing,
    drawing::DrawnCircle, fractal::Fractal, point::Point, style::Style,
};
pub use crate::core::fractals::circles::algorithm::{
    generate_circle_fractal, CircleFractalAlgorithm, MAX_CHILD_RADIUS, MIN_CHILD_RADIUS,
};
pub use crate::core::fractals::circles::circle_config::{CircleFractalConfig, DEFAULT_CIRCLE_LIMIT};
pub use crate::core::fractals::circles::errors::CircleFractalError;
pub use crate::core::fractals::circles::params::CircleFractalParams;
pub use crate::core::fractals::circles::styling::{
    errors::StyleMapError, factory::style_map_factory, kinds::StyleMapKinds,
    map::CircleStyleMap, maps::random_palette::RandomPaletteStyle, maps::uniform::UniformStyle,
};
pub use crate::core::util::{build_angles::build_angles, move_point::move_point};
pub use crate::presenters::file::svg::SvgFilePresenter;
