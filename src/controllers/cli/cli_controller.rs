use std::{path::Path, time::Instant};

use tracing::{debug, info};

use crate::{
    controllers::ports::file_presenter::FilePresenterPort,
    core::{
        actions::{
            generate_drawing::{generate_drawing::generate_drawing, ports::style_map::StyleMap},
            generate_fractal::{
                errors::GenerateFractalError, generate_fractal_rayon::generate_fractal_rayon,
            },
        },
        data::drawing::Drawing,
        fractals::circles::circle_config::CircleFractalConfig,
    },
};

pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    config: CircleFractalConfig,
    drawing: Option<Drawing>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P, config: CircleFractalConfig) -> Self {
        Self {
            presenter,
            config,
            drawing: None,
        }
    }

    pub fn drawing(&self) -> Option<&Drawing> {
        self.drawing.as_ref()
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let params = self.config.params()?;
        let algorithm = self.config.build_algorithm()?;
        let mut style_map = self.config.build_style_map()?;

        info!(
            seed_x = params.seed_center().x,
            seed_y = params.seed_center().y,
            seed_radius = params.seed_radius(),
            step_degrees = params.step_degrees(),
            shrink_coefficient = params.shrink_coefficient(),
            max_depth = params.max_depth(),
            style_map = style_map.display_name(),
            "rendering circle fractal"
        );

        let limit = self.config.circle_limit;
        if algorithm.exceeds_circle_limit(limit) {
            return Err(GenerateFractalError::LimitExceeded { limit }.into());
        }
        debug!(circles = algorithm.predicted_circle_count(), "predicted fractal size");

        let start = Instant::now();
        let fractal = generate_fractal_rayon(&algorithm);
        info!(circles = fractal.len(), duration = ?start.elapsed(), "fractal generated");

        self.drawing = Some(generate_drawing(&fractal, params.canvas(), style_map.as_mut()));

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(drawing) = &self.drawing {
            self.presenter.present(drawing, &filepath)?;
            info!(path = %filepath.as_ref().display(), circles = drawing.len(), "drawing saved");
        }

        Ok(())
    }
}
