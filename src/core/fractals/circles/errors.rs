use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum CircleFractalError {
    RadiusExceedsCanvas { radius: f64, width: f64, height: f64 },
    StepOutOfRange { step_degrees: u32 },
    RunawayGrowth { shrink_coefficient: f64, radius: f64 },
    NonFiniteValue { name: &'static str, value: f64 },
    InvalidCanvasSize { width: f64, height: f64 },
}

impl fmt::Display for CircleFractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RadiusExceedsCanvas { radius, width, height } => {
                write!(f, "seed radius {} exceeds canvas size {}x{}", radius, width, height)
            }
            Self::StepOutOfRange { step_degrees } => {
                write!(f, "angular step must be between 1 and 180 degrees, got {}", step_degrees)
            }
            Self::RunawayGrowth { shrink_coefficient, radius } => {
                write!(
                    f,
                    "shrink coefficient {} is too large for seed radius {}",
                    shrink_coefficient, radius
                )
            }
            Self::NonFiniteValue { name, value } => {
                write!(f, "{} must be finite, got {}", name, value)
            }
            Self::InvalidCanvasSize { width, height } => {
                write!(f, "canvas size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for CircleFractalError {}
