use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CanvasSizeError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for CanvasSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "canvas size must be positive and finite: {}x{}", width, height)
            }
        }
    }
}

impl Error for CanvasSizeError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasSize {
    width: f64,
    height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Result<Self, CanvasSizeError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;

        if !valid(width) || !valid(height) {
            return Err(CanvasSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}
