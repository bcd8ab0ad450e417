use std::{error::Error, fmt};

#[derive(Debug, PartialEq, Eq)]
pub enum GenerateFractalError {
    LimitExceeded { limit: u64 },
}

impl fmt::Display for GenerateFractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LimitExceeded { limit } => {
                write!(f, "fractal would contain more than {} circles", limit)
            }
        }
    }
}

impl Error for GenerateFractalError {}
