use std::{error::Error, fmt};

#[derive(Debug, PartialEq, Eq)]
pub enum StyleMapError {
    EmptyPalette,
}

impl fmt::Display for StyleMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPalette => write!(f, "colour palette must not be empty"),
        }
    }
}

impl Error for StyleMapError {}
