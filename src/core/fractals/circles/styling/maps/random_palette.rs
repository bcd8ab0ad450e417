use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::core::actions::generate_drawing::ports::style_map::StyleMap;
use crate::core::data::circle::Circle;
use crate::core::data::style::Style;
use crate::core::fractals::circles::styling::errors::StyleMapError;
use crate::core::fractals::circles::styling::kinds::StyleMapKinds;
use crate::core::fractals::circles::styling::map::CircleStyleMap;

/// Base style with a stroke colour drawn at random from a palette for every
/// circle.
#[derive(Debug, Clone)]
pub struct RandomPaletteStyle {
    base: Style,
    palette: Vec<String>,
    rng: StdRng,
}

impl RandomPaletteStyle {
    pub fn new(base: Style, palette: Vec<String>, rng: StdRng) -> Result<Self, StyleMapError> {
        if palette.is_empty() {
            return Err(StyleMapError::EmptyPalette);
        }

        Ok(Self { base, palette, rng })
    }

    pub fn from_seed(base: Style, palette: Vec<String>, seed: u64) -> Result<Self, StyleMapError> {
        Self::new(base, palette, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(base: Style, palette: Vec<String>) -> Result<Self, StyleMapError> {
        Self::new(base, palette, StdRng::from_entropy())
    }

    #[must_use]
    pub fn palette(&self) -> &[String] {
        &self.palette
    }
}

impl StyleMap for RandomPaletteStyle {
    fn style_for(&mut self, _: &Circle) -> Style {
        match self.palette.choose(&mut self.rng) {
            Some(colour) => self.base.with_stroke(colour.as_str()),
            None => self.base.clone(),
        }
    }

    fn display_name(&self) -> &str {
        StyleMapKinds::RandomPalette.display_name()
    }
}

impl CircleStyleMap for RandomPaletteStyle {
    fn kind(&self) -> StyleMapKinds {
        StyleMapKinds::RandomPalette
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;

    fn palette() -> Vec<String> {
        ["red", "blue", "green", "yellow"].map(String::from).to_vec()
    }

    fn circle() -> Circle {
        Circle::new(Point::new(0.0, 0.0), 5.0)
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        let result = RandomPaletteStyle::from_seed(Style::default(), Vec::new(), 7);

        assert!(matches!(result, Err(StyleMapError::EmptyPalette)));
    }

    #[test]
    fn test_only_palette_colours_are_picked() {
        let mut map = RandomPaletteStyle::from_seed(Style::default(), palette(), 7).unwrap();

        for _ in 0..200 {
            let style = map.style_for(&circle());
            assert!(palette().contains(&style.stroke));
            assert_eq!(style.fill, "none");
            assert_eq!(style.stroke_width, 1.0);
        }
    }

    #[test]
    fn test_same_seed_gives_same_colours() {
        let mut a = RandomPaletteStyle::from_seed(Style::default(), palette(), 42).unwrap();
        let mut b = RandomPaletteStyle::from_seed(Style::default(), palette(), 42).unwrap();

        let strokes_a: Vec<String> = (0..50).map(|_| a.style_for(&circle()).stroke).collect();
        let strokes_b: Vec<String> = (0..50).map(|_| b.style_for(&circle()).stroke).collect();

        assert_eq!(strokes_a, strokes_b);
    }

    #[test]
    fn test_every_palette_colour_eventually_appears() {
        let mut map = RandomPaletteStyle::from_seed(Style::default(), palette(), 3).unwrap();
        let strokes: Vec<String> = (0..500).map(|_| map.style_for(&circle()).stroke).collect();

        for colour in palette() {
            assert!(strokes.contains(&colour), "missing {}", colour);
        }
    }

    #[test]
    fn test_single_colour_palette() {
        let mut map = RandomPaletteStyle::from_seed(Style::default(), vec!["red".into()], 1).unwrap();

        assert_eq!(map.style_for(&circle()).stroke, "red");
    }
}
