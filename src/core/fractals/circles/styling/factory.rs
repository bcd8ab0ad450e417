use crate::core::data::style::Style;
use crate::core::fractals::circles::styling::{
    errors::StyleMapError,
    kinds::StyleMapKinds,
    map::CircleStyleMap,
    maps::{random_palette::RandomPaletteStyle, uniform::UniformStyle},
};

/// Builds the style map for `kind`. `seed` makes random colouring
/// reproducible; without it the generator is seeded from entropy.
pub fn style_map_factory(
    kind: StyleMapKinds,
    base: Style,
    palette: &[String],
    seed: Option<u64>,
) -> Result<Box<dyn CircleStyleMap>, StyleMapError> {
    match kind {
        StyleMapKinds::Uniform => Ok(Box::new(UniformStyle::new(base))),
        StyleMapKinds::RandomPalette => {
            let palette = palette.to_vec();
            let map = match seed {
                Some(seed) => RandomPaletteStyle::from_seed(base, palette, seed)?,
                None => RandomPaletteStyle::from_entropy(base, palette)?,
            };
            Ok(Box::new(map))
        }
    }
}
