use crate::core::actions::generate_drawing::ports::style_map::StyleMap;
use crate::core::data::circle::Circle;
use crate::core::data::style::Style;
use crate::core::fractals::circles::styling::kinds::StyleMapKinds;
use crate::core::fractals::circles::styling::map::CircleStyleMap;

#[derive(Debug, Clone, PartialEq)]
pub struct UniformStyle {
    style: Style,
}

impl UniformStyle {
    #[must_use]
    pub fn new(style: Style) -> Self {
        Self { style }
    }
}

impl StyleMap for UniformStyle {
    fn style_for(&mut self, _: &Circle) -> Style {
        self.style.clone()
    }

    fn display_name(&self) -> &str {
        StyleMapKinds::Uniform.display_name()
    }
}

impl CircleStyleMap for UniformStyle {
    fn kind(&self) -> StyleMapKinds {
        StyleMapKinds::Uniform
    }
}
