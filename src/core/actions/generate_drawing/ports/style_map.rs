use crate::core::data::circle::Circle;
use crate::core::data::style::Style;

/// Picks the style for each circle as it is drawn.
///
/// Takes `&mut self` so maps may carry state such as a random generator.
pub trait StyleMap {
    fn style_for(&mut self, circle: &Circle) -> Style;

    fn display_name(&self) -> &str;
}
