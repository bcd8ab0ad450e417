use crate::core::actions::generate_drawing::ports::style_map::StyleMap;
use crate::core::fractals::circles::styling::kinds::StyleMapKinds;

pub trait CircleStyleMap: StyleMap + Send {
    fn kind(&self) -> StyleMapKinds;
}
