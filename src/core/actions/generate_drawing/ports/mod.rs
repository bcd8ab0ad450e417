pub mod style_map;
