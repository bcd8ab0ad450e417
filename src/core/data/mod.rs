pub mod angle_set;
pub mod canvas_size;
pub mod circle;
pub mod drawing;
pub mod fractal;
pub mod point;
pub mod style;
