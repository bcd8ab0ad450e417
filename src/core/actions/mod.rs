pub mod generate_drawing;
pub mod generate_fractal;
