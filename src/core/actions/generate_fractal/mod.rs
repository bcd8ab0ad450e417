pub mod errors;
pub mod generate_fractal;
pub mod generate_fractal_rayon;
pub mod ports;
