pub mod generate_drawing;
pub mod ports;
