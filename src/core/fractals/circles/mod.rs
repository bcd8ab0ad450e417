pub mod algorithm;
pub mod circle_config;
pub mod errors;
pub mod params;
pub mod styling;
