pub mod random_palette;
pub mod uniform;
