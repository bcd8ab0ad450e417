pub mod build_angles;
pub mod move_point;
