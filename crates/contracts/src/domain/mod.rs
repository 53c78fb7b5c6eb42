pub mod common;
pub mod a001_valid_preparation;
