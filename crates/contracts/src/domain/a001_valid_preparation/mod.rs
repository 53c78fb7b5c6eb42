pub mod aggregate;
#[cfg(any(test, feature = "fakes"))]
pub mod fakes;

pub use aggregate::{ValidPreparation, ValidPreparationDto, ValidPreparationList, ValidationError};
