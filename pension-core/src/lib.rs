pub mod calculations;
pub mod models;

pub use calculations::{PensionCalculator, calculate, calculate_as_of};
pub use models::*;
