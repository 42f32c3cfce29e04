pub mod calculations;
pub mod models;
pub mod rules;

pub use models::*;
