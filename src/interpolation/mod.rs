pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod table;
pub mod traits;
pub use traits::Interpolator;

pub mod lagrange;
