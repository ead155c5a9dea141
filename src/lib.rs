//! Global polynomial interpolation over `f64` data.

pub mod interpolation;
