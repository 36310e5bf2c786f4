//! Budget-vs-actual variance calculation.

pub mod calculator;
pub mod ratio;

#[cfg(test)]
mod tests;

pub use calculator::VarianceCalculator;
pub use ratio::safe_divide;
