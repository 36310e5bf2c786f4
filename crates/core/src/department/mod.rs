//! Department-level rollup of analyzed records.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::DepartmentAggregator;
pub use types::DepartmentSummary;
