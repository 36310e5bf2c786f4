//! Cost-savings opportunity detection.
//!
//! Two rules run over analyzed records, in this order:
//! - High variance outliers (large overspends, including unbudgeted spend)
//! - Potential duplicate payments (same date, vendor and amount)

pub mod detector;
pub mod duplicate;
pub mod types;


pub use detector::{HIGH_VARIANCE_AMOUNT, HIGH_VARIANCE_FRACTION, OpportunityDetector};
pub use duplicate::{DuplicateCluster, DuplicateKey};
pub use types::{DuplicateDetail, Opportunity, OpportunityDetail, OpportunityType, OutlierDetail};
