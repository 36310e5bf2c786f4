//! Duplicate payment clustering.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::types::DuplicateDetail;
use crate::record::AnalyzedRecord;

/// Composite key identifying a potential duplicate payment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DuplicateKey {
    /// Posting date.
    pub date: NaiveDate,
    /// Vendor, matched exactly.
    pub vendor: String,
    /// Amount paid, matched numerically (`100` equals `100.00`).
    pub actual_amount: Decimal,
}

impl From<&AnalyzedRecord> for DuplicateKey {
    fn from(analyzed: &AnalyzedRecord) -> Self {
        Self {
            date: analyzed.record.date,
            vendor: analyzed.record.vendor.clone(),
            actual_amount: analyzed.record.actual_amount,
        }
    }
}

/// Two or more records sharing a duplicate key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateCluster {
    /// Shared key.
    pub key: DuplicateKey,
    /// Every member of the cluster, in input order.
    pub members: Vec<DuplicateDetail>,
}

impl DuplicateCluster {
    /// Number of payments that could be dropped, keeping one.
    #[must_use]
    pub fn removable(&self) -> usize {
        self.members.len().saturating_sub(1)
    }

    /// Amount avoided by keeping only the single largest payment.
    #[must_use]
    pub fn savings(&self) -> Decimal {
        let total: Decimal = self.members.iter().map(|m| m.actual_amount).sum();
        let largest = self
            .members
            .iter()
            .map(|m| m.actual_amount)
            .max()
            .unwrap_or(Decimal::ZERO);
        total - largest
    }

    /// Groups records by duplicate key and keeps groups of size two or more.
    ///
    /// Clusters are ordered by the first appearance of their key.
    #[must_use]
    pub fn find_all(records: &[AnalyzedRecord]) -> Vec<Self> {
        let mut index: HashMap<DuplicateKey, usize> = HashMap::new();
        let mut groups: Vec<Self> = Vec::new();

        for analyzed in records {
            let key = DuplicateKey::from(analyzed);
            let slot = match index.get(&key) {
                Some(slot) => *slot,
                None => {
                    index.insert(key.clone(), groups.len());
                    groups.push(Self {
                        key,
                        members: Vec::new(),
                    });
                    groups.len() - 1
                }
            };
            groups[slot].members.push(DuplicateDetail::from(analyzed));
        }

        groups.retain(|group| group.members.len() >= 2);
        groups
    }
}
