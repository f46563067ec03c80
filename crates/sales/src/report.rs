//! Per-user sales summary.

use serde::{Deserialize, Serialize};

use crate::sale::{Sale, SaleStatus};

/// Aggregate counters over a set of sales.
///
/// `approved` counts completed sales and `rejected` counts cancelled ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesMetadata {
    pub quantity: usize,
    pub approved: usize,
    pub rejected: usize,
    pub pending: usize,
    pub total_amount: f64,
}

/// Sales plus their summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    pub metadata: SalesMetadata,
    pub results: Vec<Sale>,
}

impl SalesReport {
    pub fn from_sales(results: Vec<Sale>) -> Self {
        let mut metadata = SalesMetadata {
            quantity: results.len(),
            ..SalesMetadata::default()
        };

        for sale in &results {
            match sale.status {
                SaleStatus::Pending => metadata.pending += 1,
                SaleStatus::Completed => metadata.approved += 1,
                SaleStatus::Cancelled => metadata.rejected += 1,
            }
            metadata.total_amount += sale.amount;
        }

        Self { metadata, results }
    }
}
