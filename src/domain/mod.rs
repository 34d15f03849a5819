// Domain layer - receipt validation and points scoring with no HTTP concerns
// Handlers, the CLI and tests all call into these modules

pub mod scoring;
pub mod validation;

use tracing::{info, warn};

use crate::db::{ReceiptId, ReceiptStore, StoredReceipt};
use crate::models::RawReceipt;

/// Receipt validation failures. All of these are caller mistakes, never faults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: String },

    #[error("{field} has an invalid format: {value:?}")]
    InvalidFormat { field: String, value: String },

    #[error("{field} is not a valid amount: {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("receipt must contain at least one item")]
    TooFewItems,
}

impl ValidationError {
    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyField { .. } => "empty_field",
            Self::InvalidFormat { .. } => "invalid_format",
            Self::InvalidNumber { .. } => "invalid_number",
            Self::TooFewItems => "too_few_items",
        }
    }
}

/// Validate and score a submitted receipt, then store it under a fresh id.
///
/// Nothing is written to the store unless validation succeeds.
#[tracing::instrument(skip(raw, store), fields(retailer = %raw.retailer))]
pub fn process_receipt(
    raw: &RawReceipt,
    store: &dyn ReceiptStore,
) -> Result<ReceiptId, ValidationError> {
    let receipt = validation::validate(raw).inspect_err(|e| {
        warn!(kind = e.kind(), error = %e, "Receipt rejected");
    })?;

    let points = scoring::score(&receipt);
    let id = ReceiptId::new();
    store.put(id.clone(), StoredReceipt { receipt, points });

    info!(receipt_id = %id, points, "Receipt processed");
    Ok(id)
}

// Re-export commonly used types and functions
pub use scoring::{score, score_breakdown, PointsBreakdown};
pub use validation::validate;
