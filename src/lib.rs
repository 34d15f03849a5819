pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod models;

// Re-export commonly used types
pub use models::{Item, PointsResponse, ProcessResponse, RawItem, RawReceipt, Receipt};

pub use db::{InMemoryReceiptStore, ReceiptId, ReceiptStore, StoredReceipt};

pub use domain::scoring::Points;
pub use domain::{
    process_receipt, score, score_breakdown, validate, PointsBreakdown, ValidationError,
};
