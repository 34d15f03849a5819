pub mod receipts;

pub use receipts::*;
