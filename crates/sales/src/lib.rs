//! Sales domain module.
//!
//! This crate contains the lifecycle rules for sale records, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage). Time and
//! randomness come in from the caller.

pub mod report;
pub mod sale;
pub mod status;

pub use report::{SalesMetadata, SalesReport};
pub use sale::{CreateFields, Sale, SaleStatus, UpdateFields};
pub use status::{FixedStatus, RandomStatus, StatusSource};
