//! Infrastructure layer: sale storage and the service façade over it.

pub mod service;
pub mod store;

pub use service::SaleService;
pub use store::{InMemorySaleStore, SaleStore};
