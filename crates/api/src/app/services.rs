use std::sync::{Mutex, MutexGuard, PoisonError};

use salebook_infra::{InMemorySaleStore, SaleService};

/// Service type served over HTTP.
pub type Sales = SaleService<InMemorySaleStore>;

/// Shared application services.
///
/// The sale service and its store are single-threaded; the mutex here is the
/// synchronization they expect callers to provide.
#[derive(Debug)]
pub struct AppServices {
    sales: Mutex<Sales>,
}

impl AppServices {
    pub fn new(sales: Sales) -> Self {
        Self {
            sales: Mutex::new(sales),
        }
    }

    /// Fresh in-memory store, wall clock, random initial status.
    pub fn in_memory() -> Self {
        Self::new(SaleService::new(InMemorySaleStore::new()))
    }

    /// Exclusive access to the sale service.
    ///
    /// A poisoned lock is recovered: each operation touches a single record
    /// and leaves it either written or untouched.
    pub fn sales(&self) -> MutexGuard<'_, Sales> {
        self.sales.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
