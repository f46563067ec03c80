//! Keyed sale storage.
//!
//! The store has no interior locking: writes take `&mut self`, and callers
//! that share a store across threads wrap it (or the service owning it) in
//! their own mutex.

pub mod in_memory;

pub use in_memory::InMemorySaleStore;

use salebook_core::{DomainResult, SaleId};
use salebook_sales::Sale;

/// Storage port for sale records.
pub trait SaleStore: Send {
    /// Insert or overwrite the record keyed by `sale.id`.
    ///
    /// Fails with `EmptyId` when the id is empty. No uniqueness check beyond
    /// overwrite-by-key.
    fn set(&mut self, sale: Sale) -> DomainResult<()>;

    /// Copy of the record for `id`, or `NotFound`.
    fn read(&self, id: &SaleId) -> DomainResult<Sale>;

    /// Every record owned by `user_id` (full scan, unspecified order).
    fn read_all_by_user_id(&self, user_id: &str) -> Vec<Sale>;

    /// Remove the record for `id`, or `NotFound`.
    fn delete(&mut self, id: &SaleId) -> DomainResult<()>;
}

impl<S> SaleStore for Box<S>
where
    S: SaleStore + ?Sized,
{
    fn set(&mut self, sale: Sale) -> DomainResult<()> {
        (**self).set(sale)
    }

    fn read(&self, id: &SaleId) -> DomainResult<Sale> {
        (**self).read(id)
    }

    fn read_all_by_user_id(&self, user_id: &str) -> Vec<Sale> {
        (**self).read_all_by_user_id(user_id)
    }

    fn delete(&mut self, id: &SaleId) -> DomainResult<()> {
        (**self).delete(id)
    }
}
