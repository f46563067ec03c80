//! Sale service: lifecycle rules over a [`SaleStore`].
//!
//! The service sits between the HTTP handlers and the store. It owns identity
//! assignment and creation defaults, applies the restricted update policy, and
//! forwards reads and deletes.
//!
//! ```text
//! create(fields)   -> validate -> mint id/timestamps/status -> store.set
//! update(id, f)    -> store.read -> apply_update -> store.set
//! delete(id)       -> store.delete
//! get(user_id, _)  -> store.read(user_id)
//! list_by_user     -> store.read_all_by_user_id -> filter -> report
//! ```
//!
//! Time and the initial status come from injected collaborators so tests can
//! pin them. Logging goes through `tracing`; the active subscriber is whatever
//! the caller installed.

use salebook_core::{Clock, DomainResult, SaleId, SystemClock};
use salebook_sales::{
    CreateFields, RandomStatus, Sale, SaleStatus, SalesReport, StatusSource, UpdateFields,
};

use crate::store::SaleStore;

pub struct SaleService<S> {
    store: S,
    clock: Box<dyn Clock>,
    status_source: Box<dyn StatusSource>,
}

impl<S> core::fmt::Debug for SaleService<S>
where
    S: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SaleService")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl<S> SaleService<S> {
    /// Service over `store` using the wall clock and an entropy-seeded status source.
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: Box::new(SystemClock),
            status_source: Box::new(RandomStatus::from_entropy()),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_status_source(mut self, source: impl StatusSource + 'static) -> Self {
        self.status_source = Box::new(source);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S> SaleService<S>
where
    S: SaleStore,
{
    /// Create a brand-new sale.
    ///
    /// Requires both `user_id` and `amount`. Assigns a fresh id, sets
    /// `created_at == updated_at == now`, picks a random status and starts at
    /// version 1. Storage failures are logged and returned unchanged.
    pub fn create(&mut self, fields: &CreateFields) -> DomainResult<Sale> {
        let sale = Sale::create(
            SaleId::generate(),
            fields,
            self.status_source.pick(),
            self.clock.now(),
        )?;

        if let Err(e) = self.store.set(sale.clone()) {
            tracing::error!(error = %e, sale = ?sale, "failed to set sale");
            return Err(e);
        }

        tracing::info!(sale_id = %sale.id, user_id = %sale.user_id, status = %sale.status, "sale created");
        Ok(sale)
    }

    /// Single-record read that treats `user_id` as a sale id.
    ///
    /// `status` is not consulted. See [`SaleService::list_by_user`] for the
    /// user-scoped, status-filtered lookup.
    pub fn get(&self, user_id: &str, status: &str) -> DomainResult<Sale> {
        tracing::debug!(user_id, status, "get sale");
        self.store.read(&SaleId::new(user_id))
    }

    /// Every sale owned by `user_id`, optionally narrowed to one status, with totals.
    ///
    /// Results are ordered by creation time, then id.
    pub fn list_by_user(&self, user_id: &str, status: Option<&str>) -> DomainResult<SalesReport> {
        let status = status
            .filter(|s| !s.is_empty())
            .map(str::parse::<SaleStatus>)
            .transpose()?;

        let mut sales: Vec<Sale> = self
            .store
            .read_all_by_user_id(user_id)
            .into_iter()
            .filter(|sale| status.is_none_or(|s| sale.status == s))
            .collect();
        sales.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        Ok(SalesReport::from_sales(sales))
    }

    /// Apply the permitted mutations to an existing sale.
    ///
    /// Only a case-insensitive `"pending"` status is honored; other values are
    /// ignored. Version and `updated_at` move on every call regardless.
    pub fn update(&mut self, id: &SaleId, fields: &UpdateFields) -> DomainResult<Sale> {
        let mut existing = self.store.read(id)?;

        if fields.status.is_some() && !fields.requests_pending() {
            tracing::debug!(sale_id = %id, requested = ?fields.status, "ignoring status change");
        }
        existing.apply_update(fields, self.clock.now());

        self.store.set(existing.clone())?;

        tracing::info!(sale_id = %id, version = existing.version, status = %existing.status, "sale updated");
        Ok(existing)
    }

    pub fn delete(&mut self, id: &SaleId) -> DomainResult<()> {
        self.store.delete(id)?;
        tracing::info!(sale_id = %id, "sale deleted");
        Ok(())
    }
}
