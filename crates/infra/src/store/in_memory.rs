use std::collections::HashMap;

use salebook_core::{DomainError, DomainResult, SaleId};
use salebook_sales::Sale;

use super::SaleStore;

/// In-memory sale table for tests/dev. Lives as long as the process.
#[derive(Debug, Default, Clone)]
pub struct InMemorySaleStore {
    inner: HashMap<SaleId, Sale>,
}

impl InMemorySaleStore {
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl SaleStore for InMemorySaleStore {
    fn set(&mut self, sale: Sale) -> DomainResult<()> {
        if sale.id.is_empty() {
            return Err(DomainError::EmptyId);
        }

        self.inner.insert(sale.id.clone(), sale);
        Ok(())
    }

    fn read(&self, id: &SaleId) -> DomainResult<Sale> {
        self.inner.get(id).cloned().ok_or(DomainError::NotFound)
    }

    fn read_all_by_user_id(&self, user_id: &str) -> Vec<Sale> {
        self.inner
            .values()
            .filter(|sale| sale.user_id == user_id)
            .cloned()
            .collect()
    }

    fn delete(&mut self, id: &SaleId) -> DomainResult<()> {
        self.inner
            .remove(id)
            .map(|_| ())
            .ok_or(DomainError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use salebook_sales::{CreateFields, SaleStatus};

    fn sale(id: &str, user_id: &str) -> Sale {
        Sale::create(
            SaleId::new(id),
            &CreateFields::new(user_id, 100.0),
            SaleStatus::Pending,
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn set_then_read_returns_a_copy() {
        let mut store = InMemorySaleStore::new();
        store.set(sale("s1", "u1")).unwrap();

        let mut copy = store.read(&SaleId::new("s1")).unwrap();
        copy.amount = 1.0;

        assert_eq!(store.read(&SaleId::new("s1")).unwrap().amount, 100.0);
    }

    #[test]
    fn set_rejects_empty_id() {
        let mut store = InMemorySaleStore::new();
        let mut s = sale("s1", "u1");
        s.id = SaleId::default();

        assert_eq!(store.set(s), Err(DomainError::EmptyId));
        assert!(store.is_empty());
    }

    #[test]
    fn set_overwrites_by_key() {
        let mut store = InMemorySaleStore::new();
        store.set(sale("s1", "u1")).unwrap();
        let mut replacement = sale("s1", "u2");
        replacement.version = 7;
        store.set(replacement).unwrap();

        assert_eq!(store.len(), 1);
        let stored = store.read(&SaleId::new("s1")).unwrap();
        assert_eq!(stored.user_id, "u2");
        assert_eq!(stored.version, 7);
    }

    #[test]
    fn read_missing_is_not_found() {
        let store = InMemorySaleStore::new();
        assert_eq!(store.read(&SaleId::new("nope")), Err(DomainError::NotFound));
    }

    #[test]
    fn read_all_by_user_id_filters_by_owner() {
        let mut store = InMemorySaleStore::new();
        store.set(sale("s1", "u1")).unwrap();
        store.set(sale("s2", "u1")).unwrap();
        store.set(sale("s3", "u2")).unwrap();

        let mut ids: Vec<_> = store
            .read_all_by_user_id("u1")
            .into_iter()
            .map(|s| s.id)
            .collect();
        ids.sort();

        assert_eq!(ids, vec![SaleId::new("s1"), SaleId::new("s2")]);
        assert!(store.read_all_by_user_id("u3").is_empty());
    }

    #[test]
    fn delete_removes_and_reports_missing() {
        let mut store = InMemorySaleStore::new();
        store.set(sale("s1", "u1")).unwrap();

        store.delete(&SaleId::new("s1")).unwrap();
        assert_eq!(store.read(&SaleId::new("s1")), Err(DomainError::NotFound));
        assert_eq!(store.delete(&SaleId::new("s1")), Err(DomainError::NotFound));
    }
}
