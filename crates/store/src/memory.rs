//! Currency store trait and its in-memory implementation.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use sarraf_core::currency::Currency;
use sarraf_shared::{CurrencyId, CurrencySettings};

use crate::error::{StoreError, StoreResult};
use crate::record::CurrencyRecord;

/// Read and insert access to currency descriptors.
///
/// Lookups hand out shared descriptors, so every `Money` built from one
/// result points at the same allocation.
pub trait CurrencyStore: Send + Sync {
    /// Finds a currency by id.
    fn find_by_id(&self, id: CurrencyId) -> StoreResult<Arc<Currency>>;

    /// Finds a currency by code, ignoring case.
    fn find_by_code(&self, code: &str) -> StoreResult<Arc<Currency>>;

    /// Validates and stores a record.
    ///
    /// # Errors
    ///
    /// Returns `Duplicate` if the id or code is taken, `Invalid` if the record
    /// does not describe a valid currency.
    fn insert(&self, record: CurrencyRecord) -> StoreResult<Arc<Currency>>;

    /// All currencies, ordered by id.
    fn all(&self) -> Vec<Arc<Currency>>;
}

/// Concurrent in-memory currency store.
#[derive(Debug, Default)]
pub struct InMemoryCurrencyStore {
    by_id: DashMap<CurrencyId, Arc<Currency>>,
    by_code: DashMap<String, CurrencyId>,
}

impl InMemoryCurrencyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded from configured currencies.
    ///
    /// # Errors
    ///
    /// Returns the first invalid or duplicate entry.
    pub fn from_settings(settings: &[CurrencySettings]) -> StoreResult<Self> {
        let store = Self::new();
        let now = Utc::now();
        for entry in settings {
            store.insert(CurrencyRecord::from_settings(entry, now)?)?;
        }
        tracing::info!(count = store.len(), "seeded currency store");
        Ok(store)
    }

    /// Number of stored currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if the store holds no currencies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl CurrencyStore for InMemoryCurrencyStore {
    fn find_by_id(&self, id: CurrencyId) -> StoreResult<Arc<Currency>> {
        self.by_id.get(&id).map(|entry| Arc::clone(entry.value())).ok_or_else(|| {
            tracing::warn!(%id, "currency lookup missed");
            StoreError::NotFound(id.to_string())
        })
    }

    fn find_by_code(&self, code: &str) -> StoreResult<Arc<Currency>> {
        let key = code.trim().to_uppercase();
        let id = self.by_code.get(&key).map(|entry| *entry.value()).ok_or_else(|| {
            tracing::warn!(code = %key, "currency lookup missed");
            StoreError::NotFound(key.clone())
        })?;
        self.find_by_id(id)
    }

    fn insert(&self, record: CurrencyRecord) -> StoreResult<Arc<Currency>> {
        let currency = Arc::new(record.into_currency()?);
        let id = currency.id();
        let code = currency.code().to_string();

        // Claim the code first so two racing inserts cannot both succeed.
        match self.by_code.entry(code.clone()) {
            Entry::Occupied(_) => return Err(StoreError::Duplicate(code)),
            Entry::Vacant(slot) => {
                if self.by_id.contains_key(&id) {
                    return Err(StoreError::Duplicate(id.to_string()));
                }
                slot.insert(id);
            }
        }

        match self.by_id.entry(id) {
            Entry::Occupied(_) => {
                self.by_code.remove(&code);
                Err(StoreError::Duplicate(id.to_string()))
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::clone(&currency));
                tracing::debug!(%id, %code, "currency stored");
                Ok(currency)
            }
        }
    }

    fn all(&self) -> Vec<Arc<Currency>> {
        let mut currencies: Vec<_> = self.by_id.iter().map(|entry| Arc::clone(entry.value())).collect();
        currencies.sort_by_key(|currency| currency.id());
        currencies
    }
}
