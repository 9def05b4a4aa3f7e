//! # Customer Registry
//!
//! The registry is the whole customer list, stored as one JSON array under
//! [`CUSTOMERS_KEY`]. Every mutation reads the full list, edits it, re-sorts it
//! and writes it back in full. There are no partial patches.
//!
//! ## Invariants
//!
//! - At most one customer per case-insensitive name.
//! - The persisted list is always sorted (see [`compare_names`]).
//! - Unreadable registry data reads as an empty registry; it is never an error.

use crate::error::{QuotelyError, Result};
use crate::model::{compare_names, name_key, Customer};
use crate::store::{StorageBackend, CUSTOMERS_KEY};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Outcome of merging a backup into the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeResult {
    /// Customers carried by the backup.
    pub imported: usize,
    /// Registry size after the merge.
    pub total: usize,
}

/// All customers, sorted by name.
pub fn list<B: StorageBackend>(store: &B) -> Result<Vec<Customer>> {
    let Some(raw) = store.get(CUSTOMERS_KEY)? else {
        return Ok(Vec::new());
    };

    let parsed: Vec<Customer> = match serde_json::from_str(&raw) {
        Ok(customers) => customers,
        Err(e) => {
            warn!(error = %e, "stored customer list is unreadable, treating as empty");
            return Ok(Vec::new());
        }
    };

    let mut customers: Vec<Customer> = parsed.into_iter().map(Customer::normalized).collect();
    customers.sort_by(|a, b| compare_names(&a.name, &b.name));
    Ok(customers)
}

/// Case-insensitive exact lookup.
pub fn find<B: StorageBackend>(store: &B, name: &str) -> Result<Option<Customer>> {
    Ok(list(store)?.into_iter().find(|c| c.matches(name)))
}

/// Insert or replace by case-insensitive name. A blank name is a no-op.
pub fn upsert<B: StorageBackend>(store: &B, customer: Customer) -> Result<()> {
    if customer.name.is_empty() {
        debug!("ignoring customer with empty name");
        return Ok(());
    }

    let mut customers = list(store)?;
    match customers.iter().position(|c| c.matches(&customer.name)) {
        Some(idx) => customers[idx] = customer,
        None => customers.push(customer),
    }
    save_all(store, customers)
}

/// Remove by case-insensitive name. Returns whether a customer was removed.
///
/// The list is written back even when nothing matched, so removing twice is harmless.
pub fn remove<B: StorageBackend>(store: &B, name: &str) -> Result<bool> {
    let mut customers = list(store)?;
    let before = customers.len();
    customers.retain(|c| !c.matches(name));
    let removed = customers.len() != before;
    save_all(store, customers)?;
    Ok(removed)
}

/// Rebuild the registry from existing ∪ imported. Imported entries win on a
/// case-insensitive name collision.
pub fn merge<B: StorageBackend>(store: &B, imported: &[Customer]) -> Result<MergeResult> {
    let mut by_name: HashMap<String, Customer> = HashMap::new();

    for existing in list(store)? {
        by_name.insert(existing.key(), existing);
    }
    for incoming in imported {
        let incoming = incoming.clone().normalized();
        if incoming.name.is_empty() {
            warn!("skipping imported customer with empty name");
            continue;
        }
        by_name.insert(name_key(&incoming.name), incoming);
    }

    let merged: Vec<Customer> = by_name.into_values().collect();
    let total = merged.len();
    save_all(store, merged)?;

    info!(imported = imported.len(), total, "merged customers from backup");
    Ok(MergeResult {
        imported: imported.len(),
        total,
    })
}

fn save_all<B: StorageBackend>(store: &B, mut customers: Vec<Customer>) -> Result<()> {
    customers.sort_by(|a, b| compare_names(&a.name, &b.name));
    let json = serde_json::to_string(&customers).map_err(QuotelyError::Serialization)?;
    store.set(CUSTOMERS_KEY, &json)
}
