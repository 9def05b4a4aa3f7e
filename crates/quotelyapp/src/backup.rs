//! # Backup and Restore
//!
//! A backup is a single JSON file bundling the customer registry, the raw
//! invoice counter and the time it was taken:
//!
//! ```json
//! {
//!   "customers": [{ "name": "Acme", "email": "ops@acme.test" }],
//!   "lastInvoiceNumber": "12",
//!   "exportDate": "2026-10-16T09:30:00.000Z"
//! }
//! ```
//!
//! Restoring is two separate steps. [`import_snapshot`] merges customers (the
//! backup wins on a name collision). [`restore_counter`] puts the counter back
//! and is only ever called when the user explicitly asks for it.
//!
//! A file that is not JSON, or whose `customers` is missing or not a list, is
//! rejected with [`QuotelyError::Format`] before anything is written.

use crate::error::{QuotelyError, Result};
use crate::model::Customer;
use crate::numbering;
use crate::registry::{self, MergeResult};
use crate::store::{StorageBackend, INVOICE_COUNTER_KEY};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupSnapshot {
    pub customers: Vec<Customer>,

    #[serde(
        rename = "lastInvoiceNumber",
        default,
        deserialize_with = "counter_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_invoice_number: Option<String>,

    /// ISO-8601 timestamp; kept as text so odd values never block a restore.
    #[serde(
        rename = "exportDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub export_date: Option<String>,
}

impl BackupSnapshot {
    pub fn exported_at(&self) -> Option<DateTime<Utc>> {
        self.export_date
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCounter {
    Text(String),
    Number(u64),
}

fn counter_value<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    let raw: Option<RawCounter> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|r| match r {
            RawCounter::Text(s) => s,
            RawCounter::Number(n) => n.to_string(),
        })
        .filter(|s| !s.trim().is_empty()))
}

/// Bundles the current registry and counter.
pub fn export_snapshot<B: StorageBackend>(store: &B, now: DateTime<Utc>) -> Result<BackupSnapshot> {
    let customers = registry::list(store)?;
    let counter = store
        .get(INVOICE_COUNTER_KEY)?
        .unwrap_or_else(|| "0".to_string());

    Ok(BackupSnapshot {
        customers,
        last_invoice_number: Some(counter),
        export_date: Some(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
    })
}

pub fn to_json(snapshot: &BackupSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).map_err(QuotelyError::Serialization)
}

/// Parses and shape-checks backup text.
pub fn parse_snapshot(text: &str) -> Result<BackupSnapshot> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| QuotelyError::Format(e.to_string()))?;

    match value.get("customers") {
        Some(Value::Array(_)) => {}
        Some(_) => {
            return Err(QuotelyError::Format(
                "\"customers\" must be a list".to_string(),
            ))
        }
        None => {
            return Err(QuotelyError::Format(
                "missing \"customers\" list".to_string(),
            ))
        }
    }

    serde_json::from_value(value).map_err(|e| QuotelyError::Format(e.to_string()))
}

/// Merges the backup's customers into the registry.
pub fn import_snapshot<B: StorageBackend>(
    store: &B,
    snapshot: &BackupSnapshot,
) -> Result<MergeResult> {
    registry::merge(store, &snapshot.customers)
}

/// Puts the backup's counter back. Returns `false` when the backup has none.
pub fn restore_counter<B: StorageBackend>(store: &B, snapshot: &BackupSnapshot) -> Result<bool> {
    match snapshot.last_invoice_number.as_deref() {
        Some(raw) => {
            numbering::restore(store, raw)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// `<prefix>_backup_<YYYY-MM-DD>.json`
pub fn backup_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}_backup_{}.json", prefix, date.format("%Y-%m-%d"))
}
