//! # Invoice Numbering
//!
//! Invoice numbers come from a single counter stored under [`INVOICE_COUNTER_KEY`].
//! A number is *proposed* by reading the counter and adding one, which never
//! writes anything. It is *committed* only when an invoice is actually generated,
//! using whatever number ended up on the invoice.
//!
//! Because the committed value is the number the user saw (and may have typed
//! over), a manual edit rebases the sequence: committing `0042` makes the next
//! proposal `0043`.
//!
//! Storage problems never stop an invoice from being produced. A missing or
//! garbled counter reads as zero, so numbering restarts at `0001`.

use crate::error::Result;
use crate::store::{StorageBackend, INVOICE_COUNTER_KEY};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Minimum display width of a document number.
pub const NUMBER_WIDTH: usize = 4;

/// A document number as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocNumber(u64);

impl DocNumber {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Clean up free-form input the way the number field does on exit:
    /// keep digit characters only. Nothing left means no number.
    pub fn from_input(input: &str) -> Option<Self> {
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return None;
        }
        // Absurdly long digit runs saturate instead of failing.
        Some(Self(digits.parse().unwrap_or(u64::MAX)))
    }
}

impl fmt::Display for DocNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = NUMBER_WIDTH)
    }
}

impl Serialize for DocNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for DocNumber {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_input(s).ok_or_else(|| format!("Invalid document number: {}", s))
    }
}

/// The stored counter, defaulting to 0 when absent or unreadable.
pub fn current<B: StorageBackend>(store: &B) -> Result<u64> {
    Ok(store
        .get(INVOICE_COUNTER_KEY)?
        .map(|raw| parse_counter(&raw))
        .unwrap_or(0))
}

/// Proposes the next invoice number. Never writes.
pub fn peek_next<B: StorageBackend>(store: &B) -> Result<DocNumber> {
    Ok(DocNumber(current(store)?).next())
}

/// Persists the number actually used on a generated invoice.
pub fn commit<B: StorageBackend>(store: &B, used: DocNumber) -> Result<()> {
    store.set(INVOICE_COUNTER_KEY, &used.value().to_string())?;
    info!(number = %used, "committed invoice number");
    Ok(())
}

/// Forgets the counter so the next proposal is `0001`.
pub fn reset<B: StorageBackend>(store: &B) -> Result<()> {
    store.remove(INVOICE_COUNTER_KEY)?;
    info!("invoice counter reset");
    Ok(())
}

/// Writes a counter value taken verbatim from a backup.
pub fn restore<B: StorageBackend>(store: &B, raw: &str) -> Result<()> {
    let raw = raw.trim();
    debug!(raw, "restoring invoice counter");
    store.set(INVOICE_COUNTER_KEY, raw)
}

/// Integer-prefix parse: leading ASCII digits after trimming, else 0.
pub fn parse_counter(raw: &str) -> u64 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
