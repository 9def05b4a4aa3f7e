//! # Document Assembly
//!
//! Turns what the user filled in into a finished [`Document`]: a **Quote**
//! (free-text scope of work and a flat total) or an **Invoice** (numbered,
//! itemized, with a computed grand total).
//!
//! This module is pure. It never touches storage: choosing and committing the
//! invoice number is [`crate::numbering`]'s job, and saving the client is
//! [`crate::registry`]'s. See `commands::create` for the flow that ties them together.
//!
//! ## Totals
//!
//! `line_total = quantity × unit_price` and `grand_total = Σ line_total`, both
//! exact decimals. Rounding to two places happens only when printing. A total
//! that does not fit in a `Decimal` is a validation error, caught before
//! anything is persisted.

use crate::error::{QuotelyError, Result};
use crate::model::Customer;
use crate::money::Money;
use crate::numbering::DocNumber;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

const RULE_WIDTH: usize = 64;
const DESCRIPTION_WIDTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentKind {
    Invoice,
    Quote,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Invoice => write!(f, "Invoice"),
            DocumentKind::Quote => write!(f, "Quote"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Money,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Money) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// Fails when the product does not fit in a `Decimal`.
    pub fn line_total(&self) -> Result<Money> {
        self.unit_price.checked_mul(self.quantity).ok_or_else(|| {
            QuotelyError::Validation(format!(
                "Line total is too large for \"{}\"",
                self.description
            ))
        })
    }

    fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(QuotelyError::Validation(
                "Line item description cannot be empty".into(),
            ));
        }
        if self.quantity <= Decimal::ZERO {
            return Err(QuotelyError::Validation(format!(
                "Quantity must be positive for \"{}\"",
                self.description
            )));
        }
        if self.unit_price.is_negative() {
            return Err(QuotelyError::Validation(format!(
                "Price cannot be negative for \"{}\"",
                self.description
            )));
        }
        self.line_total().map(|_| ())
    }
}

/// Parses `description|quantity|price`, e.g. `Garden clearance|2|10.00`.
impl FromStr for LineItem {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.rsplitn(3, '|').collect();
        let [price, quantity, description] = parts.as_slice() else {
            return Err(format!(
                "Invalid line item \"{}\" (expected description|quantity|price)",
                s
            ));
        };
        let quantity = Decimal::from_str(quantity.trim())
            .map_err(|_| format!("Invalid quantity: {}", quantity))?;
        let unit_price = Money::from_str(price)?;
        Ok(LineItem::new(description.trim(), quantity, unit_price))
    }
}

/// The invoice rows. Always holds at least one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LineItems(Vec<LineItem>);

impl LineItems {
    pub fn new(first: LineItem) -> Self {
        Self(vec![first])
    }

    pub fn from_vec(items: Vec<LineItem>) -> Result<Self> {
        let mut items = items.into_iter();
        let first = items.next().ok_or_else(|| {
            QuotelyError::Validation("An invoice needs at least one line item".into())
        })?;
        let mut rows = Self::new(first);
        for item in items {
            rows.add(item);
        }
        Ok(rows)
    }

    pub fn add(&mut self, item: LineItem) {
        self.0.push(item);
    }

    /// Removes a row; the last remaining row cannot be removed.
    pub fn remove(&mut self, index: usize) -> Result<LineItem> {
        if self.0.len() <= 1 {
            return Err(QuotelyError::Validation(
                "You must have at least one line item.".into(),
            ));
        }
        if index >= self.0.len() {
            return Err(QuotelyError::Validation(format!(
                "No line item at position {}",
                index + 1
            )));
        }
        Ok(self.0.remove(index))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.0.iter()
    }

    pub fn grand_total(&self) -> Result<Money> {
        self.0.iter().try_fold(Money::ZERO, |total, item| {
            total
                .checked_add(item.line_total()?)
                .ok_or_else(|| QuotelyError::Validation("Invoice total is too large".into()))
        })
    }
}

/// The type-specific half of the form.
#[derive(Debug, Clone)]
pub enum DocumentDetails {
    Quote {
        work_description: String,
        total: Money,
    },
    Invoice {
        /// `None` means "use the proposed number".
        number: Option<DocNumber>,
        items: LineItems,
    },
}

/// Everything the user submits to generate a document.
#[derive(Debug, Clone)]
pub struct DocumentRequest {
    pub client: Customer,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub details: DocumentDetails,
}

impl DocumentRequest {
    pub fn kind(&self) -> DocumentKind {
        match self.details {
            DocumentDetails::Quote { .. } => DocumentKind::Quote,
            DocumentDetails::Invoice { .. } => DocumentKind::Invoice,
        }
    }

    /// Required-field checks, run before anything is persisted.
    pub fn validate(&self) -> Result<()> {
        if self.client.name.is_empty() {
            return Err(QuotelyError::Validation("Client name is required".into()));
        }
        match &self.details {
            DocumentDetails::Quote { total, .. } => {
                if total.is_negative() {
                    return Err(QuotelyError::Validation(
                        "Quote total cannot be negative".into(),
                    ));
                }
            }
            DocumentDetails::Invoice { items, .. } => {
                for item in items.iter() {
                    item.validate()?;
                }
                items.grand_total()?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DocumentBody {
    Quote {
        work_description: String,
        total: Money,
    },
    Invoice {
        number: DocNumber,
        items: LineItems,
    },
}

/// A generated quote or invoice, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub client: Customer,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub body: DocumentBody,
}

impl Document {
    /// Assembles a validated request. Invoices must already have their number.
    pub fn assemble(request: DocumentRequest, number: Option<DocNumber>) -> Result<Self> {
        request.validate()?;
        let body = match request.details {
            DocumentDetails::Quote {
                work_description,
                total,
            } => DocumentBody::Quote {
                work_description,
                total,
            },
            DocumentDetails::Invoice {
                number: requested,
                items,
            } => {
                let number = requested.or(number).ok_or_else(|| {
                    QuotelyError::Validation("Invoice number is required".into())
                })?;
                DocumentBody::Invoice { number, items }
            }
        };
        Ok(Self {
            client: request.client,
            date: request.date,
            notes: request.notes.filter(|n| !n.trim().is_empty()),
            body,
        })
    }

    pub fn kind(&self) -> DocumentKind {
        match self.body {
            DocumentBody::Quote { .. } => DocumentKind::Quote,
            DocumentBody::Invoice { .. } => DocumentKind::Invoice,
        }
    }

    pub fn number(&self) -> Option<DocNumber> {
        match &self.body {
            DocumentBody::Invoice { number, .. } => Some(*number),
            DocumentBody::Quote { .. } => None,
        }
    }

    pub fn total(&self) -> Result<Money> {
        match &self.body {
            DocumentBody::Quote { total, .. } => Ok(*total),
            DocumentBody::Invoice { items, .. } => items.grand_total(),
        }
    }

    /// Name for the printed file, without extension.
    ///
    /// Quotes use the document date; invoices use the year they are generated in.
    pub fn suggested_filename(&self, today: NaiveDate) -> String {
        let client = filename_safe(&self.client.name);
        match &self.body {
            DocumentBody::Quote { .. } => {
                format!("Quote_{}_{}", client, self.date.format("%d-%m-%Y"))
            }
            DocumentBody::Invoice { number, .. } => {
                format!("INV-{}-{}_{}", today.year(), number, client)
            }
        }
    }

    /// Printable plain-text rendering.
    pub fn render(&self, business_name: &str, currency: &str) -> Result<String> {
        let mut out = String::new();
        let rule = "=".repeat(RULE_WIDTH);
        let thin = "-".repeat(RULE_WIDTH);

        let _ = writeln!(out, "{}", business_name);
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "{}", self.kind().to_string().to_uppercase());
        let _ = writeln!(out, "Date: {}", self.date.format("%d/%m/%Y"));
        if let Some(number) = self.number() {
            let _ = writeln!(out, "Invoice No: {}", number);
        }
        out.push('\n');

        let _ = writeln!(out, "Bill To:");
        let _ = writeln!(out, "  {}", self.client.name);
        if let Some(address) = &self.client.address {
            for line in address.lines() {
                let _ = writeln!(out, "  {}", line);
            }
        }
        if let Some(email) = &self.client.email {
            let _ = writeln!(out, "  Email: {}", email);
        }
        out.push('\n');

        match &self.body {
            DocumentBody::Quote {
                work_description,
                total,
            } => {
                let _ = writeln!(out, "Scope of Work:");
                for line in work_description.lines() {
                    let _ = writeln!(out, "  {}", line);
                }
                out.push('\n');
                let _ = writeln!(out, "{}", thin);
                let _ = writeln!(out, "Total: {}", total.display_with(currency));
            }
            DocumentBody::Invoice { number, items } => {
                let _ = writeln!(
                    out,
                    "{:<width$} {:>6} {:>11} {:>11}",
                    "Description",
                    "Qty",
                    "Price",
                    "Total",
                    width = DESCRIPTION_WIDTH
                );
                let _ = writeln!(out, "{}", thin);
                for item in items.iter() {
                    let _ = writeln!(
                        out,
                        "{:<width$} {:>6} {:>11} {:>11}",
                        truncate(&item.description, DESCRIPTION_WIDTH),
                        item.quantity.normalize(),
                        item.unit_price.display_with(currency),
                        item.line_total()?.display_with(currency),
                        width = DESCRIPTION_WIDTH
                    );
                }
                let _ = writeln!(out, "{}", thin);
                let _ = writeln!(
                    out,
                    "Total: {}",
                    items.grand_total()?.display_with(currency)
                );
                out.push('\n');
                let _ = writeln!(out, "Payment Reference: {}", number);
            }
        }

        if let Some(notes) = &self.notes {
            out.push('\n');
            let _ = writeln!(out, "Notes:");
            for line in notes.lines() {
                let _ = writeln!(out, "  {}", line);
            }
        }

        Ok(out)
    }
}

/// Every character outside `[A-Za-z0-9]` becomes `_`.
pub fn filename_safe(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
