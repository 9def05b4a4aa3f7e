use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuotelyError, Result};
use crate::model::Customer;
use crate::registry;
use crate::store::StorageBackend;

pub fn list<B: StorageBackend>(store: &B) -> Result<CmdResult> {
    let customers = registry::list(store)?;
    let mut result = CmdResult::default();
    if customers.is_empty() {
        result.add_message(CmdMessage::info("No saved customers."));
    }
    Ok(result.with_customers(customers))
}

pub fn show<B: StorageBackend>(store: &B, name: &str) -> Result<CmdResult> {
    match registry::find(store, name)? {
        Some(customer) => Ok(CmdResult::default().with_customers(vec![customer])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!(
                "Customer not found: {}",
                name
            )));
            Ok(result)
        }
    }
}

pub fn save<B: StorageBackend>(store: &B, customer: Customer) -> Result<CmdResult> {
    if customer.name.is_empty() {
        return Err(QuotelyError::Validation("Customer name is required".into()));
    }
    let name = customer.name.clone();
    registry::upsert(store, customer.clone())?;

    let mut result = CmdResult::default().with_customers(vec![customer]);
    result.add_message(CmdMessage::success(format!("Customer saved: {}", name)));
    Ok(result)
}

/// Deleting a customer that does not exist is not an error.
pub fn delete<B: StorageBackend>(store: &B, name: &str) -> Result<CmdResult> {
    let removed = registry::remove(store, name)?;
    let mut result = CmdResult::default();
    if removed {
        result.add_message(CmdMessage::success(format!("Customer deleted: {}", name)));
    } else {
        result.add_message(CmdMessage::info(format!("No customer named {}", name)));
    }
    Ok(result)
}
