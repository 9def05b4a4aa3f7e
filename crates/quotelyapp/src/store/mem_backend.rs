use super::backend::StorageBackend;
use crate::error::{QuotelyError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since quotely is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Seed a raw value, bypassing any write error simulation.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl StorageBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(QuotelyError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(QuotelyError::Store("Simulated write error".to_string()));
        }
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
