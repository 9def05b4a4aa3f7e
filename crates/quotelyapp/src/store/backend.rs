use crate::error::Result;

/// Abstract interface for raw key-value storage.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// the registry and numbering modules handle the "what".
///
/// All methods take `&self`; quotely is single-threaded and backends use
/// interior mutability where they need it.
pub trait StorageBackend {
    /// Read a value. Returns `Ok(None)` when the key was never written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing whatever was stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
