use crate::error::StorageError;
use async_trait::async_trait;

/// Raw string key-value port over an associative store.
///
/// Each call is atomic at the backend; nothing above this trait adds locking.
#[async_trait]
pub trait KvBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Returns whether a value was present.
    async fn delete(&self, key: &str) -> Result<bool, StorageError>;
    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
    /// One entry per requested key, `None` where the key is missing.
    async fn mget(&self, keys: &[String]) -> Result<Vec<Option<String>>, StorageError>;
    async fn flush(&self) -> Result<(), StorageError>;
}
