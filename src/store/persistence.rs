//! Sled-backed persistence for the key-value port.

use crate::error::StorageError;
use crate::store::KvBackend;
use async_trait::async_trait;
use std::path::Path;

/// Embedded sled database holding string keys and values.
pub struct SledBackend {
    db: sled::Db,
}

impl SledBackend {
    /// Open (or create) the database at `path`.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Open a throwaway database that is removed when dropped.
    #[cfg(test)]
    fn temporary() -> Result<Self, StorageError> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db })
    }

    fn decode(bytes: &[u8]) -> Result<String, StorageError> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| StorageError::Codec(format!("Value is not valid UTF-8: {}", e)))
    }
}

#[async_trait]
impl KvBackend for SledBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.db.get(key.as_bytes())? {
            Some(value) => Ok(Some(Self::decode(&value)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db.insert(key.as_bytes(), value.as_bytes())?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.db.remove(key.as_bytes())?.is_some())
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        for entry in self.db.scan_prefix(prefix.as_bytes()) {
            let (key, _) = entry?;
            keys.push(Self::decode(&key)?);
        }
        Ok(keys)
    }

    async fn mget(&self, keys: &[String]) -> Result<Vec<Option<String>>, StorageError> {
        let mut values = Vec::with_capacity(keys.len());
        for key in keys {
            let value = match self.db.get(key.as_bytes())? {
                Some(bytes) => Some(Self::decode(&bytes)?),
                None => None,
            };
            values.push(value);
        }
        Ok(values)
    }

    async fn flush(&self) -> Result<(), StorageError> {
        self.db.flush_async().await?;
        Ok(())
    }
}
