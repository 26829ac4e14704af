//! Serializer for stored records (value <-> text).
//!
//! Stores hold text, so records are encoded to a JSON string before `put` and decoded
//! after `get`.

use super::store::StoreError;

/// Encodes and decodes records for a text key-value store.
pub trait Serializer<S>: Send + Sync {
    fn serialize(&self, value: &S) -> Result<String, StoreError>;
    fn deserialize(&self, text: &str) -> Result<S, StoreError>;
}

/// JSON-based serializer. Requires S: Serialize + serde::de::DeserializeOwned.
pub struct JsonSerializer;

impl<S> Serializer<S> for JsonSerializer
where
    S: serde::Serialize + serde::de::DeserializeOwned,
{
    fn serialize(&self, value: &S) -> Result<String, StoreError> {
        serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    fn deserialize(&self, text: &str) -> Result<S, StoreError> {
        serde_json::from_str(text).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}
