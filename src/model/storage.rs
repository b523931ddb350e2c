use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Type assertion to bytes failed, found `{found}`")]
    TypeMismatch { found: &'static str },

    #[error("Decoding failed: {0}")]
    Decoding(#[source] serde_json::Error),

    #[error("Encoding failed: {0}")]
    Encoding(#[source] serde_json::Error),
}

/// A single column value as handed over by a persistence layer.
///
/// Mirrors the handful of representations a relational driver returns, without
/// tying this crate to any particular driver.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl StorageValue {
    pub fn kind(&self) -> &'static str {
        match self {
            StorageValue::Null => "null",
            StorageValue::Bool(_) => "bool",
            StorageValue::Int(_) => "int",
            StorageValue::Float(_) => "float",
            StorageValue::Text(_) => "text",
            StorageValue::Bytes(_) => "bytes",
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            StorageValue::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl From<Vec<u8>> for StorageValue {
    fn from(bytes: Vec<u8>) -> Self {
        StorageValue::Bytes(bytes)
    }
}

impl From<&[u8]> for StorageValue {
    fn from(bytes: &[u8]) -> Self {
        StorageValue::Bytes(bytes.to_vec())
    }
}

impl From<String> for StorageValue {
    fn from(text: String) -> Self {
        StorageValue::Text(text)
    }
}

impl From<&str> for StorageValue {
    fn from(text: &str) -> Self {
        StorageValue::Text(text.to_string())
    }
}

impl From<i64> for StorageValue {
    fn from(value: i64) -> Self {
        StorageValue::Int(value)
    }
}

impl From<f64> for StorageValue {
    fn from(value: f64) -> Self {
        StorageValue::Float(value)
    }
}

impl From<bool> for StorageValue {
    fn from(value: bool) -> Self {
        StorageValue::Bool(value)
    }
}

/// Encodes a value into a single persistence column and decodes it back.
pub trait StorageCodec: Sized {
    fn to_storage_value(&self) -> Result<StorageValue, StorageError>;

    fn from_storage_value(raw: StorageValue) -> Result<Self, StorageError>;

    /// Decodes `raw` into `self`. On error `self` keeps its previous contents.
    fn scan(&mut self, raw: StorageValue) -> Result<(), StorageError> {
        *self = Self::from_storage_value(raw)?;

        Ok(())
    }
}
