use serde::{de::Error as _, Deserialize, Serialize};
use serde_json::{Map, Value};

use super::storage::{StorageCodec, StorageError, StorageValue};

/// A postal address.
///
/// Stored as a single JSON column:
/// `{"name":…,"street":…,"houseNumber":…,"town":…}`.
/// Keys missing from a stored object decode as empty strings.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub name: String,
    pub street: String,
    pub house_number: String,
    pub town: String,
}

impl Address {
    pub fn new(
        name: impl Into<String>,
        street: impl Into<String>,
        house_number: impl Into<String>,
        town: impl Into<String>,
    ) -> Address {
        Address {
            name: name.into(),
            street: street.into(),
            house_number: house_number.into(),
            town: town.into(),
        }
    }

    /// Every field must be non-empty. Whitespace counts as content.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && !self.street.is_empty()
            && !self.house_number.is_empty()
            && !self.town.is_empty()
    }

    // Only a JSON object (or `null`) is accepted; the derived visitor alone
    // would also take a four-element array.
    fn decode_object(bytes: &[u8]) -> Result<Option<Address>, StorageError> {
        let decode_error = |err: serde_json::Error| {
            warn!("Rejected malformed address column: {}", err);
            StorageError::Decoding(err)
        };

        let object: Option<Map<String, Value>> =
            serde_json::from_slice(bytes).map_err(decode_error)?;

        match object {
            Some(map) => serde_json::from_value(Value::Object(map))
                .map(Some)
                .map_err(decode_error),
            None => Ok(None),
        }
    }
}

impl StorageCodec for Address {
    fn to_storage_value(&self) -> Result<StorageValue, StorageError> {
        let encoded = serde_json::to_vec(self).map_err(StorageError::Encoding)?;
        debug!("Address encoded into {} bytes", encoded.len());

        Ok(StorageValue::Bytes(encoded))
    }

    fn from_storage_value(raw: StorageValue) -> Result<Self, StorageError> {
        match raw {
            StorageValue::Bytes(bytes) => Address::try_from(bytes.as_slice()),
            other => {
                warn!("Rejected address column of type {}", other.kind());
                Err(StorageError::TypeMismatch {
                    found: other.kind(),
                })
            }
        }
    }

    /// A stored JSON `null` leaves the receiver unchanged.
    fn scan(&mut self, raw: StorageValue) -> Result<(), StorageError> {
        match raw {
            StorageValue::Bytes(bytes) => {
                if let Some(address) = Address::decode_object(&bytes)? {
                    *self = address;
                }
                Ok(())
            }
            other => Address::from_storage_value(other).map(|_| ()),
        }
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = StorageError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Address::decode_object(bytes)?.ok_or_else(|| {
            warn!("Rejected null address column");
            StorageError::Decoding(serde_json::Error::custom(
                "expected an address object, found null",
            ))
        })
    }
}

impl TryFrom<Vec<u8>> for Address {
    type Error = StorageError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Address::try_from(bytes.as_slice())
    }
}

impl TryFrom<StorageValue> for Address {
    type Error = StorageError;

    fn try_from(raw: StorageValue) -> Result<Self, Self::Error> {
        Address::from_storage_value(raw)
    }
}

#[cfg(test)]
pub mod test_address_util {
    use super::Address;

    pub fn jane() -> Address {
        Address::new("Jane Doe", "Main St", "12", "Springfield")
    }

    pub fn john() -> Address {
        Address::new("John Roe", "Elm Rd", "7b", "Shelbyville")
    }

    pub fn empty() -> Address {
        Address::default()
    }
}
