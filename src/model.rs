mod address;
mod storage;
mod transaction;

pub use address::Address;
pub use storage::{StorageCodec, StorageError, StorageValue};
pub use transaction::{Transaction, TransactionError, TransactionViolation};

#[cfg(test)]
pub use address::test_address_util;
