//! Postal address and value transfer records, with validation and a JSON
//! column codec for storing an [`Address`] in a relational row.

#[macro_use]
extern crate log;

pub mod model;
pub mod util;

pub use model::{
    Address, StorageCodec, StorageError, StorageValue, Transaction, TransactionError,
    TransactionViolation,
};
pub use util::initialize_logger;
