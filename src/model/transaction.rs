use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::address::Address;

#[derive(Error, PartialEq, Eq, Debug, Clone, Copy)]
pub enum TransactionViolation {
    #[error("Nil id")]
    NilId,

    #[error("Invalid sender address")]
    InvalidSenderAddress,

    #[error("Invalid recipient address")]
    InvalidRecipientAddress,

    #[error("Value must be finite and greater than zero")]
    NonPositiveValue,
}

#[derive(Error, PartialEq, Debug)]
pub enum TransactionError {
    #[error("Invalid transaction: {0:?}")]
    Invalid(Vec<TransactionViolation>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub recipient_address: Address,
    pub sender_address: Address,
    pub value: f32,
}

impl Transaction {
    /// Creates a transaction with a freshly generated random id.
    pub fn new(sender_address: Address, recipient_address: Address, value: f32) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            recipient_address,
            sender_address,
            value,
        }
    }

    pub fn violations(&self) -> Vec<TransactionViolation> {
        let mut violations = Vec::new();

        if self.id.is_nil() {
            violations.push(TransactionViolation::NilId);
        }
        if !self.sender_address.is_valid() {
            violations.push(TransactionViolation::InvalidSenderAddress);
        }
        if !self.recipient_address.is_valid() {
            violations.push(TransactionViolation::InvalidRecipientAddress);
        }
        // serde narrows out-of-range amounts to infinity
        if !self.value.is_finite() || self.value <= 0.0 {
            violations.push(TransactionViolation::NonPositiveValue);
        }

        violations
    }

    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    pub fn validate(&self) -> Result<(), TransactionError> {
        let violations = self.violations();

        if violations.is_empty() {
            Ok(())
        } else {
            debug!("Transaction {} rejected: {:?}", self.id, violations);
            Err(TransactionError::Invalid(violations))
        }
    }
}
