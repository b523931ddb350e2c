#![allow(dead_code)]

use transfer_records::{Address, Transaction};
use uuid::Uuid;

pub const JANE_JSON: &str =
    r#"{"name":"Jane Doe","street":"Main St","houseNumber":"12","town":"Springfield"}"#;

pub fn jane() -> Address {
    Address::new("Jane Doe", "Main St", "12", "Springfield")
}

pub fn john() -> Address {
    Address::new("John Roe", "Elm Rd", "7b", "Shelbyville")
}

pub fn transaction(id: Uuid, value: f32) -> Transaction {
    Transaction {
        id,
        recipient_address: john(),
        sender_address: jane(),
        value,
    }
}
