pub mod client;
pub mod types;

pub use client::{NimbleClient, NimbleClientError};
pub use types::{AddressPayload, BalanceResponse};
