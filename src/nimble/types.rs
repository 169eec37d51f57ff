use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Request body (both endpoints)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AddressPayload<'a> {
    pub address: &'a str,
}

// ---------------------------------------------------------------------------
// check_balance response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BalanceResponse {
    #[serde(default)]
    pub msg: Option<String>,
}

/// Substring the balance endpoint puts in `msg` when the address holds no funds.
pub const BALANCE_ERROR_MARKER: &str = "Error";

impl BalanceResponse {
    /// True when `msg` is present and carries the error marker.
    pub fn is_error(&self) -> bool {
        self.msg
            .as_deref()
            .is_some_and(|m| m.contains(BALANCE_ERROR_MARKER))
    }
}
