use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Wallet classification categories.
///
/// Serialized with the labels used in the exported CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Funded balance on the Nimble ledger.
    #[serde(rename = "主钱包")]
    MainWallet,
    /// Registered particle, no funded balance.
    #[serde(rename = "子钱包")]
    SubWallet,
    /// Neither a balance nor a particle.
    #[serde(rename = "未注册钱包")]
    Unregistered,
}

impl Classification {
    pub const ALL: [Classification; 3] = [
        Classification::MainWallet,
        Classification::SubWallet,
        Classification::Unregistered,
    ];

    /// CSV label for this classification.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::MainWallet => "主钱包",
            Classification::SubWallet => "子钱包",
            Classification::Unregistered => "未注册钱包",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::MainWallet => "main_wallet",
            Classification::SubWallet => "sub_wallet",
            Classification::Unregistered => "unregistered",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = String;

    /// Accepts either the CSV label or the snake_case name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Classification::ALL
            .into_iter()
            .find(|c| c.label() == s || c.as_str() == s)
            .ok_or_else(|| format!("unknown wallet classification: {s}"))
    }
}

/// Classify a wallet from the outcome of its two remote checks.
///
/// Rules, in priority order:
/// - **MainWallet**: balance check positive, whatever the registration says.
/// - **SubWallet**: balance negative, particle registered.
/// - **Unregistered**: everything else.
pub fn classify_wallet(funded: bool, registered: bool) -> Classification {
    if funded {
        return Classification::MainWallet;
    }

    if registered {
        return Classification::SubWallet;
    }

    Classification::Unregistered
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
