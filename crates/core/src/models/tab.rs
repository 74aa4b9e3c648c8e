use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// The four tabs of the wallet summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Tokens,
    Transactions,
    Swaps,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Tokens, Tab::Transactions, Tab::Swaps];
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tab::Overview => write!(f, "overview"),
            Tab::Tokens => write!(f, "tokens"),
            Tab::Transactions => write!(f, "transactions"),
            Tab::Swaps => write!(f, "swaps"),
        }
    }
}

impl std::str::FromStr for Tab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" => Ok(Tab::Overview),
            "tokens" => Ok(Tab::Tokens),
            "transactions" => Ok(Tab::Transactions),
            "swaps" => Ok(Tab::Swaps),
            other => Err(CoreError::Deserialization(format!("Unknown tab '{other}'"))),
        }
    }
}
