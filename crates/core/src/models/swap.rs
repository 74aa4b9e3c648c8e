use serde::{Deserialize, Serialize};

/// Exact text the producer sends when a wallet has no swap history.
pub const NO_SWAP_ACTIVITY: &str = "No swap activity data available.";

/// One swap event extracted from a block of the swap-activity text.
///
/// All fields are carried verbatim from the protocol; amounts are not
/// reparsed into numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRecord {
    pub timestamp: String,
    pub from_symbol: String,
    pub to_symbol: String,
    pub amount_text: String,
    pub usd_equivalent_text: String,
}

/// Outcome of parsing the swap-activity text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapActivity {
    /// The input was the "no swap activity" sentinel.
    NoData,
    /// The input was block-structured text.
    Parsed(ParsedSwaps),
}

impl SwapActivity {
    /// Parsed records, in input order. Empty for the sentinel.
    #[must_use]
    pub fn records(&self) -> &[SwapRecord] {
        match self {
            SwapActivity::NoData => &[],
            SwapActivity::Parsed(parsed) => &parsed.records,
        }
    }

    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(self, SwapActivity::NoData)
    }
}

/// Records recovered from block-structured swap text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSwaps {
    pub records: Vec<SwapRecord>,
    /// Malformed blocks dropped under the lenient parse policy
    pub skipped: usize,
}
