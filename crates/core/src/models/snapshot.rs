use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Everything the upstream aggregation step hands over for one render.
///
/// Field names follow the camelCase keys of the aggregation payload.
/// The snapshot is read-only: view models are rebuilt from it on every pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletSnapshot {
    /// Wallet address the snapshot was built for, if the producer sent it
    pub wallet_address: Option<String>,

    /// Total portfolio value in USD
    pub total_value_usd: f64,

    /// Number of distinct tokens held
    pub token_count: u32,

    /// Holdings, in the order the producer ranked them
    pub top_tokens: Vec<TokenHolding>,

    /// Latest transactions, most recent first
    pub recent_transactions: Vec<TransactionRecord>,

    /// Swap history in the line-oriented swap-activity text format
    pub swap_activity_text: String,

    /// Overall profit/loss, already formatted upstream (e.g. "-12.34")
    pub overall_pnl: String,

    /// Profit/loss as a percentage of current value (e.g. "5.20")
    pub pnl_percentage: String,

    /// Per-token profit/loss breakdown
    pub pnl_by_token: Vec<PnlEntry>,
}

impl WalletSnapshot {
    /// Parse a snapshot from the JSON payload produced upstream.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// `true` when none of the aggregate inputs carry anything to show.
    /// This replaces the whole tabbed view with the "no portfolio data" notice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_value_usd == 0.0
            && self.token_count == 0
            && self.top_tokens.is_empty()
            && self.recent_transactions.is_empty()
    }
}

/// A single token balance held by the wallet.
///
/// `value_usd` is expected to be `ui_amount * price_usd`; it is displayed
/// as given and never recomputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenHolding {
    pub address: String,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub decimals: u8,
    pub ui_amount: f64,
    pub price_usd: f64,
    pub value_usd: f64,
    #[serde(rename = "logoURI", alias = "logoUri")]
    pub logo_uri: Option<String>,
}

/// One transaction as summarized upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionRecord {
    pub tx_hash: String,
    pub block_time: Option<DateTime<FixedOffset>>,
    pub main_action: String,
    /// `true` if the transaction succeeded
    pub status: bool,
    /// Token balance deltas; only the first one is shown in the summary row
    pub balance_change: Vec<BalanceDelta>,
}

impl TransactionRecord {
    /// The delta surfaced in the summary row, if any.
    #[must_use]
    pub fn primary_change(&self) -> Option<&BalanceDelta> {
        self.balance_change.first()
    }
}

/// Change of a single token balance inside a transaction.
///
/// Producers normally send `ui_amount`; older payloads only carry the raw
/// smallest-unit `amount` together with `decimals`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BalanceDelta {
    pub symbol: Option<String>,
    pub ui_amount: Option<f64>,
    pub amount: Option<f64>,
    pub decimals: Option<i32>,
    #[serde(rename = "logoURI", alias = "logoUri")]
    pub logo_uri: Option<String>,
}

/// One row of the per-token profit/loss breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PnlEntry {
    pub token_label: String,
    pub amount_text: String,
}

impl PnlEntry {
    pub fn new(token_label: impl Into<String>, amount_text: impl Into<String>) -> Self {
        Self {
            token_label: token_label.into(),
            amount_text: amount_text.into(),
        }
    }
}
