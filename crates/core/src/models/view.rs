use serde::{Deserialize, Serialize};

use super::sign::{SignClass, Tone, TrendIcon};
use super::swap::{SwapRecord, NO_SWAP_ACTIVITY};
use super::tab::Tab;
use super::token::{Logo, TokenPresentation};
use crate::errors::CoreError;

// ── Placeholder texts ───────────────────────────────────────────────

pub const NO_TOKENS_MESSAGE: &str = "No tokens found in this wallet.";
pub const NO_TRANSACTIONS_MESSAGE: &str = "No recent transactions found.";
pub const NO_SWAPS_MESSAGE: &str = NO_SWAP_ACTIVITY;

pub const NO_PORTFOLIO_DATA_HEADLINE: &str = "No portfolio data available. This could be because:";
pub const NO_PORTFOLIO_DATA_REASONS: [&str; 3] = [
    "The wallet is new or has no transaction history",
    "There was an error retrieving the data",
    "The wallet address is incorrect",
];
pub const NO_PORTFOLIO_DATA_SUGGESTION: &str = "Please try again or check the wallet address.";

/// Notice that replaces the whole tabbed view when the snapshot is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoDataNotice {
    pub headline: String,
    pub reasons: Vec<String>,
    pub suggestion: String,
}

impl Default for NoDataNotice {
    fn default() -> Self {
        Self {
            headline: NO_PORTFOLIO_DATA_HEADLINE.to_string(),
            reasons: NO_PORTFOLIO_DATA_REASONS.iter().map(|r| r.to_string()).collect(),
            suggestion: NO_PORTFOLIO_DATA_SUGGESTION.to_string(),
        }
    }
}

/// Tab body: either rows, or the literal placeholder for an empty dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Section<T> {
    Rows(Vec<T>),
    Empty { message: String },
}

impl<T> Section<T> {
    /// Rows, or the placeholder when there are none.
    pub fn from_rows(rows: Vec<T>, empty_message: &str) -> Self {
        if rows.is_empty() {
            Section::Empty {
                message: empty_message.to_string(),
            }
        } else {
            Section::Rows(rows)
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[T] {
        match self {
            Section::Rows(rows) => rows,
            Section::Empty { .. } => &[],
        }
    }

    #[must_use]
    pub fn empty_message(&self) -> Option<&str> {
        match self {
            Section::Rows(_) => None,
            Section::Empty { message } => Some(message),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Section::Empty { .. })
    }
}

/// A displayed financial figure together with its sign styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    /// Source text as received (or as formatted, for numeric inputs)
    pub text: String,
    /// Text to show, with currency/percent decoration applied
    pub display: String,
    pub sign: SignClass,
    pub icon: TrendIcon,
    pub tone: Tone,
}

impl Figure {
    pub fn new(text: impl Into<String>, display: impl Into<String>, sign: SignClass) -> Self {
        Self {
            text: text.into(),
            display: display.into(),
            sign,
            icon: sign.icon(),
            tone: sign.tone(),
        }
    }

    /// A figure without gain/loss meaning.
    pub fn neutral(display: impl Into<String>) -> Self {
        let display = display.into();
        Self::new(display.clone(), display, SignClass::Neutral)
    }
}

// ── Overview ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewView {
    /// Short wallet label (e.g., "...x9Qz"), if the address is known
    pub wallet_label: Option<String>,
    pub total_value: Figure,
    pub token_count: Figure,
    pub overall_pnl: Figure,
    pub pnl_percentage: Figure,
    pub pnl_by_token: Vec<TokenPnlRow>,
    /// Largest holdings by USD value
    pub top_holdings: Vec<TokenRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPnlRow {
    pub token: String,
    pub pnl: Figure,
}

// ── Tokens ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokensView {
    pub section: Section<TokenRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRow {
    pub token: TokenPresentation,
    pub address: String,
    pub balance: String,
    pub price: String,
    pub value: String,
}

// ── Transactions ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsView {
    pub section: Section<TransactionRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub tx_hash: String,
    pub short_hash: String,
    pub time: String,
    pub action: String,
    pub succeeded: bool,
    pub status: String,
    /// Symbol of the first balance change; `None` when there is none
    pub symbol: Option<String>,
    pub amount: String,
    pub amount_sign: SignClass,
    pub logo: Option<Logo>,
}

// ── Swaps ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapsView {
    pub section: Section<SwapRow>,
    /// Malformed blocks dropped while parsing
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRow {
    pub swap: SwapRecord,
    pub from_logo: Logo,
    pub to_logo: Logo,
}

// ── Whole dashboard ─────────────────────────────────────────────────

/// All four tab models assembled from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// `false` when the snapshot had nothing at all to show
    pub has_portfolio_data: bool,
    pub overview: OverviewView,
    pub tokens: TokensView,
    pub transactions: TransactionsView,
    pub swaps: SwapsView,
}

impl DashboardView {
    /// Export the assembled view models as pretty JSON.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize dashboard view: {e}")))
    }
}

/// What the presenter hands to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'a> {
    NoPortfolioData(NoDataNotice),
    Tab { active: Tab, content: TabContent<'a> },
}

/// Model of the active tab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TabContent<'a> {
    Overview(&'a OverviewView),
    Tokens(&'a TokensView),
    Transactions(&'a TransactionsView),
    Swaps(&'a SwapsView),
}
