use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Public asset repository used to build logo URLs for swap tokens.
pub const DEFAULT_LOGO_BASE_URL: &str =
    "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet";

/// Highest decimal precision accepted for amounts and prices.
pub const MAX_PRECISION: usize = 12;

/// Most characters kept at either end of a truncated address.
pub const MAX_ADDRESS_CHARS: usize = 64;

/// What to do with a swap block that does not have the expected shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapParsePolicy {
    /// Drop the block and count it in `ParsedSwaps::skipped`
    #[default]
    Lenient,
    /// Fail the whole parse with `CoreError::MalformedSwapBlock`
    Strict,
}

/// Presentation settings shared by every tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Prefix for currency values (e.g., "$").
    pub currency_symbol: String,

    /// Insert `,` thousands separators in currency values.
    pub group_thousands: bool,

    /// Decimals for token balances and balance deltas.
    pub amount_precision: usize,

    /// Decimals for unit prices.
    pub price_precision: usize,

    /// Characters kept at the start / end of a truncated hash or address.
    pub address_head: usize,
    pub address_tail: usize,

    /// `chrono` format string for transaction block times.
    pub timestamp_format: String,

    /// Logo URL for swap tokens is `{logo_base_url}/{symbol}/{logo_file_name}`.
    pub logo_base_url: String,
    pub logo_file_name: String,

    /// How many holdings the overview highlights.
    pub overview_top_tokens: usize,

    pub swap_parse_policy: SwapParsePolicy,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            group_thousands: false,
            amount_precision: 4,
            price_precision: 6,
            address_head: 4,
            address_tail: 4,
            timestamp_format: "%m/%d/%Y %H:%M:%S".to_string(),
            logo_base_url: DEFAULT_LOGO_BASE_URL.to_string(),
            logo_file_name: "logo.png".to_string(),
            overview_top_tokens: 3,
            swap_parse_policy: SwapParsePolicy::Lenient,
        }
    }
}

impl DisplaySettings {
    /// Parse settings from JSON. Missing keys take their defaults.
    /// The result is validated before it is returned.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.currency_symbol.is_empty() {
            return Err(CoreError::InvalidSettings(
                "currency_symbol must not be empty".into(),
            ));
        }
        if self.amount_precision > MAX_PRECISION || self.price_precision > MAX_PRECISION {
            return Err(CoreError::InvalidSettings(format!(
                "precision must be at most {MAX_PRECISION} decimals"
            )));
        }
        if self.address_head > MAX_ADDRESS_CHARS || self.address_tail > MAX_ADDRESS_CHARS {
            return Err(CoreError::InvalidSettings(format!(
                "address_head and address_tail must be at most {MAX_ADDRESS_CHARS}"
            )));
        }
        if self.address_head == 0 && self.address_tail == 0 {
            return Err(CoreError::InvalidSettings(
                "address_head and address_tail cannot both be zero".into(),
            ));
        }
        if self.timestamp_format.trim().is_empty() {
            return Err(CoreError::InvalidSettings(
                "timestamp_format must not be empty".into(),
            ));
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| item == Item::Error) {
            return Err(CoreError::InvalidSettings(format!(
                "timestamp_format '{}' is not a valid strftime pattern",
                self.timestamp_format
            )));
        }
        if !(self.logo_base_url.starts_with("https://") || self.logo_base_url.starts_with("http://")) {
            return Err(CoreError::InvalidSettings(format!(
                "logo_base_url '{}' must be an http(s) URL",
                self.logo_base_url
            )));
        }
        if self.logo_file_name.trim().is_empty() {
            return Err(CoreError::InvalidSettings(
                "logo_file_name must not be empty".into(),
            ));
        }
        Ok(())
    }
}
