use crate::models::settings::DisplaySettings;
use crate::models::snapshot::{BalanceDelta, TokenHolding};
use crate::models::token::{Badge, Logo, TokenPresentation};

use super::formatter::NOT_AVAILABLE;

/// Name shown when a token carries no name.
pub const UNKNOWN_TOKEN_NAME: &str = "Unknown Token";

/// Resolves a presentable identity (symbol, name, logo) for a token.
///
/// Holdings and balance deltas carry their own logo URI; swap records only
/// carry a symbol, so their logo URL is built from the configured asset
/// repository. The URL is constructed here but never fetched.
pub struct TokenResolver {
    logo_base_url: String,
    logo_file_name: String,
}

impl TokenResolver {
    pub fn new(settings: &DisplaySettings) -> Self {
        Self {
            logo_base_url: settings.logo_base_url.trim_end_matches('/').to_string(),
            logo_file_name: settings.logo_file_name.trim_start_matches('/').to_string(),
        }
    }

    /// Symbol to display; absent or blank becomes `"N/A"`.
    #[must_use]
    pub fn display_symbol(symbol: Option<&str>) -> String {
        non_blank(symbol).unwrap_or(NOT_AVAILABLE).to_string()
    }

    /// Name to display; absent or blank becomes `"Unknown Token"`.
    #[must_use]
    pub fn display_name(name: Option<&str>) -> String {
        non_blank(name).unwrap_or(UNKNOWN_TOKEN_NAME).to_string()
    }

    /// Logo from an explicit URI, or the badge straight away if there is none.
    #[must_use]
    pub fn resolve_logo(&self, symbol: &str, logo_uri: Option<&str>) -> Logo {
        let badge = Badge::for_symbol(symbol);
        match non_blank(logo_uri) {
            Some(url) => Logo::Remote {
                url: url.to_string(),
                badge,
            },
            None => Logo::Badge(badge),
        }
    }

    /// Logo for a symbol-only token: `{base}/{symbol}/{file}`.
    #[must_use]
    pub fn resolve_symbol_logo(&self, symbol: &str) -> Logo {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Logo::Badge(Badge::for_symbol(NOT_AVAILABLE));
        }
        Logo::Remote {
            url: self.logo_url(symbol),
            badge: Badge::for_symbol(symbol),
        }
    }

    #[must_use]
    pub fn logo_url(&self, symbol: &str) -> String {
        format!(
            "{}/{}/{}",
            self.logo_base_url,
            symbol.trim(),
            self.logo_file_name
        )
    }

    #[must_use]
    pub fn resolve_holding(&self, holding: &TokenHolding) -> TokenPresentation {
        let symbol = Self::display_symbol(holding.symbol.as_deref());
        let name = Self::display_name(holding.name.as_deref());
        let logo = self.resolve_logo(&symbol, holding.logo_uri.as_deref());
        TokenPresentation { symbol, name, logo }
    }

    /// Presentation of a balance delta. Deltas carry no name, so the symbol
    /// doubles as the name when present.
    #[must_use]
    pub fn resolve_delta(&self, delta: &BalanceDelta) -> TokenPresentation {
        let symbol = Self::display_symbol(delta.symbol.as_deref());
        let name = Self::display_name(delta.symbol.as_deref());
        let logo = self.resolve_logo(&symbol, delta.logo_uri.as_deref());
        TokenPresentation { symbol, name, logo }
    }
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new(&DisplaySettings::default())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
