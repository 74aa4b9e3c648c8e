use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset};

use crate::models::settings::{DisplaySettings, MAX_PRECISION};
use crate::models::sign::SignClass;
use crate::models::view::Figure;

/// Text shown wherever a value is absent or cannot be rendered.
pub const NOT_AVAILABLE: &str = "N/A";

/// Classify a formatted financial string by its leading sign.
///
/// Total: `Negative` iff the text starts with `-`, `Positive` otherwise.
/// Sign-neutral figures (token count, total value) never go through here.
#[must_use]
pub fn classify_sign(text: &str) -> SignClass {
    if text.starts_with('-') {
        SignClass::Negative
    } else {
        SignClass::Positive
    }
}

/// Turns raw numbers and upstream strings into display text.
///
/// Never fails: absent or non-finite inputs render as `"N/A"`.
pub struct FieldFormatter {
    settings: DisplaySettings,
}

impl FieldFormatter {
    pub fn new(settings: DisplaySettings) -> Self {
        Self { settings }
    }

    // ── Numbers ─────────────────────────────────────────────────────

    /// Two-decimal currency string, e.g. `$1234.50` or `-$12.34`.
    #[must_use]
    pub fn format_currency(&self, value: f64) -> String {
        self.money(value, 2)
    }

    /// Unit price with `price_precision` decimals, e.g. `$0.000123`.
    #[must_use]
    pub fn format_price(&self, value: f64) -> String {
        self.money(value, self.settings.price_precision)
    }

    /// Fixed-decimal amount; `"N/A"` when the value is absent.
    /// Precision is capped at `MAX_PRECISION`.
    #[must_use]
    pub fn format_amount(&self, value: Option<f64>, precision: usize) -> String {
        match value {
            Some(v) if v.is_finite() => fixed(v, precision),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    /// Token balance with the configured amount precision.
    #[must_use]
    pub fn format_balance(&self, value: Option<f64>) -> String {
        self.format_amount(value, self.settings.amount_precision)
    }

    /// Two-decimal percentage, e.g. `-5.20%`.
    #[must_use]
    pub fn format_percentage(&self, value: f64) -> String {
        if !value.is_finite() {
            return NOT_AVAILABLE.to_string();
        }
        format!("{}%", fixed(value, 2))
    }

    /// Convert a raw smallest-unit amount into a UI amount.
    /// Negative decimals are treated as zero.
    #[must_use]
    pub fn ui_amount(raw: f64, decimals: i32) -> f64 {
        let decimals = decimals.max(0);
        raw / 10f64.powi(decimals)
    }

    // ── Strings ─────────────────────────────────────────────────────

    /// `abcd...wxyz`; short inputs are returned whole.
    #[must_use]
    pub fn truncate_address(&self, address: &str) -> String {
        let head = self.settings.address_head;
        let tail = self.settings.address_tail;
        let chars: Vec<char> = address.chars().collect();
        if chars.len() <= head.saturating_add(tail).saturating_add(3) {
            return address.to_string();
        }
        let start: String = chars[..head].iter().collect();
        let end: String = chars[chars.len() - tail..].iter().collect();
        format!("{start}...{end}")
    }

    /// Wallet label built from the last four characters, e.g. `...x9Qz`.
    #[must_use]
    pub fn short_address(&self, address: &str) -> String {
        let chars: Vec<char> = address.trim().chars().collect();
        if chars.len() <= 4 {
            return chars.into_iter().collect();
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("...{tail}")
    }

    #[must_use]
    pub fn format_timestamp(&self, time: Option<&DateTime<FixedOffset>>) -> String {
        let Some(time) = time else {
            return NOT_AVAILABLE.to_string();
        };
        let mut out = String::new();
        match write!(out, "{}", time.format(&self.settings.timestamp_format)) {
            Ok(()) => out,
            Err(_) => NOT_AVAILABLE.to_string(),
        }
    }

    #[must_use]
    pub fn describe_status(succeeded: bool) -> &'static str {
        if succeeded {
            "Success"
        } else {
            "Failed"
        }
    }

    // ── Figures ─────────────────────────────────────────────────────

    /// Figure for an upstream profit/loss amount such as `"-12.34"`.
    #[must_use]
    pub fn pnl_figure(&self, text: &str) -> Figure {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == NOT_AVAILABLE {
            return Figure::new(text, NOT_AVAILABLE, SignClass::Neutral);
        }
        let symbol = &self.settings.currency_symbol;
        let display = if trimmed.contains(symbol.as_str()) {
            trimmed.to_string()
        } else if let Some(rest) = trimmed.strip_prefix('-') {
            format!("-{symbol}{rest}")
        } else if let Some(rest) = trimmed.strip_prefix('+') {
            format!("+{symbol}{rest}")
        } else {
            format!("{symbol}{trimmed}")
        };
        Figure::new(text, display, classify_sign(trimmed))
    }

    /// Figure for an upstream percentage such as `"5.2"` or `"-5.2%"`.
    #[must_use]
    pub fn percentage_figure(&self, text: &str) -> Figure {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == NOT_AVAILABLE {
            return Figure::new(text, NOT_AVAILABLE, SignClass::Neutral);
        }
        let display = if trimmed.ends_with('%') {
            trimmed.to_string()
        } else {
            format!("{trimmed}%")
        };
        Figure::new(text, display, classify_sign(trimmed))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn money(&self, value: f64, precision: usize) -> String {
        if !value.is_finite() {
            return NOT_AVAILABLE.to_string();
        }
        let digits = fixed(value.abs(), precision);
        let digits = if self.settings.group_thousands {
            group_thousands(&digits)
        } else {
            digits
        };
        let sign = if value < 0.0 && !is_zero_text(&digits) { "-" } else { "" };
        format!("{sign}{}{digits}", self.settings.currency_symbol)
    }
}

impl Default for FieldFormatter {
    fn default() -> Self {
        Self::new(DisplaySettings::default())
    }
}

/// `{:.N}` without a sign on values that round to zero. `N` is capped at
/// `MAX_PRECISION`.
fn fixed(value: f64, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    let text = format!("{value:.precision$}");
    match text.strip_prefix('-') {
        Some(rest) if is_zero_text(rest) => rest.to_string(),
        _ => text,
    }
}

fn is_zero_text(digits: &str) -> bool {
    digits.chars().all(|c| matches!(c, '0' | '.' | ','))
}

/// Insert `,` every three digits of the integer part.
fn group_thousands(digits: &str) -> String {
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}
