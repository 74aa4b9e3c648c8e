use log::debug;

use crate::errors::CoreError;
use crate::models::settings::DisplaySettings;
use crate::models::sign::SignClass;
use crate::models::snapshot::{BalanceDelta, TokenHolding, TransactionRecord, WalletSnapshot};
use crate::models::swap::SwapActivity;
use crate::models::view::{
    DashboardView, Figure, OverviewView, Section, SwapRow, SwapsView, TokenPnlRow, TokenRow,
    TokensView, TransactionRow, TransactionsView, NO_SWAPS_MESSAGE, NO_TOKENS_MESSAGE,
    NO_TRANSACTIONS_MESSAGE,
};

use super::formatter::{classify_sign, FieldFormatter, NOT_AVAILABLE};
use super::swap_parser::SwapActivityParser;
use super::token_resolver::TokenResolver;

/// Builds the render-ready model of every tab from one snapshot.
///
/// Pure: the same snapshot always yields the same `DashboardView`.
pub struct ViewModelAssembler {
    formatter: FieldFormatter,
    resolver: TokenResolver,
    parser: SwapActivityParser,
    top_tokens: usize,
}

impl ViewModelAssembler {
    pub fn new(settings: &DisplaySettings) -> Self {
        Self {
            formatter: FieldFormatter::new(settings.clone()),
            resolver: TokenResolver::new(settings),
            parser: SwapActivityParser::new(settings.swap_parse_policy),
            top_tokens: settings.overview_top_tokens,
        }
    }

    /// Assemble all four tabs.
    ///
    /// Only fails when the swap text is malformed under the strict policy.
    pub fn assemble(&self, snapshot: &WalletSnapshot) -> Result<DashboardView, CoreError> {
        let swap_activity = self.parser.parse(&snapshot.swap_activity_text)?;

        let view = DashboardView {
            has_portfolio_data: !snapshot.is_empty(),
            overview: self.overview(snapshot),
            tokens: self.tokens(&snapshot.top_tokens),
            transactions: self.transactions(&snapshot.recent_transactions),
            swaps: self.swaps(&swap_activity),
        };

        debug!(
            "Assembled dashboard: data={}, tokens={}, transactions={}, swaps={} ({} skipped)",
            view.has_portfolio_data,
            view.tokens.section.rows().len(),
            view.transactions.section.rows().len(),
            view.swaps.section.rows().len(),
            view.swaps.skipped
        );
        Ok(view)
    }

    // ── Overview ────────────────────────────────────────────────────

    pub fn overview(&self, snapshot: &WalletSnapshot) -> OverviewView {
        let wallet_label = snapshot
            .wallet_address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(|a| self.formatter.short_address(a));

        let pnl_by_token = snapshot
            .pnl_by_token
            .iter()
            .map(|entry| TokenPnlRow {
                token: TokenResolver::display_symbol(Some(entry.token_label.as_str())),
                pnl: self.formatter.pnl_figure(&entry.amount_text),
            })
            .collect();

        // Stable sort keeps producer order among equal values.
        let mut ranked: Vec<&TokenHolding> = snapshot.top_tokens.iter().collect();
        ranked.sort_by(|a, b| {
            b.value_usd
                .partial_cmp(&a.value_usd)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let top_holdings = ranked
            .into_iter()
            .take(self.top_tokens)
            .map(|h| self.token_row(h))
            .collect();

        OverviewView {
            wallet_label,
            total_value: Figure::neutral(self.formatter.format_currency(snapshot.total_value_usd)),
            token_count: Figure::neutral(snapshot.token_count.to_string()),
            overall_pnl: self.formatter.pnl_figure(&snapshot.overall_pnl),
            pnl_percentage: self.formatter.percentage_figure(&snapshot.pnl_percentage),
            pnl_by_token,
            top_holdings,
        }
    }

    // ── Tokens ──────────────────────────────────────────────────────

    pub fn tokens(&self, holdings: &[TokenHolding]) -> TokensView {
        let rows = holdings.iter().map(|h| self.token_row(h)).collect();
        TokensView {
            section: Section::from_rows(rows, NO_TOKENS_MESSAGE),
        }
    }

    fn token_row(&self, holding: &TokenHolding) -> TokenRow {
        TokenRow {
            token: self.resolver.resolve_holding(holding),
            address: self.formatter.truncate_address(&holding.address),
            balance: self.formatter.format_balance(Some(holding.ui_amount)),
            price: self.formatter.format_price(holding.price_usd),
            value: self.formatter.format_currency(holding.value_usd),
        }
    }

    // ── Transactions ────────────────────────────────────────────────

    pub fn transactions(&self, records: &[TransactionRecord]) -> TransactionsView {
        let rows = records.iter().map(|tx| self.transaction_row(tx)).collect();
        TransactionsView {
            section: Section::from_rows(rows, NO_TRANSACTIONS_MESSAGE),
        }
    }

    fn transaction_row(&self, tx: &TransactionRecord) -> TransactionRow {
        let change = tx.primary_change();
        let amount = self
            .formatter
            .format_balance(change.and_then(delta_ui_amount));
        // "N/A" carries no sign.
        let amount_sign = if change.is_some() && amount != NOT_AVAILABLE {
            classify_sign(&amount)
        } else {
            SignClass::Neutral
        };

        TransactionRow {
            tx_hash: tx.tx_hash.clone(),
            short_hash: self.formatter.truncate_address(&tx.tx_hash),
            time: self.formatter.format_timestamp(tx.block_time.as_ref()),
            action: if tx.main_action.trim().is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                tx.main_action.clone()
            },
            succeeded: tx.status,
            status: FieldFormatter::describe_status(tx.status).to_string(),
            symbol: change.and_then(|c| {
                c.symbol
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            }),
            amount,
            amount_sign,
            logo: change.map(|c| self.resolver.resolve_delta(c).logo),
        }
    }

    // ── Swaps ───────────────────────────────────────────────────────

    pub fn swaps(&self, activity: &SwapActivity) -> SwapsView {
        let skipped = match activity {
            SwapActivity::NoData => 0,
            SwapActivity::Parsed(parsed) => parsed.skipped,
        };
        let rows = activity
            .records()
            .iter()
            .map(|swap| SwapRow {
                from_logo: self.resolver.resolve_symbol_logo(&swap.from_symbol),
                to_logo: self.resolver.resolve_symbol_logo(&swap.to_symbol),
                swap: swap.clone(),
            })
            .collect();
        SwapsView {
            section: Section::from_rows(rows, NO_SWAPS_MESSAGE),
            skipped,
        }
    }
}

impl Default for ViewModelAssembler {
    fn default() -> Self {
        Self::new(&DisplaySettings::default())
    }
}

/// UI amount of a delta, derived from the raw amount when not provided.
fn delta_ui_amount(delta: &BalanceDelta) -> Option<f64> {
    match (delta.ui_amount, delta.amount) {
        (Some(ui), _) => Some(ui),
        (None, Some(raw)) => Some(FieldFormatter::ui_amount(raw, delta.decimals.unwrap_or(0))),
        (None, None) => None,
    }
}
