use wallet_summary_core::errors::CoreError;
use wallet_summary_core::models::settings::{
    DisplaySettings, SwapParsePolicy, DEFAULT_LOGO_BASE_URL, MAX_ADDRESS_CHARS,
};
use wallet_summary_core::models::sign::{SignClass, Tone, TrendIcon};
use wallet_summary_core::models::snapshot::{BalanceDelta, PnlEntry, TokenHolding, TransactionRecord, WalletSnapshot};
use wallet_summary_core::models::swap::{ParsedSwaps, SwapActivity, SwapRecord, NO_SWAP_ACTIVITY};
use wallet_summary_core::models::tab::Tab;
use wallet_summary_core::models::token::{Badge, Logo, BADGE_BACKGROUND};
use wallet_summary_core::models::view::{
    Figure, NoDataNotice, Section, NO_PORTFOLIO_DATA_HEADLINE, NO_SWAPS_MESSAGE, NO_TOKENS_MESSAGE,
};

// ═══════════════════════════════════════════════════════════════════
//  WalletSnapshot
// ═══════════════════════════════════════════════════════════════════

mod snapshot {
    use super::*;

    const PAYLOAD: &str = r#"{
        "walletAddress": "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU",
        "totalValueUsd": 1523.45,
        "tokenCount": 2,
        "topTokens": [
            {
                "address": "So11111111111111111111111111111111111111112",
                "symbol": "SOL",
                "name": "Wrapped SOL",
                "decimals": 9,
                "uiAmount": 10.5,
                "priceUsd": 140.0,
                "valueUsd": 1470.0,
                "logoURI": "https://example.com/sol.png"
            },
            {
                "address": "Mystery1111111111111111111111111111111111",
                "decimals": 0,
                "uiAmount": 1000.0,
                "priceUsd": 0.00345,
                "valueUsd": 3.45
            }
        ],
        "recentTransactions": [
            {
                "txHash": "abc",
                "blockTime": "2025-02-01T22:08:53+00:00",
                "mainAction": "swap",
                "status": true,
                "balanceChange": [{ "symbol": "SOL", "uiAmount": -1.5 }]
            }
        ],
        "swapActivityText": "No swap activity data available.",
        "overallPnl": "-12.34",
        "pnlPercentage": "5.20",
        "pnlByToken": [{ "tokenLabel": "SOL", "amountText": "-15.00" }]
    }"#;

    #[test]
    fn from_json_reads_camel_case_payload() {
        let snap = WalletSnapshot::from_json(PAYLOAD).unwrap();
        assert_eq!(snap.total_value_usd, 1523.45);
        assert_eq!(snap.token_count, 2);
        assert_eq!(snap.top_tokens.len(), 2);
        assert_eq!(snap.top_tokens[0].symbol.as_deref(), Some("SOL"));
        assert_eq!(
            snap.top_tokens[0].logo_uri.as_deref(),
            Some("https://example.com/sol.png")
        );
        assert_eq!(snap.overall_pnl, "-12.34");
        assert_eq!(snap.pnl_by_token, vec![PnlEntry::new("SOL", "-15.00")]);
        assert_eq!(snap.swap_activity_text, NO_SWAP_ACTIVITY);
    }

    #[test]
    fn from_json_tolerates_missing_token_metadata() {
        let snap = WalletSnapshot::from_json(PAYLOAD).unwrap();
        let mystery = &snap.top_tokens[1];
        assert!(mystery.symbol.is_none());
        assert!(mystery.name.is_none());
        assert!(mystery.logo_uri.is_none());
    }

    #[test]
    fn from_json_parses_block_time() {
        let snap = WalletSnapshot::from_json(PAYLOAD).unwrap();
        let time = snap.recent_transactions[0].block_time.unwrap();
        assert_eq!(time.to_rfc3339(), "2025-02-01T22:08:53+00:00");
    }

    #[test]
    fn from_json_accepts_logo_uri_alias() {
        let json = r#"{ "symbol": "BONK", "logoUri": "https://example.com/bonk.png" }"#;
        let holding: TokenHolding = serde_json::from_str(json).unwrap();
        assert_eq!(holding.logo_uri.as_deref(), Some("https://example.com/bonk.png"));
    }

    #[test]
    fn from_json_empty_object_is_default() {
        let snap = WalletSnapshot::from_json("{}").unwrap();
        assert_eq!(snap, WalletSnapshot::default());
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(WalletSnapshot::from_json("not json").is_err());
    }

    #[test]
    fn default_snapshot_is_empty() {
        assert!(WalletSnapshot::default().is_empty());
    }

    #[test]
    fn any_aggregate_input_makes_it_non_empty() {
        let mut snap = WalletSnapshot::default();
        snap.total_value_usd = 0.01;
        assert!(!snap.is_empty());

        let mut snap = WalletSnapshot::default();
        snap.token_count = 1;
        assert!(!snap.is_empty());

        let mut snap = WalletSnapshot::default();
        snap.top_tokens.push(TokenHolding::default());
        assert!(!snap.is_empty());

        let mut snap = WalletSnapshot::default();
        snap.recent_transactions.push(TransactionRecord::default());
        assert!(!snap.is_empty());
    }

    #[test]
    fn swap_text_and_pnl_do_not_count_as_data() {
        let snap = WalletSnapshot {
            swap_activity_text: "Swap\nTimestamp: x\nFrom: A\nTo: B\nAmount: 1\nUSD Equivalent: $1".into(),
            overall_pnl: "3.00".into(),
            ..WalletSnapshot::default()
        };
        assert!(snap.is_empty());
    }

    #[test]
    fn primary_change_is_first_delta() {
        let tx = TransactionRecord {
            balance_change: vec![
                BalanceDelta {
                    symbol: Some("SOL".into()),
                    ..BalanceDelta::default()
                },
                BalanceDelta {
                    symbol: Some("USDC".into()),
                    ..BalanceDelta::default()
                },
            ],
            ..TransactionRecord::default()
        };
        assert_eq!(tx.primary_change().unwrap().symbol.as_deref(), Some("SOL"));
    }

    #[test]
    fn primary_change_of_empty_list_is_none() {
        assert!(TransactionRecord::default().primary_change().is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  SignClass
// ═══════════════════════════════════════════════════════════════════

mod sign_class {
    use super::*;

    #[test]
    fn icons() {
        assert_eq!(SignClass::Positive.icon(), TrendIcon::ArrowUp);
        assert_eq!(SignClass::Negative.icon(), TrendIcon::ArrowDown);
        assert_eq!(SignClass::Neutral.icon(), TrendIcon::None);
    }

    #[test]
    fn tones() {
        assert_eq!(SignClass::Positive.tone(), Tone::Green);
        assert_eq!(SignClass::Negative.tone(), Tone::Red);
        assert_eq!(SignClass::Neutral.tone(), Tone::Default);
    }

    #[test]
    fn display() {
        assert_eq!(SignClass::Positive.to_string(), "positive");
        assert_eq!(SignClass::Negative.to_string(), "negative");
        assert_eq!(SignClass::Neutral.to_string(), "neutral");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Tab
// ═══════════════════════════════════════════════════════════════════

mod tab {
    use super::*;

    #[test]
    fn default_is_overview() {
        assert_eq!(Tab::default(), Tab::Overview);
    }

    #[test]
    fn all_in_display_order() {
        assert_eq!(
            Tab::ALL,
            [Tab::Overview, Tab::Tokens, Tab::Transactions, Tab::Swaps]
        );
    }

    #[test]
    fn display_and_parse_agree() {
        for tab in Tab::ALL {
            let parsed: Tab = tab.to_string().parse().unwrap();
            assert_eq!(parsed, tab);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" Swaps ".parse::<Tab>().unwrap(), Tab::Swaps);
        assert_eq!("TOKENS".parse::<Tab>().unwrap(), Tab::Tokens);
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "history".parse::<Tab>().unwrap_err();
        assert!(err.to_string().contains("Unknown tab 'history'"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Tab::Transactions).unwrap(), "\"transactions\"");
        let tab: Tab = serde_json::from_str("\"swaps\"").unwrap();
        assert_eq!(tab, Tab::Swaps);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Badge / Logo
// ═══════════════════════════════════════════════════════════════════

mod logo {
    use super::*;

    fn remote(symbol: &str) -> Logo {
        Logo::Remote {
            url: format!("https://example.com/{symbol}.png"),
            badge: Badge::for_symbol(symbol),
        }
    }

    #[test]
    fn badge_uses_first_two_characters_uppercased() {
        let badge = Badge::for_symbol("bonk");
        assert_eq!(badge.initials, "BO");
        assert_eq!(badge.background, BADGE_BACKGROUND);
    }

    #[test]
    fn badge_of_short_symbol() {
        assert_eq!(Badge::for_symbol("x").initials, "X");
        assert_eq!(Badge::for_symbol("").initials, "");
    }

    #[test]
    fn badge_counts_characters_not_bytes() {
        assert_eq!(Badge::for_symbol("éa1").initials, "ÉA");
    }

    #[test]
    fn degrade_remote_yields_badge() {
        let logo = remote("SOL").degrade();
        assert_eq!(logo, Logo::Badge(Badge::for_symbol("SOL")));
        assert!(logo.url().is_none());
    }

    #[test]
    fn degrade_badge_is_unchanged() {
        let logo = Logo::Badge(Badge::for_symbol("SOL"));
        assert_eq!(logo.clone().degrade(), logo);
    }

    #[test]
    fn degrade_only_affects_that_instance() {
        let a = remote("USDC");
        let b = remote("USDC");
        let a = a.degrade();
        assert!(a.url().is_none());
        assert_eq!(b.url(), Some("https://example.com/USDC.png"));
    }

    #[test]
    fn badge_accessor_for_both_variants() {
        assert_eq!(remote("JUP").badge().initials, "JU");
        assert_eq!(Logo::Badge(Badge::for_symbol("JUP")).badge().initials, "JU");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  DisplaySettings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = DisplaySettings::default();
        assert_eq!(s.currency_symbol, "$");
        assert!(!s.group_thousands);
        assert_eq!(s.amount_precision, 4);
        assert_eq!(s.price_precision, 6);
        assert_eq!(s.address_head, 4);
        assert_eq!(s.address_tail, 4);
        assert_eq!(s.timestamp_format, "%m/%d/%Y %H:%M:%S");
        assert_eq!(s.logo_base_url, DEFAULT_LOGO_BASE_URL);
        assert_eq!(s.logo_file_name, "logo.png");
        assert_eq!(s.overview_top_tokens, 3);
        assert_eq!(s.swap_parse_policy, SwapParsePolicy::Lenient);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn from_json_fills_missing_keys_with_defaults() {
        let s = DisplaySettings::from_json(r#"{ "currency_symbol": "€", "swap_parse_policy": "Strict" }"#)
            .unwrap();
        assert_eq!(s.currency_symbol, "€");
        assert_eq!(s.swap_parse_policy, SwapParsePolicy::Strict);
        assert_eq!(s.amount_precision, 4);
    }

    #[test]
    fn from_json_validates() {
        let err = DisplaySettings::from_json(r#"{ "amount_precision": 40 }"#).unwrap_err();
        assert!(err.to_string().contains("precision"));
    }

    #[test]
    fn rejects_empty_currency_symbol() {
        let s = DisplaySettings {
            currency_symbol: String::new(),
            ..DisplaySettings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_zero_width_address() {
        let s = DisplaySettings {
            address_head: 0,
            address_tail: 0,
            ..DisplaySettings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_oversized_address_widths() {
        let err = DisplaySettings::from_json(
            r#"{ "address_head": 18446744073709551615, "address_tail": 1 }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));

        let tail_only = DisplaySettings {
            address_head: 0,
            address_tail: usize::MAX,
            ..DisplaySettings::default()
        };
        assert!(tail_only.validate().is_err());
    }

    #[test]
    fn accepts_address_widths_at_limit() {
        let s = DisplaySettings {
            address_head: MAX_ADDRESS_CHARS,
            address_tail: MAX_ADDRESS_CHARS,
            ..DisplaySettings::default()
        };
        assert!(s.validate().is_ok());
    }

    #[test]
    fn accepts_tail_only_address() {
        let s = DisplaySettings {
            address_head: 0,
            address_tail: 6,
            ..DisplaySettings::default()
        };
        assert!(s.validate().is_ok());
    }

    #[test]
    fn rejects_bad_timestamp_format() {
        let s = DisplaySettings {
            timestamp_format: "%Y-%m-%".into(),
            ..DisplaySettings::default()
        };
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("strftime"));

        let blank = DisplaySettings {
            timestamp_format: "  ".into(),
            ..DisplaySettings::default()
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn rejects_non_http_logo_base() {
        let s = DisplaySettings {
            logo_base_url: "ftp://assets.example.com".into(),
            ..DisplaySettings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_empty_logo_file_name() {
        let s = DisplaySettings {
            logo_file_name: " ".into(),
            ..DisplaySettings::default()
        };
        assert!(s.validate().is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  View helpers
// ═══════════════════════════════════════════════════════════════════

mod view {
    use super::*;

    #[test]
    fn section_from_rows_with_rows() {
        let section = Section::from_rows(vec![1, 2], NO_TOKENS_MESSAGE);
        assert_eq!(section.rows(), &[1, 2]);
        assert!(section.empty_message().is_none());
        assert!(!section.is_empty());
    }

    #[test]
    fn section_from_no_rows_is_placeholder() {
        let section: Section<u8> = Section::from_rows(Vec::new(), NO_SWAPS_MESSAGE);
        assert!(section.rows().is_empty());
        assert_eq!(section.empty_message(), Some("No swap activity data available."));
        assert!(section.is_empty());
    }

    #[test]
    fn figure_derives_icon_and_tone_from_sign() {
        let f = Figure::new("-1", "-$1", SignClass::Negative);
        assert_eq!(f.icon, TrendIcon::ArrowDown);
        assert_eq!(f.tone, Tone::Red);
    }

    #[test]
    fn neutral_figure() {
        let f = Figure::neutral("3");
        assert_eq!(f.text, "3");
        assert_eq!(f.display, "3");
        assert_eq!(f.sign, SignClass::Neutral);
        assert_eq!(f.icon, TrendIcon::None);
    }

    #[test]
    fn no_data_notice_lists_three_reasons() {
        let notice = NoDataNotice::default();
        assert_eq!(notice.headline, NO_PORTFOLIO_DATA_HEADLINE);
        assert_eq!(notice.reasons.len(), 3);
        assert!(notice.reasons[0].contains("new"));
        assert!(notice.reasons[1].contains("error"));
        assert!(notice.reasons[2].contains("incorrect"));
        assert!(notice.suggestion.contains("try again"));
    }

    #[test]
    fn swap_activity_records() {
        assert!(SwapActivity::NoData.records().is_empty());
        assert!(SwapActivity::NoData.is_no_data());

        let record = SwapRecord {
            timestamp: "t".into(),
            from_symbol: "A".into(),
            to_symbol: "B".into(),
            amount_text: "1".into(),
            usd_equivalent_text: "$1".into(),
        };
        let parsed = SwapActivity::Parsed(ParsedSwaps {
            records: vec![record.clone()],
            skipped: 0,
        });
        assert_eq!(parsed.records(), &[record]);
        assert!(!parsed.is_no_data());
    }
}
