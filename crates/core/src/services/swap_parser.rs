use log::{debug, warn};

use crate::errors::CoreError;
use crate::models::settings::SwapParsePolicy;
use crate::models::swap::{ParsedSwaps, SwapActivity, SwapRecord, NO_SWAP_ACTIVITY};

/// Separator between swap blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Separator between a field label and its value.
pub const FIELD_SEPARATOR: &str = ": ";

/// Field labels of lines 1..=5, in protocol order.
pub const FIELD_LABELS: [&str; 5] = ["Timestamp", "From", "To", "Amount", "USD Equivalent"];

/// Header line plus the five fields.
pub const BLOCK_LINES: usize = 1 + FIELD_LABELS.len();

/// A block of the swap-activity text, split into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapBlock<'a> {
    /// Zero-based position among non-blank blocks
    pub index: usize,
    pub lines: Vec<&'a str>,
}

/// Parses the swap-activity text into `SwapRecord`s.
///
/// Format:
/// ```text
/// <header line>
/// Timestamp: <string>
/// From: <symbol>
/// To: <symbol>
/// Amount: <string>
/// USD Equivalent: <string>
///
/// <next block...>
/// ```
/// Fields are positional. The header is ignored and values are kept verbatim.
pub struct SwapActivityParser {
    policy: SwapParsePolicy,
}

impl SwapActivityParser {
    pub fn new(policy: SwapParsePolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> SwapParsePolicy {
        self.policy
    }

    /// Parse the whole text.
    ///
    /// The sentinel yields `SwapActivity::NoData`. Otherwise every block
    /// yields one record, in input order. Malformed blocks are skipped and
    /// counted (lenient) or abort the parse (strict).
    pub fn parse(&self, text: &str) -> Result<SwapActivity, CoreError> {
        if text == NO_SWAP_ACTIVITY {
            return Ok(SwapActivity::NoData);
        }

        let normalized = text.replace("\r\n", "\n");
        let blocks = split_blocks(&normalized);
        let mut parsed = ParsedSwaps {
            records: Vec::with_capacity(blocks.len()),
            skipped: 0,
        };

        for block in &blocks {
            match extract_record(block) {
                Ok(record) => parsed.records.push(record),
                Err(e) => match self.policy {
                    SwapParsePolicy::Strict => return Err(e),
                    SwapParsePolicy::Lenient => {
                        warn!("Skipping swap block: {e}");
                        parsed.skipped += 1;
                    }
                },
            }
        }

        debug!(
            "Parsed {} swap records from {} blocks ({} skipped)",
            parsed.records.len(),
            blocks.len(),
            parsed.skipped
        );
        Ok(SwapActivity::Parsed(parsed))
    }
}

impl Default for SwapActivityParser {
    fn default() -> Self {
        Self::new(SwapParsePolicy::default())
    }
}

/// Split normalized text into non-blank blocks.
pub fn split_blocks(text: &str) -> Vec<SwapBlock<'_>> {
    text.split(BLOCK_SEPARATOR)
        .map(|block| block.trim_matches('\n'))
        .filter(|block| !block.trim().is_empty())
        .enumerate()
        .map(|(index, block)| SwapBlock {
            index,
            lines: block.split('\n').collect(),
        })
        .collect()
}

/// Read the five positional fields of a block.
pub fn extract_record(block: &SwapBlock<'_>) -> Result<SwapRecord, CoreError> {
    if block.lines.len() < BLOCK_LINES {
        return Err(CoreError::MalformedSwapBlock {
            block: block.index,
            reason: format!(
                "expected {BLOCK_LINES} lines, found {}",
                block.lines.len()
            ),
        });
    }

    let field = |offset: usize| -> Result<String, CoreError> {
        let expected = FIELD_LABELS[offset];
        let line = block.lines[offset + 1];
        let (label, value) = line.split_once(FIELD_SEPARATOR).ok_or_else(|| {
            CoreError::MalformedSwapBlock {
                block: block.index,
                reason: format!("line {} has no '{FIELD_SEPARATOR}' separator: '{line}'", offset + 1),
            }
        })?;
        if label.trim() != expected {
            warn!(
                "Swap block #{}: expected label '{expected}' on line {}, found '{}'",
                block.index,
                offset + 1,
                label.trim()
            );
        }
        Ok(value.to_string())
    };

    Ok(SwapRecord {
        timestamp: field(0)?,
        from_symbol: field(1)?,
        to_symbol: field(2)?,
        amount_text: field(3)?,
        usd_equivalent_text: field(4)?,
    })
}
