use thiserror::Error;

/// Unified error type for the entire wallet-summary-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Missing wallet metadata is never an error; it is replaced by fallback
/// text during formatting. Only structural problems end up here.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Swap-activity protocol ──────────────────────────────────────
    #[error("Malformed swap block #{block}: {reason}")]
    MalformedSwapBlock { block: usize, reason: String },

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid display settings: {0}")]
    InvalidSettings(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
