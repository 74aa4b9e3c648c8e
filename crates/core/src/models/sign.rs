use serde::{Deserialize, Serialize};

/// Sign of a formatted financial figure. Drives color and arrow choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignClass {
    Positive,
    Negative,
    /// Figures that carry no gain/loss meaning (token count, total value)
    Neutral,
}

impl SignClass {
    #[must_use]
    pub fn icon(self) -> TrendIcon {
        match self {
            SignClass::Positive => TrendIcon::ArrowUp,
            SignClass::Negative => TrendIcon::ArrowDown,
            SignClass::Neutral => TrendIcon::None,
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            SignClass::Positive => Tone::Green,
            SignClass::Negative => Tone::Red,
            SignClass::Neutral => Tone::Default,
        }
    }
}

impl std::fmt::Display for SignClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignClass::Positive => write!(f, "positive"),
            SignClass::Negative => write!(f, "negative"),
            SignClass::Neutral => write!(f, "neutral"),
        }
    }
}

/// Arrow shown next to a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendIcon {
    ArrowUp,
    ArrowDown,
    None,
}

/// Color class applied to a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Green,
    Red,
    Default,
}
