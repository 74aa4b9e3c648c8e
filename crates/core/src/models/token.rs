use serde::{Deserialize, Serialize};

/// Background used for every generated badge.
pub const BADGE_BACKGROUND: &str = "#4B5563";

/// Generated stand-in for a token logo: the first two characters of the
/// symbol on a neutral background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub initials: String,
    pub background: String,
}

impl Badge {
    pub fn for_symbol(symbol: &str) -> Self {
        let initials: String = symbol.chars().take(2).collect::<String>().to_uppercase();
        Self {
            initials,
            background: BADGE_BACKGROUND.to_string(),
        }
    }
}

/// Logo of one token occurrence in the view.
///
/// Each occurrence owns its own value, so a failed load only degrades the
/// instance it happened to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Logo {
    /// Image to load, with the badge to show if loading fails
    Remote { url: String, badge: Badge },
    /// Badge shown directly
    Badge(Badge),
}

impl Logo {
    /// Value to show after the image failed to load. No retry.
    #[must_use]
    pub fn degrade(self) -> Logo {
        match self {
            Logo::Remote { badge, .. } => Logo::Badge(badge),
            badge @ Logo::Badge(_) => badge,
        }
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Logo::Remote { url, .. } => Some(url),
            Logo::Badge(_) => None,
        }
    }

    #[must_use]
    pub fn badge(&self) -> &Badge {
        match self {
            Logo::Remote { badge, .. } | Logo::Badge(badge) => badge,
        }
    }
}

/// Display identity of a token with all absent metadata already replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPresentation {
    pub symbol: String,
    pub name: String,
    pub logo: Logo,
}
