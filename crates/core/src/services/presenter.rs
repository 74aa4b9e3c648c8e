use log::trace;

use crate::models::tab::Tab;
use crate::models::view::{DashboardView, NoDataNotice, Screen, TabContent};

/// Owns the active tab. Holds no wallet data.
///
/// Starts on `Tab::Overview`; only explicit selection changes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabbedPresenter {
    active: Tab,
}

impl TabbedPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(&self) -> Tab {
        self.active
    }

    /// Switch to `tab`. Returns `true` if the active tab changed;
    /// reselecting the current tab is a no-op.
    pub fn select(&mut self, tab: Tab) -> bool {
        if self.active == tab {
            trace!("Tab '{tab}' already active");
            return false;
        }
        trace!("Tab '{}' -> '{tab}'", self.active);
        self.active = tab;
        true
    }

    /// Pick what to show for an assembled view.
    #[must_use]
    pub fn present<'a>(&self, view: &'a DashboardView) -> Screen<'a> {
        if !view.has_portfolio_data {
            return Screen::NoPortfolioData(NoDataNotice::default());
        }
        let content = match self.active {
            Tab::Overview => TabContent::Overview(&view.overview),
            Tab::Tokens => TabContent::Tokens(&view.tokens),
            Tab::Transactions => TabContent::Transactions(&view.transactions),
            Tab::Swaps => TabContent::Swaps(&view.swaps),
        };
        Screen::Tab {
            active: self.active,
            content,
        }
    }
}
