pub mod errors;
pub mod models;
pub mod services;

use models::{
    settings::DisplaySettings,
    snapshot::WalletSnapshot,
    swap::SwapActivity,
    tab::Tab,
    view::{DashboardView, Screen},
};
use services::{
    assembler::ViewModelAssembler, presenter::TabbedPresenter, swap_parser::SwapActivityParser,
};

use errors::CoreError;

/// Main entry point for the wallet summary core library.
///
/// Turns a `WalletSnapshot` into per-tab view models and tracks which tab
/// is active. The active tab is the only state kept between renders.
#[must_use]
pub struct WalletDashboard {
    settings: DisplaySettings,
    assembler: ViewModelAssembler,
    parser: SwapActivityParser,
    presenter: TabbedPresenter,
}

impl std::fmt::Debug for WalletDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletDashboard")
            .field("settings", &self.settings)
            .field("active_tab", &self.presenter.active())
            .finish()
    }
}

impl WalletDashboard {
    /// Dashboard with default display settings, starting on the overview tab.
    pub fn new() -> Self {
        Self::build(DisplaySettings::default())
    }

    /// Dashboard with custom settings. Settings are validated first.
    pub fn with_settings(settings: DisplaySettings) -> Result<Self, CoreError> {
        settings.validate().inspect_err(|e| log::warn!("Rejected display settings: {e}"))?;
        Ok(Self::build(settings))
    }

    #[must_use]
    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    // ── Tabs ────────────────────────────────────────────────────────

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.presenter.active()
    }

    /// Select a tab. Returns `true` if the active tab changed.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        self.presenter.select(tab)
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// Build the view models of all four tabs.
    pub fn assemble(&self, snapshot: &WalletSnapshot) -> Result<DashboardView, CoreError> {
        self.assembler.assemble(snapshot)
    }

    /// Screen for an already assembled view under the active tab.
    #[must_use]
    pub fn present<'a>(&self, view: &'a DashboardView) -> Screen<'a> {
        self.presenter.present(view)
    }

    /// Assemble a snapshot and capture the active tab in one step.
    pub fn render(&self, snapshot: &WalletSnapshot) -> Result<RenderedDashboard, CoreError> {
        let view = self.assemble(snapshot)?;
        log::debug!(
            "Rendering tab '{}' (portfolio data: {})",
            self.presenter.active(),
            view.has_portfolio_data
        );
        Ok(RenderedDashboard {
            presenter: self.presenter.clone(),
            view,
        })
    }

    /// Parse swap-activity text with the configured policy.
    pub fn parse_swaps(&self, text: &str) -> Result<SwapActivity, CoreError> {
        self.parser.parse(text)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(settings: DisplaySettings) -> Self {
        let assembler = ViewModelAssembler::new(&settings);
        let parser = SwapActivityParser::new(settings.swap_parse_policy);
        Self {
            settings,
            assembler,
            parser,
            presenter: TabbedPresenter::new(),
        }
    }
}

impl Default for WalletDashboard {
    fn default() -> Self {
        Self::new()
    }
}

/// An assembled view together with the tab that was active when it was built.
#[derive(Debug, Clone)]
pub struct RenderedDashboard {
    presenter: TabbedPresenter,
    view: DashboardView,
}

impl RenderedDashboard {
    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.presenter.active()
    }

    #[must_use]
    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    #[must_use]
    pub fn screen(&self) -> Screen<'_> {
        self.presenter.present(&self.view)
    }

    #[must_use]
    pub fn into_view(self) -> DashboardView {
        self.view
    }
}
