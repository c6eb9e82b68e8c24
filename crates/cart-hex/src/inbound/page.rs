use cart_types::ports::page::{Page, SummaryView};

/// Page held entirely in memory; records what the cart wrote to it.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    with_badge: bool,
    with_summary: bool,
    badge: Option<String>,
    summary: Option<SummaryView>,
    alerts: Vec<String>,
    location: Option<String>,
    nav_open: bool,
}

impl MemoryPage {
    pub fn new(with_badge: bool, with_summary: bool) -> Self {
        Self {
            with_badge,
            with_summary,
            ..Self::default()
        }
    }

    /// A product listing: badge only.
    pub fn storefront() -> Self {
        Self::new(true, false)
    }

    /// The cart page: badge and order summary.
    pub fn cart_page() -> Self {
        Self::new(true, true)
    }

    /// A page with none of the cart regions.
    pub fn bare() -> Self {
        Self::new(false, false)
    }

    pub fn badge(&self) -> Option<&str> {
        self.badge.as_deref()
    }

    pub fn summary(&self) -> Option<&SummaryView> {
        self.summary.as_ref()
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }

    /// Where the page was sent, if anywhere.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn nav_open(&self) -> bool {
        self.nav_open
    }
}

impl Page for MemoryPage {
    fn has_badge(&self) -> bool {
        self.with_badge
    }

    fn set_badge(&mut self, text: &str) {
        self.badge = Some(text.to_string());
    }

    fn has_summary(&self) -> bool {
        self.with_summary
    }

    fn show_summary(&mut self, summary: &SummaryView) {
        self.summary = Some(summary.clone());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn navigate(&mut self, location: &str) {
        self.location = Some(location.to_string());
    }

    fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }
}
