use cart_types::ports::page::{Page, SummaryView};

/// Page rendered to the terminal. Alerts and navigation print as they
/// happen; regions are printed once the command is done.
pub struct TerminalPage {
    with_summary: bool,
    badge: String,
    summary: Option<SummaryView>,
    nav_open: bool,
}

impl TerminalPage {
    pub fn storefront() -> Self {
        Self {
            with_summary: false,
            badge: "0".into(),
            summary: None,
            nav_open: false,
        }
    }

    pub fn cart_page() -> Self {
        Self {
            with_summary: true,
            ..Self::storefront()
        }
    }

    pub fn print(&self) {
        println!("Cart ({})", self.badge);
        let Some(summary) = &self.summary else {
            return;
        };
        if summary.is_empty() {
            println!("  Your cart is empty.");
        }
        for row in &summary.rows {
            println!("  [{}] {:<28} {}", row.id, row.name, row.line);
        }
        println!("  Items: {}  Total: {}", summary.count, summary.total);
    }
}

impl Page for TerminalPage {
    fn has_badge(&self) -> bool {
        true
    }

    fn set_badge(&mut self, text: &str) {
        self.badge = text.to_string();
    }

    fn has_summary(&self) -> bool {
        self.with_summary
    }

    fn show_summary(&mut self, summary: &SummaryView) {
        self.summary = Some(summary.clone());
    }

    fn alert(&mut self, message: &str) {
        println!("! {message}");
    }

    fn navigate(&mut self, location: &str) {
        println!("-> {location}");
    }

    fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
        println!("menu {}", if self.nav_open { "open" } else { "closed" });
    }
}
