/// One rendered line of the order summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    /// Unit price and quantity, e.g. `₹50 x 2`.
    pub line: String,
}

/// Everything the summary regions of a cart page display.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    /// Empty when the cart is empty.
    pub rows: Vec<SummaryRow>,
    /// Markup for the cart items container.
    pub markup: String,
    pub count: String,
    pub total: String,
}

impl SummaryView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The page the cart is projected onto.
///
/// Pages differ in which regions they carry: a product listing has only the
/// badge, the cart page has the badge and the summary. Rendering checks each
/// region and skips the ones the page lacks.
pub trait Page: Send {
    fn has_badge(&self) -> bool;
    fn set_badge(&mut self, text: &str);

    fn has_summary(&self) -> bool;
    fn show_summary(&mut self, summary: &SummaryView);

    /// Blocking user notification.
    fn alert(&mut self, message: &str);
    fn navigate(&mut self, location: &str);
    fn toggle_nav(&mut self);
}
