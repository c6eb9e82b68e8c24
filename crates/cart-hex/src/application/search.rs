use cart_types::domain::product::ProductCard;

/// Show/hide filter for product cards. Has no bearing on cart state.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    /// Surrounding whitespace is dropped, so a blank search box shows every
    /// card instead of only names containing a space.
    pub fn new(term: &str) -> Self {
        Self {
            term: term.trim().to_lowercase(),
        }
    }

    /// Case-insensitive substring match on name or category.
    pub fn matches(&self, card: &ProductCard) -> bool {
        if self.term.is_empty() {
            return true;
        }
        card.name.to_lowercase().contains(&self.term)
            || card.category.to_lowercase().contains(&self.term)
    }

    /// Visibility flag per card, in order.
    pub fn visibility(&self, cards: &[ProductCard]) -> Vec<bool> {
        cards.iter().map(|c| self.matches(c)).collect()
    }

    pub fn visible<'s, 'c: 's>(
        &'s self,
        cards: &'c [ProductCard],
    ) -> impl Iterator<Item = &'c ProductCard> + 's {
        cards.iter().filter(move |c| self.matches(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_types::domain::product::seed_catalog;

    #[test]
    fn empty_term_shows_everything() {
        let cards = seed_catalog();
        assert!(SearchFilter::new("").visibility(&cards).iter().all(|v| *v));
    }

    #[test]
    fn whitespace_only_term_is_blank() {
        let cards = seed_catalog();
        assert!(SearchFilter::new("   ").visibility(&cards).iter().all(|v| *v));
        let padded: Vec<&str> = SearchFilter::new("  milk ")
            .visible(&cards)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(padded, vec!["Farm Fresh Milk"]);
    }

    #[test]
    fn visible_cards_outlive_the_filter() {
        let cards = seed_catalog();
        let first = {
            let filter = SearchFilter::new("fruit");
            let hit = filter.visible(&cards).next();
            hit
        };
        assert_eq!(first.map(|c| c.id.as_str()), Some("1"));
    }

    #[test]
    fn matches_name_or_category_ignoring_case() {
        let cards = seed_catalog();
        let by_category: Vec<&str> = SearchFilter::new("FRUIT")
            .visible(&cards)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(by_category, vec!["1", "2"]);

        let by_name = SearchFilter::new("choc");
        assert_eq!(
            by_name.visibility(&cards),
            vec![false, false, false, false, false, true]
        );
    }

    #[test]
    fn no_match_hides_all() {
        let cards = seed_catalog();
        assert_eq!(SearchFilter::new("caviar").visible(&cards).count(), 0);
    }
}
