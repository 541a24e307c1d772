//! Catalog filtering and single-item selection.
//!
//! Filter and selection are kept in separate containers: changing the filter
//! never closes or replaces the open item.

use super::catalog::{CatalogItem, ALL_CATEGORIES};

/// Active category of a catalog page.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FilterState {
    active_category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            active_category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl FilterState {
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    /// Replace the active category. Any string is accepted; a category no item
    /// carries simply yields an empty listing.
    ///
    pub fn set_filter(&mut self, category: &str) -> &mut Self {
        log::debug!("Filtering catalog by '{}'...", category);
        self.active_category = category.to_string();
        self
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active_category == category
    }

    /// Return the items matching the active category, in catalog order.
    ///
    pub fn filtered_items<'a>(&self, catalog: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
        if self.active_category == ALL_CATEGORIES {
            return catalog.iter().collect();
        }
        catalog
            .iter()
            .filter(|item| item.category() == self.active_category)
            .collect()
    }
}

/// Part of the overlay that received a dismissal gesture.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OverlayTarget {
    Backdrop,
    CloseButton,
    Content,
}

/// The item open in the detail overlay, if any.
///
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct SelectionState {
    selected: Option<CatalogItem>,
}

impl SelectionState {
    pub fn selected(&self) -> Option<&CatalogItem> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Open the item, replacing any prior selection. The item need not be in
    /// the current filtered listing.
    ///
    pub fn select(&mut self, item: CatalogItem) -> &mut Self {
        log::debug!("Opening '{}' (id {})...", item.title(), item.id());
        self.selected = Some(item);
        self
    }

    pub fn deselect(&mut self) -> &mut Self {
        self.selected = None;
        self
    }

    /// Route a gesture on the overlay. Gestures on the content are contained
    /// and never reach the backdrop.
    ///
    pub fn on_overlay_gesture(&mut self, target: OverlayTarget) -> &mut Self {
        match target {
            OverlayTarget::Backdrop | OverlayTarget::CloseButton => self.deselect(),
            OverlayTarget::Content => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::{journal_catalog, portfolio_catalog};

    fn ids(items: &[&CatalogItem]) -> Vec<u32> {
        items.iter().map(|item| item.id()).collect()
    }

    #[test]
    fn all_returns_full_catalog_in_order() {
        let catalog = portfolio_catalog();
        let filter = FilterState::default();
        assert_eq!(filter.active_category(), "all");
        assert_eq!(ids(&filter.filtered_items(&catalog)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn category_filter_is_stable() {
        let catalog = portfolio_catalog();
        let mut filter = FilterState::default();
        filter.set_filter("red-carpet");
        assert_eq!(ids(&filter.filtered_items(&catalog)), vec![1, 4]);
        filter.set_filter("custom");
        assert_eq!(ids(&filter.filtered_items(&catalog)), vec![3, 6]);
    }

    #[test]
    fn unknown_or_miscased_category_is_empty() {
        let catalog = portfolio_catalog();
        let mut filter = FilterState::default();
        filter.set_filter("couture");
        assert!(filter.filtered_items(&catalog).is_empty());
        filter.set_filter("Red-Carpet");
        assert!(filter.filtered_items(&catalog).is_empty());
        filter.set_filter("red");
        assert!(filter.filtered_items(&catalog).is_empty());
    }

    #[test]
    fn journal_categories_match_exactly() {
        let catalog = journal_catalog();
        let mut filter = FilterState::default();
        filter.set_filter("Case Study");
        assert_eq!(ids(&filter.filtered_items(&catalog)), vec![2]);
    }

    #[test]
    fn selecting_replaces_prior_selection() {
        let catalog = portfolio_catalog();
        let mut selection = SelectionState::default();
        selection.select(catalog[0].clone());
        selection.select(catalog[1].clone());
        assert_eq!(selection.selected().map(CatalogItem::id), Some(2));
        selection.deselect();
        assert!(selection.selected().is_none());
        assert!(!selection.is_open());
    }

    #[test]
    fn filter_change_keeps_selection() {
        let catalog = portfolio_catalog();
        let mut filter = FilterState::default();
        let mut selection = SelectionState::default();
        selection.select(catalog[0].clone());
        filter.set_filter("editorial");
        assert!(!ids(&filter.filtered_items(&catalog)).contains(&1));
        assert_eq!(selection.selected().map(CatalogItem::id), Some(1));
    }

    #[test]
    fn overlay_gestures() {
        let catalog = portfolio_catalog();
        let mut selection = SelectionState::default();
        selection.select(catalog[2].clone());

        selection.on_overlay_gesture(OverlayTarget::Content);
        assert!(selection.is_open());

        selection.on_overlay_gesture(OverlayTarget::Backdrop);
        assert!(!selection.is_open());

        selection.select(catalog[2].clone());
        selection.on_overlay_gesture(OverlayTarget::CloseButton);
        assert!(!selection.is_open());
    }
}
