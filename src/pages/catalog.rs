//! Browsing page over a fixed catalog: filter bar, item listing and the
//! detail overlay.

use crate::state::{CatalogItem, CategoryOption, FilterState, OverlayTarget, SelectionState};
use log::*;

/// Owns the catalog of one page and its independent filter and selection.
///
pub struct CatalogPage {
    catalog: Vec<CatalogItem>,
    categories: Vec<CategoryOption>,
    filter: FilterState,
    selection: SelectionState,
    cursor: usize,
}

impl CatalogPage {
    pub fn new(catalog: Vec<CatalogItem>, categories: Vec<CategoryOption>) -> Self {
        CatalogPage {
            catalog,
            categories,
            filter: FilterState::default(),
            selection: SelectionState::default(),
            cursor: 0,
        }
    }

    pub fn categories(&self) -> &[CategoryOption] {
        &self.categories
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Items matching the active category, in catalog order.
    ///
    pub fn filtered_items(&self) -> Vec<&CatalogItem> {
        self.filter.filtered_items(&self.catalog)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply a category and move the cursor back to the top of the listing.
    /// The open overlay, if any, is left as is.
    ///
    pub fn set_filter(&mut self, category: &str) -> &mut Self {
        self.filter.set_filter(category);
        self.cursor = 0;
        self
    }

    /// Advance to the next category of the filter bar, wrapping around.
    ///
    pub fn cycle_filter(&mut self) -> &mut Self {
        if self.categories.is_empty() {
            return self;
        }
        let current = self
            .categories
            .iter()
            .position(|c| self.filter.is_active(c.key));
        let next = match current {
            Some(index) => (index + 1) % self.categories.len(),
            None => 0,
        };
        let key = self.categories[next].key;
        self.set_filter(key)
    }

    pub fn next_item(&mut self) -> &mut Self {
        let len = self.filtered_items().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
        self
    }

    pub fn previous_item(&mut self) -> &mut Self {
        let len = self.filtered_items().len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
        self
    }

    /// Open the item under the cursor in the detail overlay.
    ///
    pub fn open_current(&mut self) -> &mut Self {
        let item = self.filtered_items().get(self.cursor).map(|item| (*item).clone());
        match item {
            Some(item) => {
                self.selection.select(item);
            }
            None => debug!("Nothing to open, listing is empty."),
        }
        self
    }

    pub fn select(&mut self, item: CatalogItem) -> &mut Self {
        self.selection.select(item);
        self
    }

    pub fn deselect(&mut self) -> &mut Self {
        self.selection.deselect();
        self
    }

    pub fn on_overlay_gesture(&mut self, target: OverlayTarget) -> &mut Self {
        self.selection.on_overlay_gesture(target);
        self
    }
}
