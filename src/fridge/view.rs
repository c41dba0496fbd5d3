//! Filtering and sorting over a fetched snapshot of groceries.
//!
//! Everything here is pure: it works on the list the presentation layer last
//! fetched and never goes back to the store.

use crate::model::Grocery;
use chrono::NaiveDate;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterColumn {
    #[default]
    Item,
    Section,
    Bought,
}

#[derive(Debug, Clone, Default)]
pub struct GroceryFilter {
    pub column: FilterColumn,
    pub text: String,
    /// Only groceries whose item can expire.
    pub expiring_only: bool,
}

impl GroceryFilter {
    pub fn new(column: FilterColumn, text: impl Into<String>) -> Self {
        Self {
            column,
            text: text.into(),
            expiring_only: false,
        }
    }

    pub fn expiring_only(mut self, expiring_only: bool) -> Self {
        self.expiring_only = expiring_only;
        self
    }

    pub fn matches(&self, grocery: &Grocery, today: NaiveDate) -> bool {
        if self.expiring_only && !grocery.item.can_expire {
            return false;
        }
        if self.text.is_empty() {
            return true;
        }

        let needle = self.text.to_uppercase();
        match self.column {
            FilterColumn::Item => grocery.item_name().to_uppercase().contains(&needle),
            FilterColumn::Section => grocery.section.as_str().contains(&needle),
            // Only digits make sense against "3 days ago"; anything else filters out everything.
            FilterColumn::Bought => {
                needle.chars().all(|c| c.is_ascii_digit())
                    && grocery.days_ago_label(today).contains(&needle)
            }
        }
    }
}

pub fn apply(snapshot: &[Grocery], filter: &GroceryFilter, today: NaiveDate) -> Vec<Grocery> {
    snapshot
        .iter()
        .filter(|grocery| filter.matches(grocery, today))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Id,
    Item,
    Quantity,
    Section,
    Bought,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort {
    pub key: SortKey,
    pub descending: bool,
}

impl Sort {
    pub fn by(key: SortKey) -> Self {
        Self {
            key,
            descending: false,
        }
    }

    pub fn descending(mut self) -> Self {
        self.descending = true;
        self
    }
}

/// Stable sort; ties fall back to id so output is deterministic.
pub fn sort(groceries: &mut [Grocery], sort: Sort, today: NaiveDate) {
    groceries.sort_by(|a, b| {
        let ord = match sort.key {
            SortKey::Id => Ordering::Equal,
            SortKey::Item => a.item_name().to_lowercase().cmp(&b.item_name().to_lowercase()),
            SortKey::Quantity => a.quantity.cmp(&b.quantity),
            SortKey::Section => a.section.cmp(&b.section),
            SortKey::Bought => a.days_ago(today).cmp(&b.days_ago(today)),
        }
        .then(a.id.cmp(&b.id));

        if sort.descending {
            ord.reverse()
        } else {
            ord
        }
    });
}
