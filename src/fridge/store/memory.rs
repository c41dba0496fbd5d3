use super::DataStore;
use crate::error::Result;
use crate::model::{GroceryRecord, Item, NewGrocery};
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    items: Vec<Item>,
    groceries: BTreeMap<i64, GroceryRecord>,
    last_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes an item outright. Groceries that point at it are left alone,
    /// which is how dangling references come about.
    pub fn forget_item(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.name != name);
        self.items.len() != before
    }
}

impl DataStore for InMemoryStore {
    fn get_item(&self, name: &str) -> Result<Option<Item>> {
        Ok(self.items.iter().find(|item| item.name == name).cloned())
    }

    fn list_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn insert_item(&mut self, item: &Item) -> Result<bool> {
        if self.items.iter().any(|existing| existing.name == item.name) {
            return Ok(false);
        }
        self.items.push(item.clone());
        Ok(true)
    }

    fn get_grocery(&self, id: i64) -> Result<Option<GroceryRecord>> {
        Ok(self.groceries.get(&id).cloned())
    }

    fn list_groceries(&self) -> Result<Vec<GroceryRecord>> {
        Ok(self.groceries.values().cloned().collect())
    }

    fn insert_grocery(&mut self, grocery: &NewGrocery) -> Result<i64> {
        // AUTOINCREMENT semantics: ids are never handed out twice.
        self.last_id += 1;
        let id = self.last_id;
        self.groceries.insert(
            id,
            GroceryRecord {
                id,
                item_name: grocery.item_name.clone(),
                purchase_date: grocery.purchase_date,
                quantity: grocery.quantity,
                section: grocery.section,
            },
        );
        Ok(id)
    }

    fn decrement_quantity(&mut self, id: i64) -> Result<usize> {
        match self.groceries.get_mut(&id) {
            Some(record) if record.quantity > 1 => {
                record.quantity -= 1;
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    fn delete_grocery(&mut self, id: i64) -> Result<usize> {
        Ok(usize::from(self.groceries.remove(&id).is_some()))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Section;
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_item(mut self, name: &str, can_expire: bool) -> Self {
            self.store.insert_item(&Item::new(name, can_expire)).unwrap();
            self
        }

        pub fn with_grocery(
            mut self,
            item_name: &str,
            purchase_date: NaiveDate,
            quantity: i64,
            section: Section,
        ) -> Self {
            self.store
                .insert_grocery(&NewGrocery {
                    item_name: item_name.to_string(),
                    purchase_date,
                    quantity,
                    section,
                })
                .unwrap();
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
