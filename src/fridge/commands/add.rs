use crate::error::{FridgeError, Result};
use crate::model::{NewGrocery, Section};
use crate::store::DataStore;
use chrono::NaiveDate;

/// Stores a new grocery bought `today` and returns its id.
pub fn run<S: DataStore>(
    store: &mut S,
    name: &str,
    quantity: i64,
    section: Section,
    today: NaiveDate,
) -> Result<i64> {
    if store.get_item(name)?.is_none() {
        return Err(FridgeError::not_found(format!(
            "item `{}` does not exist",
            name
        )));
    }
    if quantity < 1 {
        return Err(FridgeError::validation("quantity must be at least 1"));
    }

    store.insert_grocery(&NewGrocery {
        item_name: name.to_string(),
        purchase_date: today,
        quantity,
        section,
    })
}
