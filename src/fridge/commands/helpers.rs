use crate::error::{FridgeError, Result};
use crate::model::{Grocery, GroceryRecord};
use crate::store::DataStore;

/// Attach the item to a grocery row. Rows whose item is gone resolve to
/// `None` and never surface as groceries.
pub fn resolve<S: DataStore>(store: &S, record: GroceryRecord) -> Result<Option<Grocery>> {
    let item = store.get_item(&record.item_name)?;
    Ok(item.map(|item| record.resolve(item)))
}

pub fn grocery_not_found(id: i64) -> FridgeError {
    FridgeError::not_found(format!("grocery id {} does not exist", id))
}

/// Fetch a grocery that the caller expects to exist.
pub fn require_grocery<S: DataStore>(store: &S, id: i64) -> Result<Grocery> {
    super::find::grocery(store, id)?.ok_or_else(|| grocery_not_found(id))
}
