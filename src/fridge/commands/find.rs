use crate::error::Result;
use crate::model::Grocery;
use crate::store::DataStore;

use super::helpers::resolve;

pub fn grocery<S: DataStore>(store: &S, id: i64) -> Result<Option<Grocery>> {
    match store.get_grocery(id)? {
        Some(record) => resolve(store, record),
        None => Ok(None),
    }
}

/// All groceries in id order. Rows pointing at a missing item are skipped.
pub fn groceries<S: DataStore>(store: &S) -> Result<Vec<Grocery>> {
    let mut groceries = Vec::new();
    for record in store.list_groceries()? {
        if let Some(grocery) = resolve(store, record)? {
            groceries.push(grocery);
        }
    }
    Ok(groceries)
}
