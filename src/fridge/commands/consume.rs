use crate::error::{FridgeError, Result};
use crate::model::Grocery;
use crate::store::DataStore;

use super::helpers::{grocery_not_found, require_grocery};

pub const BELOW_ONE: &str = "quantity cannot be less than 1";

/// Takes one unit of a grocery and returns the record as stored afterwards.
///
/// The last unit cannot be consumed; the grocery has to be removed instead.
pub fn run<S: DataStore>(store: &mut S, id: i64) -> Result<Grocery> {
    let current = require_grocery(store, id)?;
    if current.quantity <= 1 {
        return Err(FridgeError::validation(BELOW_ONE));
    }

    // The update re-checks the floor, so a row changed underneath us is
    // still never taken to zero.
    if store.decrement_quantity(id)? == 0 {
        return Err(FridgeError::validation(BELOW_ONE));
    }

    super::find::grocery(store, id)?.ok_or_else(|| grocery_not_found(id))
}
