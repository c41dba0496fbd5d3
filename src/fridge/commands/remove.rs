use crate::error::Result;
use crate::store::DataStore;

use super::helpers::require_grocery;

/// Deletes a grocery whatever its quantity. Returns the number of rows removed.
pub fn run<S: DataStore>(store: &mut S, id: i64) -> Result<usize> {
    require_grocery(store, id)?;
    store.delete_grocery(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::find;
    use crate::model::Section;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 2).unwrap()
    }

    #[test]
    fn removes_regardless_of_quantity() {
        let mut store = StoreFixture::new()
            .with_item("Peas", false)
            .with_grocery("Peas", date(), 12, Section::Freezer)
            .with_grocery("Peas", date(), 1, Section::Freezer)
            .build();

        assert_eq!(run(&mut store, 1).unwrap(), 1);
        assert_eq!(run(&mut store, 2).unwrap(), 1);
        assert!(find::grocery(&store, 1).unwrap().is_none());
        assert!(find::groceries(&store).unwrap().is_empty());
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let mut store = StoreFixture::new()
            .with_item("Peas", false)
            .with_grocery("Peas", date(), 3, Section::Freezer)
            .build();

        let err = run(&mut store, 7).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(find::groceries(&store).unwrap().len(), 1);
    }
}
