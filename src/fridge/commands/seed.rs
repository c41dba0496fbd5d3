use crate::error::Result;
use crate::model::Item;
use crate::store::DataStore;
use tracing::info;

/// Items a fresh fridge knows about: `(name, can_expire)`.
pub const DEFAULT_CATALOG: &[(&str, bool)] = &[
    ("Apples", true),
    ("Bacon", true),
    ("Beef Mince", true),
    ("Butter", true),
    ("Carrots", true),
    ("Cheddar", true),
    ("Chicken Breast", true),
    ("Eggs", true),
    ("Frozen Peas", false),
    ("Ice Cream", false),
    ("Lettuce", true),
    ("Milk", true),
    ("Orange Juice", true),
    ("Sausages", true),
    ("Tomatoes", true),
    ("Yoghurt", true),
];

/// Inserts the default catalogue. Existing items are kept as they are.
/// Returns how many items were new.
pub fn run<S: DataStore>(store: &mut S) -> Result<usize> {
    let mut inserted = 0;
    for (name, can_expire) in DEFAULT_CATALOG {
        if store.insert_item(&Item::new(*name, *can_expire))? {
            inserted += 1;
        }
    }
    info!(inserted, "seeded item catalogue");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::store::sqlite::SqliteStore;

    #[test]
    fn seeds_whole_catalogue_once() {
        let mut store = InMemoryStore::new();
        assert_eq!(run(&mut store).unwrap(), DEFAULT_CATALOG.len());
        assert_eq!(run(&mut store).unwrap(), 0);
        assert_eq!(store.list_items().unwrap().len(), DEFAULT_CATALOG.len());
    }

    #[test]
    fn keeps_existing_items() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.insert_item(&Item::new("Milk", false)).unwrap();
        assert_eq!(run(&mut store).unwrap(), DEFAULT_CATALOG.len() - 1);
        assert!(!store.get_item("Milk").unwrap().unwrap().can_expire);
    }
}
