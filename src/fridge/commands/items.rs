use crate::error::Result;
use crate::model::Item;
use crate::store::DataStore;

pub fn find<S: DataStore>(store: &S, name: &str) -> Result<Option<Item>> {
    store.get_item(name)
}

pub fn list<S: DataStore>(store: &S) -> Result<Vec<Item>> {
    store.list_items()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_every_stored_item() {
        let store = StoreFixture::new()
            .with_item("Milk", true)
            .with_item("Rice", false)
            .build();

        for item in list(&store).unwrap() {
            let found = find(&store, &item.name).unwrap().unwrap();
            assert_eq!(found, item);
            assert_eq!(found.can_expire, item.can_expire);
        }
    }

    #[test]
    fn missing_item_is_absent_not_an_error() {
        let store = StoreFixture::new().with_item("Milk", true).build();
        assert!(find(&store, "Butter").unwrap().is_none());
    }

    #[test]
    fn lists_in_store_order() {
        let store = StoreFixture::new()
            .with_item("Yoghurt", true)
            .with_item("Apples", true)
            .build();
        let names: Vec<_> = list(&store).unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Yoghurt", "Apples"]);
    }
}
