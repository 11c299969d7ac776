use deskkit_core::{Contact, RecordStore, Task};
use proptest::prelude::*;

proptest! {
    #[test]
    fn toggling_twice_restores_completed(
        flags in proptest::collection::vec(any::<bool>(), 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = RecordStore::new("unused.json");
        for (i, done) in flags.iter().enumerate() {
            store.add(Task::new(format!("task {i}")).completed(*done)).unwrap();
        }
        let before = store.records().to_vec();
        let pos = pick.index(flags.len());

        store.toggle_completed(pos).unwrap();
        store.toggle_completed(pos).unwrap();

        prop_assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn search_keeps_original_order(
        names in proptest::collection::vec("[a-c]{1,4}", 0..15),
        query in "[a-c]{0,2}",
    ) {
        let mut store = RecordStore::new("unused.json");
        for (i, name) in names.iter().enumerate() {
            store.add(Contact::new(name.clone(), format!("555-{i}"))).unwrap();
        }

        let hits = store.search(&query);
        let expected: Vec<&Contact> = store
            .records()
            .iter()
            .filter(|c| c.name.contains(query.as_str()))
            .collect();
        prop_assert_eq!(hits, expected);
    }

    #[test]
    fn failed_remove_never_changes_length(len in 0usize..10, extra in 0usize..5) {
        let mut store = RecordStore::new("unused.json");
        for i in 0..len {
            store.add(Task::new(format!("t{i}"))).unwrap();
        }
        prop_assert!(store.remove(len + extra).is_err());
        prop_assert_eq!(store.len(), len);
    }
}
