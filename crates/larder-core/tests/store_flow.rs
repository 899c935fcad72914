//! End-to-end flow through the inventory store: add, query, update,
//! delete, export/import, and persistence across sessions.

use larder_core::{
    Category, CategoryFilter, Inventory, Item, ItemPatch, JsonFileBackend, MemoryBackend, NewItem,
    SortOption, StatusFilter, StoreEvent, ToastKind,
};
use larder_expiry::expire_date_from_offset;

fn new_item(name: &str, category: Category, days_until_expiry: i64) -> NewItem {
    NewItem {
        name: name.into(),
        category,
        quantity: 1,
        expire_date: expire_date_from_offset(days_until_expiry),
        purchase_date: None,
    }
}

#[test]
fn add_query_update_delete_flow() {
    let mut inv = Inventory::new(Box::new(MemoryBackend::new()));
    let rx = inv.subscribe();

    let milk = inv.add(new_item("Milk", Category::Food, 2));
    let soap = inv.add(new_item("Soap", Category::Household, 30));
    inv.add(new_item("Yogurt", Category::Food, -1));
    assert_eq!(inv.len(), 3);
    assert_eq!(inv.expiring_count(), 1);

    // Expiring filter sees only Milk; category filter narrows further.
    inv.set_status_filter(StatusFilter::Expiring);
    let names: Vec<String> = inv.query().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Milk"]);

    inv.set_status_filter(StatusFilter::All);
    inv.set_category_filter(CategoryFilter::Household);
    let names: Vec<String> = inv.query().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Soap"]);

    inv.set_category_filter(CategoryFilter::All);
    inv.set_sort(SortOption::ExpireDate);
    let names: Vec<String> = inv.query().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Yogurt", "Milk", "Soap"]);

    inv.update(
        milk.id,
        ItemPatch {
            quantity: Some(4),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(inv.get(milk.id).unwrap().quantity, 4);

    inv.delete(soap.id).unwrap();
    assert_eq!(inv.len(), 2);
    assert!(inv.get(soap.id).is_none());

    // Events arrived in mutation order with the expected toast payloads.
    let events: Vec<StoreEvent> = rx.try_iter().collect();
    assert_eq!(events.len(), 5);
    assert_eq!(events[0].toast().0, ToastKind::ItemAdded);
    assert_eq!(
        events[0].toast().1,
        "Milk has been added to your items."
    );
    assert_eq!(events[3].toast().0, ToastKind::ItemUpdated);
    assert_eq!(events[4].toast().1, "Soap has been deleted.");
}

#[test]
fn export_import_round_trip() {
    let mut inv = Inventory::new(Box::new(MemoryBackend::new()));
    inv.add(new_item("Milk", Category::Food, 2));
    inv.add(new_item("Soap", Category::Household, 30));

    let json = inv.export_json();
    let records: Vec<Item> = serde_json::from_str(&json).unwrap();
    assert_eq!(records.len(), 2);

    let mut other = Inventory::new(Box::new(MemoryBackend::new()));
    other.import_items(records);
    assert_eq!(other.len(), 2);
    assert_eq!(other.expiring_count(), 1);
    assert_eq!(other.export_json(), json);
}

#[test]
fn collection_survives_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("larder/items.json");

    let milk_id = {
        let mut inv = Inventory::new(Box::new(JsonFileBackend::new(&path)));
        let milk = inv.add(new_item("Milk", Category::Food, 2));
        inv.add(new_item("Soap", Category::Household, 30));
        milk.id
    };

    let inv = Inventory::new(Box::new(JsonFileBackend::new(&path)));
    assert_eq!(inv.len(), 2);
    assert_eq!(inv.get(milk_id).unwrap().name, "Milk");
    assert_eq!(inv.expiring_count(), 1);
}

#[test]
fn corrupt_store_file_falls_back_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.json");
    std::fs::write(&path, "definitely not json").unwrap();

    let mut inv = Inventory::new(Box::new(JsonFileBackend::new(&path)));
    assert!(inv.is_empty());

    // The next mutation overwrites the corrupt file with valid state.
    inv.add(new_item("Milk", Category::Food, 2));
    let reloaded = Inventory::new(Box::new(JsonFileBackend::new(&path)));
    assert_eq!(reloaded.len(), 1);
}
