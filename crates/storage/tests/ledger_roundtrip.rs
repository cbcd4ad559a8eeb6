//! End-to-end: mutation engine + ledger store + JSON file repository.

use anyhow::Result;
use chrono::NaiveDate;

use stockbook_core::ItemId;
use stockbook_ledger::{
    ItemCategory, ItemDraft, ItemType, LedgerStore, MutationEngine, StorageError,
    TransactionType, WithdrawalDetails,
};
use stockbook_storage::JsonFileRepository;

fn draft(name: &str, quantity: u32) -> ItemDraft {
    ItemDraft {
        name: name.to_string(),
        specifications: "imported via spreadsheet".to_string(),
        item_type: ItemType::Ersa,
        category: ItemCategory::B,
        image: String::new(),
        quantity,
        unit: "piece".to_string(),
        shelf_number: "R1-S1".to_string(),
        min_level: 1,
        max_level: 0,
        price: 3.0,
    }
}

fn details() -> WithdrawalDetails {
    WithdrawalDetails {
        receiver_name: "Receiver".to_string(),
        supervisor_name: "Supervisor".to_string(),
        location: "Workshop".to_string(),
        delivery_date: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
        signature: None,
        notes: None,
    }
}

#[test]
fn ledger_survives_a_reopen() -> Result<()> {
    stockbook_observability::init();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("ledger.json");

    {
        let mut store = LedgerStore::open(JsonFileRepository::new(&path))?;
        let mut engine = MutationEngine::new(&mut store);

        let (items, _) =
            engine.create_items_batch(vec![draft("a", 10), draft("b", 5), draft("c", 1)])?;
        assert_eq!(items[0].id, ItemId::new("MSP000001"));

        engine.withdraw(&ItemId::new("MSP000001"), 4, details())?;
    }

    // A fresh store over the same file sees the committed state.
    let store = LedgerStore::open(JsonFileRepository::new(&path))?;
    assert_eq!(store.items().len(), 3);
    assert_eq!(store.item(&ItemId::new("MSP000001")).unwrap().quantity, 6);
    assert_eq!(store.transactions().len(), 4);

    let newest = store.transactions_newest_first().next().unwrap();
    assert_eq!(newest.transaction_type, TransactionType::Out);
    assert_eq!(newest.quantity, 4);
    Ok(())
}

#[test]
fn identifiers_keep_increasing_across_reopens() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("ledger.json");

    {
        let mut store = LedgerStore::open(JsonFileRepository::new(&path))?;
        let mut engine = MutationEngine::new(&mut store);
        let (item, _) = engine.create_item(draft("first", 1))?;
        engine.delete_item(&item.id)?;
    }

    let mut store = LedgerStore::open(JsonFileRepository::new(&path))?;
    let (item, _) = MutationEngine::new(&mut store).create_item(draft("second", 1))?;

    // The deleted item's NEW_ITEM entry survives in the log, so its
    // identifier is never handed out again.
    assert_eq!(item.id, ItemId::new("MSP000002"));
    Ok(())
}

#[test]
fn a_corrupt_document_refuses_to_load() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("ledger.json");
    std::fs::write(&path, "not a ledger")?;

    match LedgerStore::open(JsonFileRepository::new(&path)) {
        Err(StorageError::Corrupt { .. }) => Ok(()),
        other => panic!("expected Corrupt, got {other:?}"),
    }
}
