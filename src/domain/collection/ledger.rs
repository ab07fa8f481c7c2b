//! Collection ledger - the authoritative ordered list of owned pieces.
//!
//! The ledger is append-only: items are never removed or mutated, so the
//! derived carbon total can only grow over the ledger's lifetime. The total
//! is recomputed on every read rather than cached.

use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode, ItemId};

use super::CollectionItem;

/// Append-only, insertion-ordered set of collection items.
///
/// # Invariants
///
/// - item ids are unique within the ledger
/// - insertion order is preserved
/// - `total_carbon_kg()` equals the sum of the items' `carbon_kg`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollectionLedger {
    items: Vec<CollectionItem>,
}

impl CollectionLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger from seed items, rejecting duplicate ids.
    pub fn with_items(items: impl IntoIterator<Item = CollectionItem>) -> Result<Self, DomainError> {
        let mut ledger = Self::new();
        for item in items {
            ledger.append(item)?;
        }
        Ok(ledger)
    }

    /// Appends an item at the end of the ledger.
    ///
    /// # Errors
    ///
    /// - `DuplicateItem` if an item with the same id is already present
    pub fn append(&mut self, item: CollectionItem) -> Result<(), DomainError> {
        if self.contains(item.id()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateItem,
                format!("Item '{}' is already in the collection", item.id()),
            ));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn items(&self) -> &[CollectionItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn get(&self, id: &ItemId) -> Option<&CollectionItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Id the next acquisition will receive.
    pub fn next_item_id(&self) -> ItemId {
        ItemId::for_acquisition(self.items.len())
    }

    /// Sum of the declared footprint of every owned item.
    pub fn total_carbon_kg(&self) -> f64 {
        self.items.iter().map(CollectionItem::carbon_kg).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(id: &str, carbon: f64) -> CollectionItem {
        CollectionItem::new(
            ItemId::new(id).unwrap(),
            "Piece",
            "REF",
            carbon,
            "",
            NaiveDate::from_ymd_opt(2028, 1, 1).unwrap(),
            "Canvas",
        )
        .unwrap()
    }

    #[test]
    fn empty_ledger_has_zero_total() {
        let ledger = CollectionLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_carbon_kg(), 0.0);
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut ledger = CollectionLedger::new();
        ledger.append(item("b", 1.0)).unwrap();
        ledger.append(item("a", 2.0)).unwrap();

        let ids: Vec<&str> = ledger.items().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn total_is_sum_of_items() {
        let ledger = CollectionLedger::with_items(vec![item("a", 22.4), item("b", 18.2)]).unwrap();
        assert!((ledger.total_carbon_kg() - 40.6).abs() < 1e-9);
    }

    #[test]
    fn append_rejects_duplicate_id() {
        let mut ledger = CollectionLedger::new();
        ledger.append(item("a", 1.0)).unwrap();

        let err = ledger.append(item("a", 5.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateItem);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total_carbon_kg(), 1.0);
    }

    #[test]
    fn next_item_id_follows_length() {
        let mut ledger = CollectionLedger::new();
        assert_eq!(ledger.next_item_id().as_str(), "new_0");
        ledger.append(item("a", 1.0)).unwrap();
        assert_eq!(ledger.next_item_id().as_str(), "new_1");
    }

    #[test]
    fn get_finds_item_by_id() {
        let ledger = CollectionLedger::with_items(vec![item("a", 1.0)]).unwrap();
        assert!(ledger.get(&ItemId::new("a").unwrap()).is_some());
        assert!(ledger.get(&ItemId::new("z").unwrap()).is_none());
    }
}
