//! Collection module - owned pieces and their aggregate carbon footprint.

mod catalogue;
mod item;
mod ledger;

pub use catalogue::{seed_items, seeded_ledger, ALMA_IMAGE, PILLOW_IMAGE};
pub use item::CollectionItem;
pub use ledger::CollectionLedger;
