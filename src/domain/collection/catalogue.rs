//! House catalogue: the pieces every new collection starts with.

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, ItemId, ValidationError};

use super::{CollectionItem, CollectionLedger};

pub const ALMA_IMAGE: &str = "https://fr.louisvuitton.com/images/is/image/lv/1/PP_VP_L/louis-vuitton-sac-alma-bb--M27525_PM2_Front%20view.png";
pub const PILLOW_IMAGE: &str = "https://fr.louisvuitton.com/images/is/image/lv/1/PP_VP_L/louis-vuitton-doudoune-a-manches-longues-pillow--FOOW21E54900_PM2_Front%20view.png?wid=4096&hei=4096";

/// Builds the two pieces a freshly signed-in collection contains.
pub fn seed_items() -> Result<Vec<CollectionItem>, DomainError> {
    let alma = CollectionItem::new(
        ItemId::new("alma")?,
        "Alma BB",
        "M27525",
        22.4,
        ALMA_IMAGE,
        maintenance_date(2026, 10)?,
        "Cuir Épi",
    )?;
    let pillow = CollectionItem::new(
        ItemId::new("pillow")?,
        "Doudoune Pillow",
        "1AAIJD",
        18.2,
        PILLOW_IMAGE,
        maintenance_date(2026, 11)?,
        "Econyl®",
    )?;
    Ok(vec![alma, pillow])
}

/// Ledger pre-filled with [`seed_items`].
pub fn seeded_ledger() -> Result<CollectionLedger, DomainError> {
    CollectionLedger::with_items(seed_items()?)
}

fn maintenance_date(year: i32, month: u32) -> Result<NaiveDate, DomainError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        DomainError::from(ValidationError::invalid_format(
            "next_maintenance",
            format!("{}-{} is not a calendar month", year, month),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_ledger_holds_house_pieces() {
        let ledger = seeded_ledger().unwrap();
        let ids: Vec<&str> = ledger.items().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, vec!["alma", "pillow"]);
    }

    #[test]
    fn seeded_total_is_forty_point_six() {
        let ledger = seeded_ledger().unwrap();
        assert!((ledger.total_carbon_kg() - 40.6).abs() < 1e-9);
    }

    #[test]
    fn seeded_maintenance_dates() {
        let items = seed_items().unwrap();
        assert_eq!(
            items[0].next_maintenance(),
            NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
        );
        assert_eq!(
            items[1].next_maintenance(),
            NaiveDate::from_ymd_opt(2026, 11, 1).unwrap()
        );
    }
}
