//! Ownership form submitted to secure an acquisition.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Boutique where the piece was acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boutique {
    ChampsElysees,
    PlaceVendome,
    PrivateEStore,
}

impl Boutique {
    pub fn label(&self) -> &'static str {
        match self {
            Boutique::ChampsElysees => "Champs-Élysées",
            Boutique::PlaceVendome => "Place Vendôme",
            Boutique::PrivateEStore => "E-Store Privé",
        }
    }
}

/// Raw ownership details as entered by the user.
///
/// Every field is required; `validate` turns this into an [`OwnershipDetails`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipForm {
    pub holder_name: String,
    pub acquisition_date: Option<NaiveDate>,
    pub boutique: Option<Boutique>,
}

/// Validated ownership details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnershipDetails {
    pub holder_name: String,
    pub acquisition_date: NaiveDate,
    pub boutique: Boutique,
}

impl OwnershipForm {
    pub fn new(
        holder_name: impl Into<String>,
        acquisition_date: NaiveDate,
        boutique: Boutique,
    ) -> Self {
        Self {
            holder_name: holder_name.into(),
            acquisition_date: Some(acquisition_date),
            boutique: Some(boutique),
        }
    }

    /// Checks required fields. The holder name is trimmed.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for a blank holder name or a missing date or boutique
    pub fn validate(&self) -> Result<OwnershipDetails, ValidationError> {
        let holder_name = self.holder_name.trim();
        if holder_name.is_empty() {
            return Err(ValidationError::empty_field("holder_name"));
        }
        let acquisition_date = self
            .acquisition_date
            .ok_or_else(|| ValidationError::empty_field("acquisition_date"))?;
        let boutique = self
            .boutique
            .ok_or_else(|| ValidationError::empty_field("boutique"))?;

        Ok(OwnershipDetails {
            holder_name: holder_name.to_string(),
            acquisition_date,
            boutique,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn complete_form_validates() {
        let details = OwnershipForm::new("  Yannick V. ", date(), Boutique::PlaceVendome)
            .validate()
            .unwrap();
        assert_eq!(details.holder_name, "Yannick V.");
        assert_eq!(details.acquisition_date, date());
        assert_eq!(details.boutique, Boutique::PlaceVendome);
    }

    #[test]
    fn blank_holder_name_is_rejected() {
        let err = OwnershipForm::new("   ", date(), Boutique::ChampsElysees)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "holder_name");
    }

    #[test]
    fn missing_date_is_rejected() {
        let form = OwnershipForm {
            holder_name: "Yannick".to_string(),
            acquisition_date: None,
            boutique: Some(Boutique::PrivateEStore),
        };
        assert_eq!(form.validate().unwrap_err().field(), "acquisition_date");
    }

    #[test]
    fn missing_boutique_is_rejected() {
        let form = OwnershipForm {
            holder_name: "Yannick".to_string(),
            acquisition_date: Some(date()),
            boutique: None,
        };
        assert_eq!(form.validate().unwrap_err().field(), "boutique");
    }

    #[test]
    fn boutique_deserializes_from_snake_case() {
        let boutique: Boutique = serde_json::from_str("\"private_e_store\"").unwrap();
        assert_eq!(boutique, Boutique::PrivateEStore);
        assert_eq!(boutique.label(), "E-Store Privé");
    }
}
