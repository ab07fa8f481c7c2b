//! Collection item value object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ItemId, ValidationError};

/// A piece owned by the user.
///
/// # Invariants
///
/// - `carbon_kg` is finite and >= 0
/// - `name` and `reference_code` are non-empty
/// - immutable once created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionItem {
    id: ItemId,
    name: String,
    reference_code: String,
    carbon_kg: f64,
    image_ref: String,
    next_maintenance: NaiveDate,
    material: String,
}

impl CollectionItem {
    /// Creates a new item.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or reference code is blank
    /// - `Negative` / `InvalidFormat` if carbon is negative or not finite
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        reference_code: impl Into<String>,
        carbon_kg: f64,
        image_ref: impl Into<String>,
        next_maintenance: NaiveDate,
        material: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let reference_code = reference_code.into();

        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if reference_code.trim().is_empty() {
            return Err(ValidationError::empty_field("reference_code"));
        }
        if !carbon_kg.is_finite() {
            return Err(ValidationError::invalid_format(
                "carbon_kg",
                "must be a finite number",
            ));
        }
        if carbon_kg < 0.0 {
            return Err(ValidationError::negative("carbon_kg", carbon_kg));
        }

        Ok(Self {
            id,
            name,
            reference_code,
            carbon_kg,
            image_ref: image_ref.into(),
            next_maintenance,
            material: material.into(),
        })
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reference_code(&self) -> &str {
        &self.reference_code
    }

    /// Declared CO2-equivalent footprint in kilograms.
    pub fn carbon_kg(&self) -> f64 {
        self.carbon_kg
    }

    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn next_maintenance(&self) -> NaiveDate {
        self.next_maintenance
    }

    pub fn material(&self) -> &str {
        &self.material
    }
}
