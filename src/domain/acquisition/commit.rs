//! Two-phase acquisition commit.
//!
//! `stage` validates the ownership form and builds the candidate item
//! (Pending). The caller then waits out the ledger-write latency and hands
//! the pending acquisition to `commit`, which appends it to the ledger.
//! Staging never touches the ledger, so a failed or abandoned acquisition
//! leaves no trace.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::collection::{CollectionItem, CollectionLedger};
use crate::domain::diagnostic::{ItemTemplate, Material};
use crate::domain::foundation::{DomainError, ErrorCode, ItemId, Timestamp};

use super::{OwnershipCertificate, OwnershipDetails, OwnershipForm};

/// Maintenance date given to every newly acquired piece.
pub fn new_item_maintenance_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2028, 1, 1).unwrap_or(NaiveDate::MAX)
}

/// A validated acquisition waiting for its ledger write.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAcquisition {
    item: CollectionItem,
    details: OwnershipDetails,
    certificate: OwnershipCertificate,
    base_len: usize,
}

impl PendingAcquisition {
    pub fn item(&self) -> &CollectionItem {
        &self.item
    }

    pub fn details(&self) -> &OwnershipDetails {
        &self.details
    }

    pub fn certificate(&self) -> &OwnershipCertificate {
        &self.certificate
    }
}

/// Outcome of a committed acquisition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitReceipt {
    pub item: CollectionItem,
    pub certificate: OwnershipCertificate,
    pub total_carbon_kg: f64,
    pub ledger_len: usize,
    pub committed_at: Timestamp,
}

/// Pending → Commit protocol over a collection ledger.
pub struct AcquisitionCommitProtocol;

impl AcquisitionCommitProtocol {
    /// Phase 1: validate the form and build the candidate item.
    ///
    /// The candidate takes name, reference, carbon and image from the
    /// template and its material from the diagnostic answer.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a required form field is missing
    /// - `InvalidStateTransition` if no recommendation or material is recorded
    pub fn stage(
        ledger: &CollectionLedger,
        template: Option<&ItemTemplate>,
        material: Option<Material>,
        form: &OwnershipForm,
    ) -> Result<PendingAcquisition, DomainError> {
        let details = form.validate()?;

        let template = template.ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                "No recommendation to acquire",
            )
        })?;
        let material = material.ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Diagnostic material has not been recorded",
            )
        })?;

        let id = ledger.next_item_id();
        if ledger.contains(&id) {
            return Err(DomainError::new(
                ErrorCode::DuplicateItem,
                format!("Item '{}' is already in the collection", id),
            ));
        }

        let item = CollectionItem::new(
            id.clone(),
            template.name,
            template.reference_code,
            template.carbon_kg,
            template.image_ref,
            new_item_maintenance_date(),
            material.label(),
        )?;
        let certificate = OwnershipCertificate::issue(&id, &details);

        Ok(PendingAcquisition {
            item,
            details,
            certificate,
            base_len: ledger.len(),
        })
    }

    /// Phase 2: append the staged item.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the ledger changed since staging
    /// - `DuplicateItem` if the id is no longer free
    pub fn commit(
        ledger: &mut CollectionLedger,
        pending: PendingAcquisition,
    ) -> Result<CommitReceipt, DomainError> {
        if ledger.len() != pending.base_len {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Collection changed while the acquisition was pending",
            )
            .with_detail("item_id", pending.item.id().as_str()));
        }

        ledger.append(pending.item.clone())?;

        Ok(CommitReceipt {
            item: pending.item,
            certificate: pending.certificate,
            total_carbon_kg: ledger.total_carbon_kg(),
            ledger_len: ledger.len(),
            committed_at: Timestamp::now(),
        })
    }

    /// Checks that a receipt's certificate matches the item and details.
    pub fn verify(item_id: &ItemId, details: &OwnershipDetails, receipt: &CommitReceipt) -> bool {
        receipt.item.id() == item_id && receipt.certificate.verify(item_id, details)
    }
}
