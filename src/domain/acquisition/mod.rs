//! Acquisition module - ownership form, certificate, and the two-phase commit
//! that turns a confirmed recommendation into a ledger entry.

mod certificate;
mod commit;
mod form;

pub use certificate::OwnershipCertificate;
pub use commit::{
    new_item_maintenance_date, AcquisitionCommitProtocol, CommitReceipt, PendingAcquisition,
};
pub use form::{Boutique, OwnershipDetails, OwnershipForm};
