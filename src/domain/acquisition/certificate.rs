//! Ownership certificate issued when an acquisition is committed.
//!
//! The certificate binds the new item to its holder with a SHA-256 digest
//! over the ownership details, so a presented certificate can be checked
//! against the ledger entry and form it claims to describe.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt::Write;
use uuid::Uuid;

use crate::domain::foundation::{ItemId, Timestamp};

use super::OwnershipDetails;

/// Proof of ownership for one acquisition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnershipCertificate {
    pub transaction_id: String,
    pub ledger_hash: String,
    pub issued_at: Timestamp,
}

impl OwnershipCertificate {
    /// Issues a certificate with a random transaction suffix.
    pub fn issue(item_id: &ItemId, details: &OwnershipDetails) -> Self {
        let suffix = Uuid::new_v4().simple().to_string()[..6].to_uppercase();
        Self::issue_with_suffix(item_id, details, &suffix)
    }

    /// Issues a certificate with a caller-chosen transaction suffix.
    pub fn issue_with_suffix(item_id: &ItemId, details: &OwnershipDetails, suffix: &str) -> Self {
        let transaction_id = format!(
            "TX-LV-{}-{}",
            details.acquisition_date.format("%Y%m%d"),
            suffix
        );
        let ledger_hash = Self::digest(item_id, &transaction_id, details);
        Self {
            transaction_id,
            ledger_hash,
            issued_at: Timestamp::now(),
        }
    }

    /// Returns true if this certificate was issued for exactly these details.
    pub fn verify(&self, item_id: &ItemId, details: &OwnershipDetails) -> bool {
        self.ledger_hash == Self::digest(item_id, &self.transaction_id, details)
    }

    fn digest(item_id: &ItemId, transaction_id: &str, details: &OwnershipDetails) -> String {
        let payload = format!(
            "{}:{}:{}:{}:{}",
            item_id,
            transaction_id,
            details.holder_name,
            details.acquisition_date,
            details.boutique.label()
        );
        let hash = Sha256::digest(payload.as_bytes());

        let mut hex = String::with_capacity(2 + hash.len() * 2);
        hex.push_str("0x");
        for byte in hash.iter() {
            let _ = write!(hex, "{:02x}", byte);
        }
        hex
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::acquisition::Boutique;
    use chrono::NaiveDate;

    fn details() -> OwnershipDetails {
        OwnershipDetails {
            holder_name: "Yannick V.".to_string(),
            acquisition_date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            boutique: Boutique::ChampsElysees,
        }
    }

    #[test]
    fn transaction_id_carries_date_and_suffix() {
        let cert = OwnershipCertificate::issue_with_suffix(
            &ItemId::for_acquisition(2),
            &details(),
            "A1B2C3",
        );
        assert_eq!(cert.transaction_id, "TX-LV-20261017-A1B2C3");
    }

    #[test]
    fn random_suffix_is_six_uppercase_hex_chars() {
        let cert = OwnershipCertificate::issue(&ItemId::for_acquisition(2), &details());
        let suffix = cert.transaction_id.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 6);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn hash_is_prefixed_sha256_hex() {
        let cert = OwnershipCertificate::issue(&ItemId::for_acquisition(2), &details());
        assert!(cert.ledger_hash.starts_with("0x"));
        assert_eq!(cert.ledger_hash.len(), 66);
    }

    #[test]
    fn verify_accepts_matching_details() {
        let item_id = ItemId::for_acquisition(2);
        let cert = OwnershipCertificate::issue(&item_id, &details());
        assert!(cert.verify(&item_id, &details()));
    }

    #[test]
    fn verify_detects_tampered_holder() {
        let item_id = ItemId::for_acquisition(2);
        let cert = OwnershipCertificate::issue(&item_id, &details());

        let mut forged = details();
        forged.holder_name = "Someone Else".to_string();

        assert!(!cert.verify(&item_id, &forged));
        assert!(!cert.verify(&ItemId::for_acquisition(3), &details()));
    }
}
