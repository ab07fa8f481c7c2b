//! Passport artifact port.
//!
//! Produces the scannable artifact (a QR-equivalent) that lets an owner
//! present a collection item's digital passport.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::collection::CollectionItem;
use crate::domain::foundation::ItemId;

/// An opaque, displayable passport token for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassportArtifact {
    /// Item the artifact was generated for.
    pub item_id: ItemId,
    /// Data encoded in the artifact.
    pub payload: String,
    /// Where the rendered artifact can be fetched.
    pub image_url: String,
}

/// Generates passport artifacts.
///
/// # Contract
///
/// Implementations must:
/// - Be deterministic for a given item
/// - Return `PassportError::Encoding` if the item cannot be encoded
#[async_trait]
pub trait PassportArtifactService: Send + Sync {
    /// Generates the artifact for `item`.
    async fn generate(&self, item: &CollectionItem) -> Result<PassportArtifact, PassportError>;
}

/// Passport generation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PassportError {
    /// Item data could not be encoded.
    #[error("encoding failed: {0}")]
    Encoding(String),

    /// Rendering service is unavailable.
    #[error("passport service unavailable: {0}")]
    Unavailable(String),
}
