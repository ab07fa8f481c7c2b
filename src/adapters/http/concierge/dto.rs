//! HTTP DTOs for concierge endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::AssistantReply;
use crate::domain::acquisition::CommitReceipt;
use crate::domain::collection::CollectionItem;
use crate::domain::conversation::Message;
use crate::domain::diagnostic::{DiagnosticAnswers, ItemTemplate, QuestionView};
use crate::domain::session::{PageState, SessionSnapshot, Trigger, WorkflowError};
use crate::ports::PassportArtifact;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to sign in.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub identity: String,
    pub secret: String,
}

/// Request to ask the assistant.
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub prompt: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Carbon totals are displayed to one decimal.
fn round_carbon(kg: f64) -> f64 {
    (kg * 10.0).round() / 10.0
}

/// One collection item.
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
    pub reference_code: String,
    pub carbon_kg: f64,
    pub image_ref: String,
    pub next_maintenance: String,
    pub material: String,
}

impl From<&CollectionItem> for ItemResponse {
    fn from(item: &CollectionItem) -> Self {
        Self {
            id: item.id().to_string(),
            name: item.name().to_string(),
            reference_code: item.reference_code().to_string(),
            carbon_kg: item.carbon_kg(),
            image_ref: item.image_ref().to_string(),
            next_maintenance: item.next_maintenance().format("%Y-%m-%d").to_string(),
            material: item.material().to_string(),
        }
    }
}

/// Observable session state.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub page: PageState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub step: u8,
    pub answers: DiagnosticAnswers,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<ItemTemplate>,
    pub collection: Vec<ItemResponse>,
    pub total_carbon_kg: f64,
    pub conversation: Vec<Message>,
    pub available_actions: Vec<Trigger>,
}

impl From<SessionSnapshot> for SessionResponse {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            session_id: snapshot.session_id.to_string(),
            page: snapshot.page,
            user_name: snapshot
                .identity
                .as_ref()
                .map(|identity| identity.display_name().to_string()),
            step: snapshot.diagnostic.step(),
            answers: *snapshot.diagnostic.answers(),
            question: snapshot.question,
            recommendation: snapshot.recommendation,
            collection: snapshot.items.iter().map(ItemResponse::from).collect(),
            total_carbon_kg: round_carbon(snapshot.total_carbon_kg),
            conversation: snapshot.conversation,
            available_actions: snapshot.accepted_triggers,
        }
    }
}

/// Ownership certificate of a committed acquisition.
#[derive(Debug, Clone, Serialize)]
pub struct CertificateResponse {
    pub transaction_id: String,
    pub ledger_hash: String,
    pub issued_at: String,
}

/// Result of a successful ownership form.
#[derive(Debug, Clone, Serialize)]
pub struct AcquisitionResponse {
    pub success: bool,
    pub new_total_carbon_kg: f64,
    pub item: ItemResponse,
    pub certificate: CertificateResponse,
    pub session: SessionResponse,
}

impl AcquisitionResponse {
    pub fn new(receipt: CommitReceipt, snapshot: SessionSnapshot) -> Self {
        Self {
            success: true,
            new_total_carbon_kg: round_carbon(receipt.total_carbon_kg),
            item: ItemResponse::from(&receipt.item),
            certificate: CertificateResponse {
                transaction_id: receipt.certificate.transaction_id,
                ledger_hash: receipt.certificate.ledger_hash,
                issued_at: receipt.certificate.issued_at.as_datetime().to_rfc3339(),
            },
            session: snapshot.into(),
        }
    }
}

/// Assistant reply.
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub reply: String,
    pub fallback: bool,
}

impl From<AssistantReply> for AskResponse {
    fn from(reply: AssistantReply) -> Self {
        Self {
            reply: reply.reply,
            fallback: reply.fallback,
        }
    }
}

/// Passport artifact.
#[derive(Debug, Clone, Serialize)]
pub struct PassportResponse {
    pub item_id: String,
    pub payload: String,
    pub image_url: String,
}

impl From<PassportArtifact> for PassportResponse {
    fn from(artifact: PassportArtifact) -> Self {
        Self {
            item_id: artifact.item_id.to_string(),
            payload: artifact.payload,
            image_url: artifact.image_url,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&WorkflowError> for ErrorResponse {
    fn from(error: &WorkflowError) -> Self {
        let details = match error {
            WorkflowError::Validation { field, .. } => Some(serde_json::json!({ "field": field })),
            WorkflowError::InvalidTransition { page, trigger } => {
                Some(serde_json::json!({ "page": page, "trigger": trigger }))
            }
            _ => None,
        };
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
            details,
        }
    }
}
