//! HTTP handlers for concierge endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use secrecy::Secret;

use crate::application::ConciergeService;
use crate::domain::acquisition::OwnershipForm;
use crate::domain::diagnostic::DiagnosticAnswer;
use crate::domain::foundation::ItemId;
use crate::domain::session::{SessionSnapshot, WorkflowError};

use super::dto::{
    AcquisitionResponse, AskRequest, AskResponse, ErrorResponse, LoginRequest, PassportResponse,
    SessionResponse,
};

/// Header carrying the caller's assistant API key.
pub const ASSISTANT_KEY_HEADER: &str = "x-assistant-key";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ConciergeHandlers {
    service: Arc<ConciergeService>,
}

impl ConciergeHandlers {
    pub fn new(service: Arc<ConciergeService>) -> Self {
        Self { service }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Session
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/session/login - Sign in
pub async fn login(
    State(handlers): State<ConciergeHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let result = handlers
        .service
        .login(req.identity, Secret::new(req.secret))
        .await;
    session_response(result)
}

/// POST /api/session/logout - Discard the session
pub async fn logout(State(handlers): State<ConciergeHandlers>) -> Response {
    session_response(handlers.service.logout().await)
}

/// GET /api/session - Current session state
pub async fn get_session(State(handlers): State<ConciergeHandlers>) -> Response {
    let snapshot = handlers.service.snapshot().await;
    (StatusCode::OK, Json(SessionResponse::from(snapshot))).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Acquisition workflow
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/acquisition/start - Home → AddProduct
pub async fn start_acquisition(State(handlers): State<ConciergeHandlers>) -> Response {
    session_response(handlers.service.start_acquisition().await)
}

/// POST /api/diagnostic/begin - AddProduct → Quiz
pub async fn begin_diagnostic(State(handlers): State<ConciergeHandlers>) -> Response {
    session_response(handlers.service.begin_diagnostic().await)
}

/// GET /api/diagnostic/question - Pending question and its options
pub async fn current_question(State(handlers): State<ConciergeHandlers>) -> Response {
    match handlers.service.current_question().await {
        Ok(question) => (StatusCode::OK, Json(question)).into_response(),
        Err(e) => handle_workflow_error(e),
    }
}

/// POST /api/diagnostic/answer - Answer the pending question
pub async fn answer_step(
    State(handlers): State<ConciergeHandlers>,
    Json(answer): Json<DiagnosticAnswer>,
) -> Response {
    session_response(handlers.service.answer(answer).await)
}

/// POST /api/acquisition/confirm - Result → BlockchainForm
pub async fn confirm_acquisition(State(handlers): State<ConciergeHandlers>) -> Response {
    session_response(handlers.service.confirm_acquisition().await)
}

/// POST /api/acquisition/ownership - Submit the ownership form and commit
pub async fn submit_ownership(
    State(handlers): State<ConciergeHandlers>,
    Json(form): Json<OwnershipForm>,
) -> Response {
    match handlers.service.submit_ownership(form).await {
        Ok((receipt, snapshot)) => (
            StatusCode::CREATED,
            Json(AcquisitionResponse::new(receipt, snapshot)),
        )
            .into_response(),
        Err(e) => handle_workflow_error(e),
    }
}

/// GET /api/collection/:id/passport - Passport artifact of an item
pub async fn view_passport(
    State(handlers): State<ConciergeHandlers>,
    Path(item_id): Path<String>,
) -> Response {
    let item_id = match item_id.parse::<ItemId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid item ID")),
            )
                .into_response()
        }
    };

    match handlers.service.view_passport(&item_id).await {
        Ok(artifact) => (StatusCode::OK, Json(PassportResponse::from(artifact))).into_response(),
        Err(e) => handle_workflow_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Assistant
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/assistant/ask - Ask the concierge
pub async fn ask(
    State(handlers): State<ConciergeHandlers>,
    headers: HeaderMap,
    Json(req): Json<AskRequest>,
) -> Response {
    let credential = headers
        .get(ASSISTANT_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|key| Secret::new(key.to_string()));

    match handlers.service.ask(&req.prompt, credential).await {
        Ok(reply) => (StatusCode::OK, Json(AskResponse::from(reply))).into_response(),
        Err(e) => handle_workflow_error(e),
    }
}

/// GET /health - Liveness
pub async fn health() -> Response {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

fn session_response(result: Result<SessionSnapshot, WorkflowError>) -> Response {
    match result {
        Ok(snapshot) => (StatusCode::OK, Json(SessionResponse::from(snapshot))).into_response(),
        Err(e) => handle_workflow_error(e),
    }
}

fn status_for(error: &WorkflowError) -> StatusCode {
    match error {
        WorkflowError::AuthenticationFailed | WorkflowError::NotSignedIn => StatusCode::UNAUTHORIZED,
        WorkflowError::InvalidTransition { .. } => StatusCode::CONFLICT,
        WorkflowError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        WorkflowError::ItemNotFound(_) => StatusCode::NOT_FOUND,
        WorkflowError::Assistant(_) | WorkflowError::Passport(_) => StatusCode::BAD_GATEWAY,
        WorkflowError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn handle_workflow_error(error: WorkflowError) -> Response {
    let status = status_for(&error);
    if let WorkflowError::Internal(msg) = &error {
        tracing::error!("Internal error: {}", msg);
        return (status, Json(ErrorResponse::internal("Internal server error"))).into_response();
    }
    (status, Json(ErrorResponse::from(&error))).into_response()
}
