//! HTTP routes for concierge endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    answer_step, ask, begin_diagnostic, confirm_acquisition, current_question, get_session,
    health, login, logout, start_acquisition, submit_ownership, view_passport, ConciergeHandlers,
};

/// Creates the concierge router with all endpoints.
pub fn concierge_routes(handlers: ConciergeHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/session", get(get_session))
        .route("/api/session/login", post(login))
        .route("/api/session/logout", post(logout))
        .route("/api/acquisition/start", post(start_acquisition))
        .route("/api/diagnostic/begin", post(begin_diagnostic))
        .route("/api/diagnostic/question", get(current_question))
        .route("/api/diagnostic/answer", post(answer_step))
        .route("/api/acquisition/confirm", post(confirm_acquisition))
        .route("/api/acquisition/ownership", post(submit_ownership))
        .route("/api/collection/:id/passport", get(view_passport))
        .route("/api/assistant/ask", post(ask))
        .with_state(handlers)
}
