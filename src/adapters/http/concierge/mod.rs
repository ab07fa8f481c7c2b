//! HTTP adapter for concierge endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AcquisitionResponse, AskRequest, AskResponse, CertificateResponse, ErrorResponse,
    ItemResponse, LoginRequest, PassportResponse, SessionResponse,
};
pub use handlers::{ConciergeHandlers, ASSISTANT_KEY_HEADER};
pub use routes::concierge_routes;
