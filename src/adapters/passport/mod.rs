//! Passport artifact adapters.

mod qr_service;

pub use qr_service::{QrPassportService, DEFAULT_QR_ENDPOINT, DEFAULT_QR_SIZE};
