//! QR passport service.
//!
//! Encodes an item's passport as JSON and points at a public QR rendering
//! endpoint that turns the payload into an image. No request is made here;
//! the client fetches the image from the returned URL.

use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;

use crate::domain::collection::CollectionItem;
use crate::ports::{PassportArtifact, PassportArtifactService, PassportError};

/// Public QR rendering endpoint.
pub const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Default rendered size in pixels.
pub const DEFAULT_QR_SIZE: u32 = 300;

#[derive(Serialize)]
struct PassportPayload<'a> {
    item_id: &'a str,
    name: &'a str,
    reference: &'a str,
    material: &'a str,
    carbon_kg: f64,
    next_maintenance: String,
}

/// Passport service producing QR image URLs.
#[derive(Debug, Clone)]
pub struct QrPassportService {
    endpoint: String,
    size: u32,
}

impl Default for QrPassportService {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_QR_ENDPOINT.to_string(),
            size: DEFAULT_QR_SIZE,
        }
    }
}

impl QrPassportService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rendering endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the rendered size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    fn payload(item: &CollectionItem) -> Result<String, PassportError> {
        let payload = PassportPayload {
            item_id: item.id().as_str(),
            name: item.name(),
            reference: item.reference_code(),
            material: item.material(),
            carbon_kg: item.carbon_kg(),
            next_maintenance: item.next_maintenance().format("%Y-%m-%d").to_string(),
        };
        serde_json::to_string(&payload).map_err(|e| PassportError::Encoding(e.to_string()))
    }
}

#[async_trait]
impl PassportArtifactService for QrPassportService {
    async fn generate(&self, item: &CollectionItem) -> Result<PassportArtifact, PassportError> {
        let payload = Self::payload(item)?;
        let size = format!("{}x{}", self.size, self.size);
        let url = Url::parse_with_params(&self.endpoint, &[("size", size.as_str()), ("data", payload.as_str())])
            .map_err(|e| PassportError::Encoding(format!("invalid endpoint: {}", e)))?;

        Ok(PassportArtifact {
            item_id: item.id().clone(),
            payload,
            image_url: url.to_string(),
        })
    }
}
