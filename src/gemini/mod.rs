pub mod image_client;

use crate::{config::GeminiConfig, error::Result};

pub use image_client::{ImageClient, ImageGenerator};

/// Entry point to the Gemini API. Holds one `reqwest::Client` shared by the
/// per-capability clients.
#[derive(Clone)]
pub struct GeminiClient {
    image_client: ImageClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        let http = reqwest::Client::new();

        Ok(Self {
            image_client: ImageClient::new(http, api_key, config.model, config.api_host),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}
