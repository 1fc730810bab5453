use async_trait::async_trait;

use crate::{
    error::{GeminiError, Result},
    models::{
        AspectRatio, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
        ImageConfig, ImagePayload, Part,
    },
};

/// Seam between the orchestrator and the network. The batch runner only
/// depends on this trait.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
        reference: Option<&ImagePayload>,
    ) -> Result<ImagePayload>;
}

#[derive(Clone)]
pub struct ImageClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    api_host: String,
}

impl ImageClient {
    pub fn new(http: reqwest::Client, api_key: String, model: String, api_host: String) -> Self {
        Self {
            http,
            api_key,
            model,
            api_host,
        }
    }

    fn endpoint_url(&self) -> String {
        format!(
            "https://{}/v1beta/models/{}:generateContent",
            self.api_host, self.model
        )
    }

    fn build_request(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
        reference: Option<&ImagePayload>,
    ) -> GenerateContentRequest {
        let parts = match reference {
            // Feeding the previous frame back in keeps sequential images in
            // the same visual style.
            Some(previous) => vec![
                Part::text(
                    "Here is the previous frame in our process sequence. Generate the next \
                     frame maintaining the same visual style, perspective, and color palette:",
                ),
                Part::inline_data(previous.clone()),
                Part::text(format!("Now generate the next frame:\n\n{}", prompt)),
            ],
            None => vec![Part::text(prompt)],
        };

        GenerateContentRequest {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_modalities: vec!["TEXT".into(), "IMAGE".into()],
                candidate_count: 1,
                image_config: Some(ImageConfig { aspect_ratio }),
            },
        }
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
        reference: Option<&ImagePayload>,
    ) -> Result<ImagePayload> {
        let request = self.build_request(prompt, aspect_ratio, reference);

        log::info!("Generating image with model: {}", self.model);
        log::debug!("Prompt: {}", prompt);

        // Error payloads arrive with non-2xx statuses but still carry the
        // JSON error object, so the body is parsed regardless of status.
        let response = self
            .http
            .post(self.endpoint_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::RequestError(e.to_string()))?;

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::ResponseError(e.to_string()))?;

        parsed.into_payload()
    }
}
