//! OpenAI image generation provider (gpt-image-1).

use crate::error::{LookGenError, Result};
use crate::image::provider::ImageProvider;
use crate::image::types::{GeneratedImage, ImageRequest};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Instant;

const GENERATIONS_URL: &str = "https://api.openai.com/v1/images/generations";

/// Model identifier sent with every generation request.
pub const MODEL: &str = "gpt-image-1";

/// Environment variable the builder falls back to for the API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Reason reported when a response carries no image payload.
const MISSING_IMAGE_DATA: &str = "API did not return image data.";

/// Builder for [`OpenAiImageProvider`].
#[derive(Debug, Clone, Default)]
pub struct OpenAiImageProviderBuilder {
    api_key: Option<String>,
}

impl OpenAiImageProviderBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key. Falls back to the `OPENAI_API_KEY` env var.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builds the provider, resolving and validating the API key.
    ///
    /// A missing or empty key fails here, before any HTTP client exists,
    /// so a misconfigured run never reaches the network.
    pub fn build(self) -> Result<OpenAiImageProvider> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var(API_KEY_VAR).ok())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                LookGenError::Auth(format!(
                    "{API_KEY_VAR} is not set. Create a .env file with {API_KEY_VAR}=your_key"
                ))
            })?;

        Ok(OpenAiImageProvider {
            client: reqwest::Client::new(),
            api_key,
        })
    }
}

/// OpenAI image generation provider.
pub struct OpenAiImageProvider {
    client: reqwest::Client,
    api_key: String,
}

impl OpenAiImageProvider {
    /// Creates a new `OpenAiImageProviderBuilder`.
    pub fn builder() -> OpenAiImageProviderBuilder {
        OpenAiImageProviderBuilder::new()
    }
}

#[async_trait]
impl ImageProvider for OpenAiImageProvider {
    async fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage> {
        let start = Instant::now();

        let body = OpenAiImageRequest {
            model: MODEL,
            prompt: &request.prompt,
            size: &request.size,
        };

        tracing::debug!(model = MODEL, size = %request.size, "requesting image generation");

        let response = self
            .client
            .post(GENERATIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(parse_error(status.as_u16(), &text));
        }

        let parsed: OpenAiImageResponse = serde_json::from_str(&text)?;
        let (data, revised_prompt) = first_image_bytes(parsed)?;

        let duration_ms = start.elapsed().as_millis() as u64;
        if let Some(revised) = &revised_prompt {
            tracing::debug!(%revised, "model revised the prompt");
        }
        tracing::debug!(bytes = data.len(), duration_ms, "image generated");

        Ok(GeneratedImage {
            data,
            revised_prompt,
            duration_ms,
        })
    }

    fn name(&self) -> &str {
        "OpenAI (gpt-image-1)"
    }
}

/// Maps a non-success response to an error, preferring the message from the
/// structured `{"error": {...}}` body when one parses.
fn parse_error(status: u16, text: &str) -> LookGenError {
    let message = serde_json::from_str::<OpenAiErrorResponse>(text)
        .ok()
        .map(|body| body.error.message)
        .unwrap_or_else(|| text.trim().to_string());

    if status == 401 || status == 403 {
        return LookGenError::Auth(message);
    }

    LookGenError::Api { status, message }
}

/// Pulls the first image out of a response and decodes its base64 payload.
fn first_image_bytes(response: OpenAiImageResponse) -> Result<(Vec<u8>, Option<String>)> {
    let image = response
        .data
        .into_iter()
        .next()
        .ok_or_else(|| LookGenError::UnexpectedResponse(MISSING_IMAGE_DATA.into()))?;

    let b64 = image
        .b64_json
        .ok_or_else(|| LookGenError::UnexpectedResponse(MISSING_IMAGE_DATA.into()))?;

    use base64::Engine;
    let data = base64::engine::general_purpose::STANDARD
        .decode(b64.trim())
        .map_err(|e| LookGenError::Decode(e.to_string()))?;

    Ok((data, image.revised_prompt))
}

#[derive(Debug, Serialize)]
struct OpenAiImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct OpenAiImageResponse {
    #[serde(default)]
    data: Vec<OpenAiImageData>,
}

#[derive(Debug, Deserialize)]
struct OpenAiImageData {
    #[serde(default)]
    b64_json: Option<String>,
    #[serde(default)]
    revised_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}
