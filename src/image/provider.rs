//! Image provider trait.

use crate::error::Result;
use crate::image::types::{GeneratedImage, ImageRequest};
use async_trait::async_trait;

/// Trait for image generation backends.
///
/// The render loop only sees this interface, so tests can substitute a
/// scripted implementation for the real API client.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Generates an image from the given request.
    async fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage>;

    /// Returns the name of this provider for display.
    fn name(&self) -> &str;
}
