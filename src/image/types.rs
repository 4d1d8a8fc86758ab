//! Core types for image generation.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// A request to generate a single image.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    /// The text prompt describing the desired image.
    pub prompt: String,
    /// Target size string as the API expects it (e.g., "1024x1024").
    pub size: String,
}

impl ImageRequest {
    /// Creates a new request with the given prompt and size.
    pub fn new(prompt: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            size: size.into(),
        }
    }
}

/// One planned output: the size to request and the file it lands in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    /// Size string passed through to the API.
    pub size: String,
    /// Destination path for the decoded image.
    pub file_path: PathBuf,
}

impl OutputSpec {
    /// Creates a new output spec.
    pub fn new(size: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            size: size.into(),
            file_path: file_path.into(),
        }
    }
}

/// A generated image with its data and metadata.
#[derive(Debug, Clone)]
#[must_use = "generated image should be saved or processed"]
pub struct GeneratedImage {
    /// Raw image bytes.
    pub data: Vec<u8>,
    /// Prompt as rewritten by the model, when the API reports one.
    pub revised_prompt: Option<String>,
    /// Generation duration in milliseconds.
    pub duration_ms: u64,
}

impl GeneratedImage {
    /// Creates a new generated image with no metadata.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            revised_prompt: None,
            duration_ms: 0,
        }
    }

    /// Returns the size of the image data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Saves the image to the specified path, overwriting any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, &self.data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_spec_new() {
        let spec = OutputSpec::new("1024x1024", "outputs/shot.png");
        assert_eq!(spec.size, "1024x1024");
        assert_eq!(spec.file_path, PathBuf::from("outputs/shot.png"));
    }

    #[test]
    fn test_request_new() {
        let request = ImageRequest::new("A red bicycle", "1024x1365");
        assert_eq!(request.prompt, "A red bicycle");
        assert_eq!(request.size, "1024x1365");
    }

    #[test]
    fn test_image_size() {
        let image = GeneratedImage::new(vec![1, 2, 3, 4]);
        assert_eq!(image.size(), 4);
        assert!(image.revised_prompt.is_none());
    }

    #[test]
    fn test_save_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");

        let image = GeneratedImage::new(vec![0x89, 0x50, 0x4E, 0x47]);
        image.save(&path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), image.data);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");

        GeneratedImage::new(vec![1, 1, 1]).save(&path).unwrap();
        GeneratedImage::new(vec![2, 2]).save(&path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), vec![2, 2]);
    }
}
