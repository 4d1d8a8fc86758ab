#![warn(missing_docs)]
//! LookGen - batch renderer for the lookbook reference shots.
//!
//! Authenticates against the OpenAI Images API, renders the fixed two-shot
//! list (a 1024x1024 square and a 1024x1365 portrait of the same outfit),
//! and writes the decoded PNGs under `outputs/`.
//!
//! # Quick Start
//!
//! ```no_run
//! use lookgen::{ImageProvider, ImageRequest, OpenAiImageProvider};
//!
//! #[tokio::main]
//! async fn main() -> lookgen::Result<()> {
//!     let provider = OpenAiImageProvider::builder().build()?;
//!     let request = ImageRequest::new("A red bicycle leaning on a wall", "1024x1024");
//!     let image = provider.generate(&request).await?;
//!     image.save("bicycle.png")?;
//!     Ok(())
//! }
//! ```
//!
//! The `lookgen` binary runs the whole shot list; see [`runner`].

mod error;

pub mod image;
pub mod runner;

// Re-export error types at crate root
pub use error::{LookGenError, Result};

// Re-export commonly used image types
pub use image::{GeneratedImage, ImageProvider, ImageRequest, OutputSpec};

pub use image::providers::{OpenAiImageProvider, OpenAiImageProviderBuilder};
