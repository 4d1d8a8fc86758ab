//! Image generation providers.

mod openai;

pub use openai::{OpenAiImageProvider, OpenAiImageProviderBuilder, API_KEY_VAR, MODEL};
