pub mod batch;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod writer;

pub use batch::{BatchOptions, BatchSummary};
pub use catalog::{records, PromptRecord, STYLE_GUIDE};
pub use config::{Config, GeminiConfig};
pub use error::{GeminiError, Result};
pub use gemini::{GeminiClient, ImageClient, ImageGenerator};
pub use models::{AspectRatio, ImagePayload};
pub use writer::save_image;
