//! Rendering module for converting papers to various output formats.

mod cleanup;
mod json;
mod markdown;
mod options;
mod result;
mod text;

pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use json::{document_to_json, to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats};
pub use text::to_text;
