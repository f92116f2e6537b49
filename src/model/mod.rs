//! Document model types for formatted paper content.
//!
//! This module defines the intermediate representation that bridges text
//! formatting and content rendering. The formatter produces a [`Document`];
//! renderers consume a [`Paper`], which wraps a document with metadata and
//! references.

mod citation;
mod document;
mod paper;
mod reference;

pub use citation::{ReferenceStyle, Work};
pub use document::{Document, Section};
pub use paper::{Paper, PaperMetadata};
pub use reference::{parse_references, Reference};
