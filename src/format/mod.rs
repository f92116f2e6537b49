//! Plain-text to document-structure formatting.
//!
//! Text is split into blank-line-delimited blocks; each block either opens a
//! new titled section (when its first line looks like a heading) or becomes
//! a paragraph of the current section.

mod blocks;
mod formatter;
mod heading;
mod options;

pub use blocks::{split_blocks, Block};
pub use formatter::{format, format_with_options, Formatter};
pub use heading::{looks_like_heading, strip_heading_marker};
pub use options::FormatOptions;
