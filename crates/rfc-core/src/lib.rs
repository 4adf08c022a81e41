//! IETF RFC plain-text structure parser
//!
//! Reconstructs the latent structure of a fixed-width, paginated RFC:
//! header fields, sections, paragraphs and requirement-bearing clauses
//! tagged with their RFC 2119 level.
//!
//! Parsing runs in two phases:
//! - `Document::parse` / `Document::from_path`: one forward scan building
//!   the Section/Paragraph/Line tree, dropping page headers and footers
//! - `Document::clauses`: sentence splitting per paragraph, derived on
//!   first request and cached for the document's lifetime

pub mod artifacts;
pub mod clause;
pub mod config;
pub mod document;
pub mod error;
pub mod header;
pub mod importance;
pub mod lines;
pub mod structure;
pub mod tree;

pub use artifacts::{Artifact, PageArtifactFilter};
pub use clause::{split_clauses, Clause, LineSubstring};
pub use config::ParserConfig;
pub use document::{content_hash, Document, ImportanceSummary};
pub use error::ParseError;
pub use header::Header;
pub use importance::{classify, Importance};
pub use lines::{split_lines, Line};
pub use structure::{split_heading, Paragraph, Section};
pub use tree::DocumentView;

/// Parse document text with the default configuration
pub fn parse(text: &str) -> Result<Document, ParseError> {
    Document::parse(text, &ParserConfig::default())
}

/// Read and parse a document file with the default configuration
pub fn parse_path(path: impl AsRef<std::path::Path>) -> Result<Document, ParseError> {
    Document::from_path(path, &ParserConfig::default())
}
