//! Parsed RFC documents
//!
//! A [`Document`] owns the source text. Lines, paragraphs and clauses refer
//! into it by byte offset and are resolved through it.

use std::collections::BTreeMap;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::artifacts::PageArtifactFilter;
use crate::clause::Clause;
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::header::{read_header, read_title};
use crate::importance::Importance;
use crate::lines::{split_lines, Line};
use crate::structure::{segment, Paragraph, Section};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    /// Hex SHA-256 of the raw bytes, when read from bytes or a file
    pub hash: Option<String>,
    pub lines: Vec<Line>,
    pub header: BTreeMap<String, String>,
    pub rfc_number: Option<u32>,
    pub title: String,
    pub category: Option<String>,
    pub sections: Vec<Section>,
}

/// Clause counts per requirement level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportanceSummary {
    pub must: usize,
    pub should: usize,
    pub may: usize,
    pub unclassified: usize,
}

impl ImportanceSummary {
    pub fn count(&self, importance: Importance) -> usize {
        match importance {
            Importance::Must => self.must,
            Importance::Should => self.should,
            Importance::May => self.may,
        }
    }

    pub fn total(&self) -> usize {
        self.must + self.should + self.may + self.unclassified
    }
}

/// Hex-encoded SHA-256 of raw document bytes
pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

impl Document {
    /// Parse document text into header, title and section tree
    ///
    /// Clauses are not derived here; see [`Document::clauses`] and
    /// [`Document::derive_all_clauses`].
    pub fn parse(text: impl Into<String>, config: &ParserConfig) -> Result<Self, ParseError> {
        let text = text.into();
        let lines = split_lines(&text);

        let (header, after_header) = read_header(&text, &lines, config)?;
        let (title, after_title) = read_title(&text, &lines, after_header)?;

        let filter = PageArtifactFilter::new(
            header.rfc_number,
            &title,
            header.category.as_deref(),
            config.page_width,
        );
        let sections = segment(&text, &lines[after_title..], &filter)?;

        tracing::debug!(
            rfc_number = ?header.rfc_number,
            title = %title,
            lines = lines.len(),
            sections = sections.len(),
            paragraphs = sections.iter().map(|s| s.paragraphs.len()).sum::<usize>(),
            "parsed document"
        );

        Ok(Self {
            text,
            hash: None,
            lines,
            header: header.fields,
            rfc_number: header.rfc_number,
            title,
            category: header.category,
            sections,
        })
    }

    /// Parse raw bytes, which must be US-ASCII, and record their hash
    pub fn from_bytes(bytes: &[u8], config: &ParserConfig) -> Result<Self, ParseError> {
        if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
            return Err(ParseError::NonAscii { offset });
        }
        let text = String::from_utf8_lossy(bytes).into_owned();
        Ok(Self::parse(text, config)?.with_hash(content_hash(bytes)))
    }

    pub fn from_path(path: impl AsRef<Path>, config: &ParserConfig) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read document");
        Self::from_bytes(&bytes, config)
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn line_text(&self, line: &Line) -> &str {
        line.text(&self.text)
    }

    /// Clauses of one of this document's paragraphs, derived on first request
    pub fn clauses<'a>(&'a self, paragraph: &'a Paragraph) -> Result<&'a [Clause], ParseError> {
        paragraph.clauses(&self.text)
    }

    pub fn clause_text(&self, clause: &Clause) -> String {
        clause.text(&self.text)
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.sections.iter().flat_map(|s| s.paragraphs.iter())
    }

    pub fn paragraph_count(&self) -> usize {
        self.sections.iter().map(|s| s.paragraphs.len()).sum()
    }

    /// Derive clauses for every paragraph, returning the total count
    ///
    /// Surfaces any clause invariant violation for the whole document at once.
    pub fn derive_all_clauses(&self) -> Result<usize, ParseError> {
        let mut total = 0;
        for paragraph in self.paragraphs() {
            total += paragraph.clauses(&self.text)?.len();
        }
        Ok(total)
    }

    pub fn find_section(&self, id: &str) -> Option<&Section> {
        if id.is_empty() {
            return None;
        }
        self.sections.iter().find(|s| s.id() == id)
    }

    pub fn find_paragraph(&self, id: &str) -> Option<&Paragraph> {
        if id.is_empty() {
            return None;
        }
        self.paragraphs().find(|p| p.id == id)
    }

    /// Look up a clause by its id, e.g. `s3_p4_c1`
    pub fn find_clause(&self, id: &str) -> Result<Option<&Clause>, ParseError> {
        let Some((paragraph_id, _)) = id.rsplit_once("_c") else {
            return Ok(None);
        };
        let Some(paragraph) = self.find_paragraph(paragraph_id) else {
            return Ok(None);
        };
        Ok(paragraph.clauses(&self.text)?.iter().find(|c| c.id == id))
    }

    /// Count clauses by requirement level
    pub fn summary(&self) -> Result<ImportanceSummary, ParseError> {
        let mut summary = ImportanceSummary::default();
        for paragraph in self.paragraphs() {
            for clause in paragraph.clauses(&self.text)? {
                match clause.importance(&self.text) {
                    Some(Importance::Must) => summary.must += 1,
                    Some(Importance::Should) => summary.should += 1,
                    Some(Importance::May) => summary.may += 1,
                    None => summary.unclassified += 1,
                }
            }
        }
        Ok(summary)
    }
}
