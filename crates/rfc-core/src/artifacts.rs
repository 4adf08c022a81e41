//! Page artifact recognition
//!
//! Paginated RFCs repeat a running header and footer on every page:
//!
//! ```text
//! RFC 6762                      Multicast DNS                February 2013
//! Cheshire & Krochmal           Standards Track                  [Page 12]
//! ```
//!
//! Both are exactly one page width long. A header or footer that matches
//! by shape but not by content means the title or category was extracted
//! wrongly, so that is reported as an invariant violation rather than
//! guessed around.

use crate::error::ParseError;

const FORM_FEED: &str = "\x0c";
const PAGE_MARKER: &str = "[Page ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    PageHeader,
    PageFooter,
    FormFeed,
}

/// A line holding nothing but a form feed
pub fn is_form_feed(text: &str) -> bool {
    text == FORM_FEED
}

/// Recognizes page artifacts of one document
#[derive(Debug, Clone)]
pub struct PageArtifactFilter {
    header_prefix: Option<String>,
    title: String,
    category: Option<String>,
    page_width: usize,
}

impl PageArtifactFilter {
    pub fn new(
        rfc_number: Option<u32>,
        title: &str,
        category: Option<&str>,
        page_width: usize,
    ) -> Self {
        Self {
            header_prefix: rfc_number.map(|n| format!("RFC {}", n)),
            title: title.to_string(),
            category: category.map(str::to_string),
            page_width,
        }
    }

    /// Classify a line, returning `None` for ordinary content
    pub fn classify(&self, line_num: usize, text: &str) -> Result<Option<Artifact>, ParseError> {
        if is_form_feed(text) {
            return Ok(Some(Artifact::FormFeed));
        }
        if text.len() != self.page_width {
            return Ok(None);
        }

        if let Some(prefix) = &self.header_prefix {
            if text.starts_with(prefix.as_str()) {
                if !text.contains(self.title.as_str()) {
                    return Err(ParseError::invariant(
                        line_num,
                        format!("page header does not contain title {:?}", self.title),
                    ));
                }
                return Ok(Some(Artifact::PageHeader));
            }
        }

        if text.ends_with(']') {
            if let Some(category) = &self.category {
                if !text.contains(category.as_str()) {
                    return Err(ParseError::invariant(
                        line_num,
                        format!("page footer does not contain category {:?}", category),
                    ));
                }
            }
            if !text.contains(PAGE_MARKER) {
                return Err(ParseError::invariant(
                    line_num,
                    "page footer does not contain a page number",
                ));
            }
            return Ok(Some(Artifact::PageFooter));
        }

        Ok(None)
    }
}
