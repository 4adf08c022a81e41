//! Section and paragraph segmentation
//!
//! One forward pass over the lines after the title. Unindented lines that
//! are not page artifacts open sections, indented lines are paragraph body,
//! and blank lines close a paragraph only when its last line ends a
//! sentence, so a paragraph interrupted by a page break stays whole.

use std::cell::OnceCell;

use crate::artifacts::{self, PageArtifactFilter};
use crate::clause::{self, Clause};
use crate::error::ParseError;
use crate::importance::{self, Importance};
use crate::lines::Line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading line as it appears in the document
    pub heading: String,
    /// Section number, `""` for unnumbered sections such as "Abstract"
    pub num: String,
    pub name: String,
    pub paragraphs: Vec<Paragraph>,
}

impl Section {
    pub fn new(heading: &str) -> Self {
        let (num, name) = split_heading(heading);
        Self {
            heading: heading.to_string(),
            num,
            name,
            paragraphs: Vec::new(),
        }
    }

    /// `s<num>`, or empty for unnumbered sections
    pub fn id(&self) -> String {
        if self.num.is_empty() {
            String::new()
        } else {
            format!("s{}", self.num)
        }
    }

    pub fn is_numbered(&self) -> bool {
        !self.num.is_empty()
    }
}

/// Split a heading into number and name
///
/// `"3.1.  Foo"` gives `("3.1", "Foo")`, `"1 - Scope"` gives `("1", "Scope")`
/// and `"Appendix A.  Bar"` gives `("AppA", "Bar")`.
pub fn split_heading(heading: &str) -> (String, String) {
    let (at, sep_len) = match heading.find(". ") {
        Some(i) => (i, 2),
        None => match heading.find(" - ") {
            Some(i) => (i, 3),
            None => (0, 0),
        },
    };
    let num = heading[..at].replace("Appendix ", "App");
    let name = heading[at + sep_len..].trim().to_string();
    (num, name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Index of the owning section in [`crate::Document::sections`]
    pub section: usize,
    /// 1-based position within the section
    pub num: usize,
    /// `<section-id>_p<num>`, or empty in unnumbered sections
    pub id: String,
    pub lines: Vec<Line>,
    clauses: OnceCell<Vec<Clause>>,
}

impl Paragraph {
    fn new(section: usize, section_id: &str, num: usize) -> Self {
        let id = if section_id.is_empty() {
            String::new()
        } else {
            format!("{}_p{}", section_id, num)
        };
        Self {
            section,
            num,
            id,
            lines: Vec::new(),
            clauses: OnceCell::new(),
        }
    }

    /// Lines trimmed and joined with single spaces
    pub fn text(&self, source: &str) -> String {
        self.lines
            .iter()
            .map(|line| line.text(source).trim())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether the last line closes a sentence, list intro or parenthesis
    pub fn has_ended(&self, source: &str) -> bool {
        self.lines
            .last()
            .and_then(|line| line.text(source).trim_end().chars().last())
            .is_some_and(|c| matches!(c, '.' | ':' | ')'))
    }

    pub fn importance(&self, source: &str) -> Option<Importance> {
        importance::classify(&self.text(source))
    }

    /// Whether this paragraph is split into clauses
    pub fn is_split(&self) -> bool {
        !self.id.is_empty()
    }

    /// Clauses of this paragraph, derived on first request
    ///
    /// Paragraphs of unnumbered sections are not split and have none. The
    /// cache is keyed on nothing, so `source` must be the text this paragraph
    /// was segmented from; outside the crate use [`crate::Document::clauses`].
    pub(crate) fn clauses(&self, source: &str) -> Result<&[Clause], ParseError> {
        if let Some(clauses) = self.clauses.get() {
            return Ok(clauses);
        }
        let derived = if self.is_split() {
            clause::split_clauses(source, &self.lines, &self.id)?
        } else {
            Vec::new()
        };
        Ok(self.clauses.get_or_init(|| derived))
    }
}

/// Build the section tree from the lines following the title
pub fn segment(
    source: &str,
    lines: &[Line],
    filter: &PageArtifactFilter,
) -> Result<Vec<Section>, ParseError> {
    let mut sections: Vec<Section> = Vec::new();
    let mut paragraph_open = false;

    for line in lines {
        let text = line.text(source);

        if line.is_blank(source) && !artifacts::is_form_feed(text) {
            if paragraph_open {
                let ended = sections
                    .last()
                    .and_then(|s| s.paragraphs.last())
                    .is_some_and(|p| p.has_ended(source));
                if ended {
                    paragraph_open = false;
                }
            }
        } else if text.starts_with(' ') {
            if sections.is_empty() {
                return Err(ParseError::structural(line.num, "Expected section heading"));
            }
            let index = sections.len() - 1;
            let section = &mut sections[index];
            if !paragraph_open {
                let section_id = section.id();
                let num = section.paragraphs.len() + 1;
                let paragraph = Paragraph::new(index, &section_id, num);
                section.paragraphs.push(paragraph);
                paragraph_open = true;
            }
            if let Some(paragraph) = section.paragraphs.last_mut() {
                paragraph.lines.push(*line);
            }
        } else if let Some(artifact) = filter.classify(line.num, text)? {
            tracing::trace!(line = line.num, ?artifact, "discarding page artifact");
        } else {
            let section = Section::new(text);
            tracing::debug!(line = line.num, num = %section.num, name = %section.name, "section");
            sections.push(section);
            paragraph_open = false;
        }
    }

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::split_lines;
    use pretty_assertions::assert_eq;

    fn filter() -> PageArtifactFilter {
        PageArtifactFilter::new(Some(9999), "Test", Some("Informational"), 72)
    }

    fn assert_heading(heading: &str, num: &str, name: &str) {
        let (got_num, got_name) = split_heading(heading);
        assert_eq!((got_num.as_str(), got_name.as_str()), (num, name));
    }

    #[test]
    fn test_split_heading_variants() {
        assert_heading("1.  Introduction", "1", "Introduction");
        assert_heading("3.1.  Foo Bar", "3.1", "Foo Bar");
        assert_heading("1 - Rationale and Scope", "1", "Rationale and Scope");
        assert_heading("Appendix A.  Design Rationale", "AppA", "Design Rationale");
    }

    #[test]
    fn test_heading_without_separator_is_unnumbered() {
        let section = Section::new("Status of This Memo");
        assert_eq!(section.num, "");
        assert_eq!(section.name, "Status of This Memo");
        assert_eq!(section.id(), "");
        assert!(!section.is_numbered());
    }

    #[test]
    fn test_section_id() {
        assert_eq!(Section::new("5.2.  Things").id(), "s5.2");
    }

    #[test]
    fn test_segments_paragraphs() {
        let source = "Abstract\n\n   First paragraph.\n\n   Second paragraph\n   continues.\n\n1.  Intro\n\n   Body.\n";
        let lines = split_lines(source);
        let sections = segment(source, &lines, &filter()).unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].paragraphs.len(), 2);
        assert_eq!(
            sections[0].paragraphs[1].text(source),
            "Second paragraph continues."
        );
        assert_eq!(sections[0].paragraphs[1].id, "");
        assert_eq!(sections[1].paragraphs[0].id, "s1_p1");
        assert_eq!(sections[1].paragraphs[0].section, 1);
    }

    #[test]
    fn test_unfinished_paragraph_survives_blank_lines() {
        let source = "1.  Intro\n\n   This sentence is cut by a\n\n\n   page break and goes on.\n";
        let lines = split_lines(source);
        let sections = segment(source, &lines, &filter()).unwrap();
        assert_eq!(sections[0].paragraphs.len(), 1);
        assert_eq!(sections[0].paragraphs[0].lines.len(), 2);
    }

    #[test]
    fn test_heading_closes_open_paragraph() {
        let source = "1.  Intro\n\n   Unterminated text\n2.  Next\n\n   Body.\n";
        let lines = split_lines(source);
        let sections = segment(source, &lines, &filter()).unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].paragraphs.len(), 1);
    }

    #[test]
    fn test_form_feed_does_not_close_paragraph() {
        let source = "1.  Intro\n   ends here.\n\x0c\n   still same paragraph.\n";
        let lines = split_lines(source);
        let sections = segment(source, &lines, &filter()).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].paragraphs.len(), 1);
        assert_eq!(sections[0].paragraphs[0].lines.len(), 2);
    }

    #[test]
    fn test_body_before_heading_is_structural_error() {
        let source = "\n   Orphan body text.\n";
        let lines = split_lines(source);
        let err = segment(source, &lines, &filter()).unwrap_err();
        assert!(matches!(err, ParseError::Structural { line: 2, .. }));
    }

    #[test]
    fn test_has_ended() {
        let source = "   ends with colon:\n   no end\n   (paren)\n";
        let lines = split_lines(source);
        let mut paragraph = Paragraph::new(0, "s1", 1);
        paragraph.lines.push(lines[0]);
        assert!(paragraph.has_ended(source));
        paragraph.lines.push(lines[1]);
        assert!(!paragraph.has_ended(source));
        paragraph.lines.push(lines[2]);
        assert!(paragraph.has_ended(source));
    }

    #[test]
    fn test_clauses_are_cached() {
        let source = "1.  Intro\n\n   One sentence.  Two sentence.\n";
        let lines = split_lines(source);
        let sections = segment(source, &lines, &filter()).unwrap();
        let paragraph = &sections[0].paragraphs[0];
        let first = paragraph.clauses(source).unwrap().as_ptr();
        let second = paragraph.clauses(source).unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(first, second.as_ptr());
    }

    #[test]
    fn test_unnumbered_paragraph_has_no_clauses() {
        let source = "Abstract\n\n   One sentence.  Two sentence.\n";
        let lines = split_lines(source);
        let sections = segment(source, &lines, &filter()).unwrap();
        let paragraph = &sections[0].paragraphs[0];
        assert!(!paragraph.is_split());
        assert!(paragraph.clauses(source).unwrap().is_empty());
    }
}
