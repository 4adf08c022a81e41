//! Clause splitting
//!
//! A paragraph of a numbered section is joined into one string (lines
//! separated by single spaces, indentation kept) and cut into sentence-like
//! clauses. Every clause is then mapped back onto byte ranges of the source
//! lines, so a clause id always resolves to the exact bytes it came from.
//!
//! Boundaries are `". "` and `".) "`. A `". "` is not a boundary when the
//! word before it is a single character (list numbering such as `"1."`,
//! initials such as `"L."`), unless that word follows `"Appendix"`.

use crate::error::ParseError;
use crate::importance::{self, Importance};
use crate::lines::Line;

/// Clauses with this many or fewer non-blank characters mean the splitter
/// cut in the wrong place.
const MIN_CLAUSE_LEN: usize = 4;

const APPENDIX: &str = "Appendix";

/// A byte range within one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSubstring {
    pub line: Line,
    pub relative_start: usize,
    pub relative_end: usize,
}

impl LineSubstring {
    /// Absolute start offset into the document text
    pub fn start(&self) -> usize {
        self.line.start + self.relative_start
    }

    /// Absolute end offset into the document text
    pub fn end(&self) -> usize {
        self.line.start + self.relative_end
    }

    pub fn len(&self) -> usize {
        self.relative_end - self.relative_start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start()..self.end()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// 1-based position within the paragraph
    pub num: usize,
    /// `<paragraph-id>_c<num>`
    pub id: String,
    pub substrings: Vec<LineSubstring>,
}

impl Clause {
    pub fn text(&self, source: &str) -> String {
        self.substrings
            .iter()
            .map(|sub| sub.text(source))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn importance(&self, source: &str) -> Option<Importance> {
        importance::classify(&self.text(source))
    }
}

fn find_at(text: &str, pattern: &str, from: usize) -> Option<usize> {
    text[from..].find(pattern).map(|i| from + i)
}

fn rfind_between(text: &str, pattern: &str, start: usize, end: usize) -> Option<usize> {
    text[start..end].rfind(pattern).map(|i| start + i)
}

/// End offset (exclusive) of the clause starting at `start`
fn clause_end(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    let mut find_from = start;

    // Periods of an ellipsis are never boundaries
    while let Some(ellipsis) = find_at(text, "...", find_from) {
        find_from = ellipsis + 3;
    }

    loop {
        let period = find_at(text, ". ", find_from).unwrap_or(text.len());
        let paren = find_at(text, ".) ", find_from).unwrap_or(text.len());

        if paren < period {
            return paren + 2;
        }
        if period == text.len() {
            return text.len();
        }

        // "see Appendix B. " ends a sentence even though "B" is short
        if let Some(app) = rfind_between(text, APPENDIX, start, period) {
            let gap_start = app + APPENDIX.len();
            let gap_end = period - 1;
            if gap_start >= gap_end
                || bytes[gap_start..gap_end]
                    .iter()
                    .all(|b| b.is_ascii_whitespace())
            {
                return period + 1;
            }
        }

        let space = rfind_between(text, " ", start, period).unwrap_or(start);
        if period - space > 2 {
            return period + 1;
        }

        // "1. " or "L. ": keep looking
        find_from = period + 2;
    }
}

/// Map `text[start..end]` onto the lines it was joined from
fn map_to_lines(text: &str, lines: &[Line], start: usize, end: usize) -> Vec<LineSubstring> {
    let bytes = text.as_bytes();
    let mut substrings = Vec::new();
    let mut line_offset = 0;

    for line in lines {
        let mut sub_start = start.max(line_offset);
        let sub_end = end.min(line_offset + line.len());
        while sub_start < sub_end && bytes[sub_start] == b' ' {
            sub_start += 1;
        }
        if sub_start < sub_end {
            substrings.push(LineSubstring {
                line: *line,
                relative_start: sub_start - line_offset,
                relative_end: sub_end - line_offset,
            });
        }
        line_offset += line.len() + 1;
    }

    substrings
}

/// Split the lines of one paragraph into clauses
///
/// Pure function of its inputs; callers cache the result.
pub fn split_clauses(
    source: &str,
    lines: &[Line],
    paragraph_id: &str,
) -> Result<Vec<Clause>, ParseError> {
    let text = lines
        .iter()
        .map(|line| line.text(source))
        .collect::<Vec<_>>()
        .join(" ");

    let mut clauses = Vec::new();
    let mut start = 0;
    while start < text.len() {
        let end = clause_end(&text, start);
        let clause = Clause {
            num: clauses.len() + 1,
            id: format!("{}_c{}", paragraph_id, clauses.len() + 1),
            substrings: map_to_lines(&text, lines, start, end),
        };

        let clause_text = clause.text(source);
        if clause_text.trim().len() <= MIN_CLAUSE_LEN {
            let line = clause
                .substrings
                .first()
                .map(|sub| sub.line.num)
                .or_else(|| lines.first().map(|l| l.num))
                .unwrap_or(0);
            return Err(ParseError::invariant(
                line,
                format!("clause {} too short: {:?}", clause.id, clause_text),
            ));
        }

        tracing::trace!(clause = %clause.id, start, end, "clause boundary");
        clauses.push(clause);
        start = end;
    }

    Ok(clauses)
}
