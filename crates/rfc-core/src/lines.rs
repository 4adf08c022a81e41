//! Line indexing
//!
//! Splits raw document text into offset-addressed lines and tracks the page
//! each line sits on. Pages are separated by form feeds; the line holding the
//! form feed still belongs to the page it ends.

const FORM_FEED: char = '\x0c';

/// A source line, addressed by byte offsets into the document text
///
/// Lines never own their text. Resolve it through the text they were
/// indexed from (see [`crate::Document::line_text`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// 1-based sequence number
    pub num: usize,
    /// Absolute byte offset of the first character
    pub start: usize,
    /// Absolute byte offset one past the last character, excluding the newline
    pub end: usize,
    /// 1-based page number
    pub page: usize,
}

impl Line {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_blank(&self, source: &str) -> bool {
        self.text(source).trim().is_empty()
    }

    /// Stable identifier, `L<num>`
    pub fn id(&self) -> String {
        format!("L{}", self.num)
    }
}

/// Split text into lines
///
/// A trailing newline does not produce an empty final line.
pub fn split_lines(text: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut page = 1;

    while line_start < text.len() {
        let line_end = text[line_start..]
            .find('\n')
            .map(|i| line_start + i)
            .unwrap_or(text.len());

        let line = Line {
            num: lines.len() + 1,
            start: line_start,
            end: line_end,
            page,
        };
        if text[line_start..line_end].contains(FORM_FEED) {
            page += 1;
        }
        lines.push(line);

        line_start = line_end + 1;
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_lines_offsets() {
        let text = "ab\n\ncde";
        let lines = split_lines(text);
        assert_eq!(
            lines,
            vec![
                Line {
                    num: 1,
                    start: 0,
                    end: 2,
                    page: 1,
                },
                Line {
                    num: 2,
                    start: 3,
                    end: 3,
                    page: 1,
                },
                Line {
                    num: 3,
                    start: 4,
                    end: 7,
                    page: 1,
                },
            ]
        );
        assert_eq!(lines[2].text(text), "cde");
        assert!(lines[1].is_blank(text));
        assert!(lines[1].is_empty());
    }

    #[test]
    fn test_trailing_newline_is_not_a_line() {
        let lines = split_lines("one\ntwo\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].end, 7);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_form_feed_advances_following_lines() {
        let text = "page one\n\x0c\npage two\nstill two\x0c\nthree";
        let pages: Vec<usize> = split_lines(text).iter().map(|l| l.page).collect();
        assert_eq!(pages, vec![1, 1, 2, 2, 3]);
    }

    #[test]
    fn test_line_id_and_len() {
        let line = Line {
            num: 42,
            start: 10,
            end: 17,
            page: 1,
        };
        assert_eq!(line.id(), "L42");
        assert_eq!(line.len(), 7);
    }
}
