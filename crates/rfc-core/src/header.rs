//! Front-matter parsing
//!
//! RFCs open with a two-column block: `Key: Value` pairs on the left, author
//! names and dates on the right. The block ends at the first blank line and
//! is followed by the centred document title.

use std::collections::BTreeMap;

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::lines::Line;

const RFC_NUMBER_KEY: &str = "Request for Comments";
const CATEGORY_KEY: &str = "Category";

/// Parsed header block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub fields: BTreeMap<String, String>,
    pub rfc_number: Option<u32>,
    pub category: Option<String>,
}

/// Split one header line into key and value
///
/// The value runs from the colon to the first double space, where the right
/// column starts. Returns `None` for lines without a colon.
pub fn parse_header_line(line: &str) -> Option<(&str, &str)> {
    let colon = line.find(':')?;
    let key = &line[..colon];
    let after_value = line.find("  ").unwrap_or(line.len());
    let value = if after_value > colon {
        line[colon + 1..after_value].trim()
    } else {
        ""
    };
    Some((key, value))
}

/// Index of the first non-blank line at or after `from`
pub(crate) fn skip_blank(source: &str, lines: &[Line], mut from: usize) -> usize {
    while from < lines.len() && lines[from].is_blank(source) {
        from += 1;
    }
    from
}

/// Read the header block starting at the first non-blank line
///
/// Returns the header and the index of the line that terminated it.
pub fn read_header(
    source: &str,
    lines: &[Line],
    config: &ParserConfig,
) -> Result<(Header, usize), ParseError> {
    let mut i = skip_blank(source, lines, 0);
    if i == lines.len() {
        return Err(ParseError::structural(
            lines.len(),
            "Document has no header block",
        ));
    }

    let mut header = Header::default();
    while i < lines.len() && !lines[i].is_blank(source) {
        let line = &lines[i];
        match parse_header_line(line.text(source)) {
            Some((key, value)) => {
                if key == RFC_NUMBER_KEY {
                    let number = value.parse().map_err(|_| {
                        ParseError::structural(line.num, format!("Invalid RFC number: {}", value))
                    })?;
                    header.rfc_number = Some(number);
                } else if key == CATEGORY_KEY {
                    header.category = Some(value.to_string());
                }
                header.fields.insert(key.to_string(), value.to_string());
            }
            None if config.strict_header => {
                return Err(ParseError::structural(line.num, "Expected header field"));
            }
            None => {
                tracing::trace!(line = line.num, "skipping header line without a field");
            }
        }
        i += 1;
    }

    tracing::debug!(
        rfc_number = ?header.rfc_number,
        category = ?header.category,
        fields = header.fields.len(),
        "parsed header"
    );
    Ok((header, i))
}

/// Read the document title: the first non-blank line after the header
pub fn read_title(
    source: &str,
    lines: &[Line],
    from: usize,
) -> Result<(String, usize), ParseError> {
    let i = skip_blank(source, lines, from);
    let Some(line) = lines.get(i) else {
        let message = "Expected document title";
        return Err(ParseError::structural(lines.len(), message));
    };
    Ok((line.text(source).trim().to_string(), i + 1))
}
