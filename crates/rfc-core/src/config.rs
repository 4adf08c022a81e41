//! Parser configuration
//!
//! Layout parameters that the plain-text IETF convention fixes, plus the
//! header strictness switch.

use crate::error::ParseError;

/// Width of running page headers and footers in IETF plain text
pub const DEFAULT_PAGE_WIDTH: usize = 72;

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Exact length of page header/footer artifact lines
    pub page_width: usize,
    /// Reject header lines that carry no `Key: Value` pair
    pub strict_header: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            page_width: DEFAULT_PAGE_WIDTH,
            strict_header: false,
        }
    }
}

impl ParserConfig {
    pub fn with_page_width(mut self, page_width: usize) -> Self {
        self.page_width = page_width;
        self
    }

    pub fn with_strict_header(mut self, strict_header: bool) -> Self {
        self.strict_header = strict_header;
        self
    }

    /// Load configuration from environment variables
    ///
    /// Expected variables:
    /// - RFC_PAGE_WIDTH: artifact line width (default: 72)
    /// - RFC_STRICT_HEADER: "1"/"true" or "0"/"false" (default: false)
    pub fn from_env() -> Result<Self, ParseError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ParseError> {
        let mut config = Self::default();

        if let Some(width) = lookup("RFC_PAGE_WIDTH") {
            config.page_width = width
                .trim()
                .parse()
                .map_err(|_| ParseError::Config(format!("RFC_PAGE_WIDTH: {}", width)))?;
            if config.page_width == 0 {
                return Err(ParseError::Config("RFC_PAGE_WIDTH must be > 0".into()));
            }
        }

        if let Some(strict) = lookup("RFC_STRICT_HEADER") {
            config.strict_header = match strict.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => {
                    let message = format!("RFC_STRICT_HEADER: {}", strict);
                    return Err(ParseError::Config(message));
                }
            };
        }

        Ok(config)
    }
}
