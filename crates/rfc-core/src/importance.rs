//! RFC 2119 requirement levels
//!
//! Classification is plain case-sensitive substring search. "NOT" does not
//! change the level: "MUST NOT" is still a `must`.

use serde::Serialize;

/// The terminology section quotes every keyword; it defines them, it does
/// not use them.
const TERMINOLOGY_MARKER: &str = "\"MUST\"";

pub const MUST_KEYWORDS: &[&str] = &["MUST", "SHALL", "REQUIRED"];
pub const SHOULD_KEYWORDS: &[&str] = &["SHOULD", "RECOMMENDED"];
pub const MAY_KEYWORDS: &[&str] = &["MAY", "OPTIONAL"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Must,
    Should,
    May,
}

impl Importance {
    pub const ALL: [Importance; 3] = [Importance::Must, Importance::Should, Importance::May];

    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Must => "must",
            Importance::Should => "should",
            Importance::May => "may",
        }
    }

    /// Keywords that select this level, for display
    pub fn heading(&self) -> &'static str {
        match self {
            Importance::Must => "MUST, SHALL",
            Importance::Should => "SHOULD, RECOMMENDED",
            Importance::May => "MAY, OPTIONAL",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Importance::Must => MUST_KEYWORDS,
            Importance::Should => SHOULD_KEYWORDS,
            Importance::May => MAY_KEYWORDS,
        }
    }
}

impl std::fmt::Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a paragraph or clause by the strongest keyword it contains
pub fn classify(text: &str) -> Option<Importance> {
    if text.contains(TERMINOLOGY_MARKER) {
        return None;
    }
    Importance::ALL
        .into_iter()
        .find(|level| level.keywords().iter().any(|kw| text.contains(kw)))
}
