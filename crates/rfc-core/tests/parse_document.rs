//! End-to-end parsing of a paginated RFC excerpt
//!
//! The fixture keeps the real layout: two-column header, centred title,
//! 72-column page footers and headers separated by form feeds, and a
//! paragraph interrupted by a page break.

use pretty_assertions::assert_eq;
use rfc_core::{Document, DocumentView, Importance, ParseError, ParserConfig};

const FIXTURE: &str = include_str!("fixtures/rfc6762-excerpt.txt");
const FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/rfc6762-excerpt.txt"
);

fn parse() -> Document {
    Document::parse(FIXTURE, &ParserConfig::default()).unwrap()
}

#[test]
fn test_header_and_title() {
    let doc = parse();
    assert_eq!(doc.rfc_number, Some(6762));
    assert_eq!(doc.category.as_deref(), Some("Standards Track"));
    assert_eq!(doc.title, "Multicast DNS");
    assert_eq!(
        doc.header.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["Category", "ISSN", "Request for Comments"]
    );
}

#[test]
fn test_lines_and_pages() {
    let doc = parse();
    assert_eq!(doc.lines.len(), 84);
    assert_eq!(doc.lines.last().map(|l| l.page), Some(3));
    assert_eq!(doc.lines[38].page, 1, "form feed line keeps its page");
    assert_eq!(doc.lines[39].page, 2);
}

#[test]
fn test_sections() {
    let doc = parse();
    let summary: Vec<(&str, &str, usize)> = doc
        .sections
        .iter()
        .map(|s| (s.num.as_str(), s.name.as_str(), s.paragraphs.len()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("", "Abstract", 3),
            ("", "Status of This Memo", 1),
            ("1", "Introduction", 2),
            ("2", "Conventions and Terminology Used in This Document", 1),
            ("3", "Multicast DNS Names", 5),
            (
                "AppB",
                "Design Rationale for Choice of Multicast Address",
                1,
            ),
        ]
    );
    assert_eq!(doc.sections[0].heading, "Abstract");
    assert_eq!(doc.sections[2].heading, "1.  Introduction");
    assert_eq!(doc.sections[5].id(), "sAppB");
    assert_eq!(doc.paragraph_count(), 13);
}

#[test]
fn test_unnumbered_paragraph_text() {
    let doc = parse();
    let paragraph = &doc.sections[0].paragraphs[0];
    assert_eq!(paragraph.id, "");
    assert_eq!(
        paragraph.text(&doc.text),
        "As networked devices become smaller, more portable, and more ubiquitous, \
         the ability to operate with less configured infrastructure is increasingly important."
    );
    assert!(doc.clauses(paragraph).unwrap().is_empty());
}

#[test]
fn test_paragraph_spans_page_break() {
    let doc = parse();
    let paragraph = &doc.sections[4].paragraphs[2];
    let nums: Vec<usize> = paragraph.lines.iter().map(|l| l.num).collect();
    assert_eq!(nums, vec![60, 61, 62, 70]);

    let clauses = doc.clauses(paragraph).unwrap();
    assert_eq!(clauses.len(), 1);
    assert_eq!(clauses[0].substrings.len(), 4);
    assert_eq!(clauses[0].substrings[3].line.page, 3);
}

#[test]
fn test_requirement_paragraph_clauses() {
    let doc = parse();
    let section = &doc.sections[4];
    assert_eq!(section.num, "3");
    assert_eq!(section.name, "Multicast DNS Names");

    let paragraph = &section.paragraphs[3];
    assert_eq!(paragraph.num, 4);
    assert_eq!(paragraph.id, "s3_p4");
    assert_eq!(paragraph.importance(&doc.text), Some(Importance::Must));

    let clauses = doc.clauses(paragraph).unwrap();
    assert_eq!(clauses.len(), 2);

    assert_eq!(clauses[0].num, 1);
    assert_eq!(clauses[0].id, "s3_p4_c1");
    assert_eq!(clauses[0].importance(&doc.text), Some(Importance::Must));
    assert_eq!(
        doc.clause_text(&clauses[0]),
        "Any DNS query for a name ending with \".local.\" MUST be sent to the mDNS IPv4 \
         link-local multicast address 224.0.0.251 (or its IPv6 equivalent FF02::FB)."
    );
    assert_eq!(clauses[0].substrings[0].start(), 2687);

    assert_eq!(clauses[1].num, 2);
    assert_eq!(clauses[1].importance(&doc.text), None);
    assert_eq!(
        doc.clause_text(&clauses[1]),
        "The design rationale for using a fixed multicast address instead of selecting \
         from a range of multicast addresses using a hash function is discussed in Appendix B."
    );
    let first = clauses[1].substrings[0];
    assert_eq!(
        (first.line.num, first.relative_start, first.relative_end),
        (74, 26, 64)
    );
}

#[test]
fn test_abbreviations_do_not_split() {
    let doc = parse();
    let intro = doc.clauses(&doc.sections[2].paragraphs[1]).unwrap();
    let texts: Vec<String> = intro.iter().map(|c| doc.clause_text(c)).collect();
    assert_eq!(
        texts,
        vec![
            "Multicast DNS is related to work by L. Esibov, B. Aboba, and D. Thaler.",
            "That work is discussed in Appendix E.",
        ]
    );

    let steps = doc.clauses(&doc.sections[4].paragraphs[4]).unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(
        doc.clause_text(&steps[0]),
        "Implementers SHOULD consult the following steps: 1. probe, 2. announce."
    );
    assert_eq!(steps[1].importance(&doc.text), Some(Importance::May));
}

#[test]
fn test_terminology_section_is_unclassified() {
    let doc = parse();
    let paragraph = &doc.sections[3].paragraphs[0];
    assert_eq!(paragraph.importance(&doc.text), None);
    assert_eq!(
        doc.clauses(paragraph).unwrap()[0].importance(&doc.text),
        None
    );
}

#[test]
fn test_importance_summary() {
    let doc = parse();
    assert_eq!(doc.derive_all_clauses().unwrap(), 13);
    let summary = doc.summary().unwrap();
    assert_eq!(summary.count(Importance::Must), 1);
    assert_eq!(summary.count(Importance::Should), 1);
    assert_eq!(summary.count(Importance::May), 1);
    assert_eq!(summary.unclassified, 10);
    assert_eq!(summary.total(), 13);
}

#[test]
fn test_from_path_attaches_hash() {
    let doc = Document::from_path(FIXTURE_PATH, &ParserConfig::default()).unwrap();
    assert_eq!(
        doc.hash.as_deref(),
        Some("81a776c644a9d362c1a8c39d330a070d46d474deb8107efd97e5be056868ceff")
    );
    assert_eq!(doc.sections, parse().sections);
}

#[test]
fn test_view_round_trips_offsets() {
    let doc = parse();
    let view = DocumentView::build(&doc).unwrap();
    for section in &view.sections {
        for paragraph in &section.paragraphs {
            for clause in &paragraph.clauses {
                for sub in &clause.substrings {
                    assert_eq!(&FIXTURE[sub.start..sub.end], sub.text);
                }
            }
            for line in &paragraph.lines {
                assert_eq!(&FIXTURE[line.start..line.end], line.text);
            }
        }
    }
}

#[test]
fn test_strict_header_rejects_fixture() {
    let config = ParserConfig::default().with_strict_header(true);
    let err = Document::parse(FIXTURE, &config).unwrap_err();
    assert!(matches!(err, ParseError::Structural { line: 1, .. }));
}

#[test]
fn test_title_drift_is_invariant_violation() {
    let title_line = "                             Multicast DNS\n";
    let drifted = FIXTURE.replacen(title_line, "Unicast DNS\n", 1);
    let err = Document::parse(drifted, &ParserConfig::default()).unwrap_err();
    assert!(matches!(err, ParseError::Invariant { line: 40, .. }));
}
