//! Serializable view of a parsed document
//!
//! Every node carries its stable id and every leaf its absolute byte range,
//! so downstream serializers and cross-reference tools can address any
//! clause or line without re-parsing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::document::Document;
use crate::error::ParseError;
use crate::importance::Importance;
use crate::structure::{Paragraph, Section};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentView {
    pub number: Option<u32>,
    pub title: String,
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    pub header: BTreeMap<String, String>,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub num: String,
    pub name: String,
    pub heading: String,
    pub paragraphs: Vec<ParagraphView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParagraphView {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub num: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<Importance>,
    /// Present for paragraphs of numbered sections
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clauses: Vec<ClauseView>,
    /// Present for paragraphs that are not split into clauses
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<LineView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClauseView {
    pub id: String,
    pub num: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<Importance>,
    pub substrings: Vec<SubstringView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstringView {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineView {
    pub id: String,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl DocumentView {
    /// Build the view, deriving clauses for every paragraph
    pub fn build(doc: &Document) -> Result<Self, ParseError> {
        let sections = doc
            .sections
            .iter()
            .map(|section| section_view(doc, section))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            number: doc.rfc_number,
            title: doc.title.clone(),
            category: doc.category.clone(),
            hash: doc.hash.clone(),
            header: doc.header.clone(),
            sections,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn section_view(doc: &Document, section: &Section) -> Result<SectionView, ParseError> {
    let paragraphs = section
        .paragraphs
        .iter()
        .map(|paragraph| paragraph_view(doc, paragraph))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SectionView {
        id: section.id(),
        num: section.num.clone(),
        name: section.name.clone(),
        heading: section.heading.clone(),
        paragraphs,
    })
}

fn paragraph_view(doc: &Document, paragraph: &Paragraph) -> Result<ParagraphView, ParseError> {
    let clauses: Vec<ClauseView> = doc
        .clauses(paragraph)?
        .iter()
        .map(|clause| ClauseView {
            id: clause.id.clone(),
            num: clause.num,
            importance: clause.importance(&doc.text),
            substrings: clause
                .substrings
                .iter()
                .map(|sub| SubstringView {
                    start: sub.start(),
                    end: sub.end(),
                    text: sub.text(&doc.text).to_string(),
                })
                .collect(),
        })
        .collect();

    let lines = if clauses.is_empty() {
        paragraph
            .lines
            .iter()
            .map(|line| LineView {
                id: line.id(),
                start: line.start,
                end: line.end,
                text: doc.line_text(line).to_string(),
            })
            .collect()
    } else {
        Vec::new()
    };

    Ok(ParagraphView {
        id: paragraph.id.clone(),
        num: paragraph.num,
        importance: paragraph.importance(&doc.text),
        clauses,
        lines,
    })
}
