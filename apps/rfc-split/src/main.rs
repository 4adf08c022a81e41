//! RFC clause splitter
//!
//! Parses a plain-text RFC and prints its section outline, or writes the
//! full clause tree as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rfc_core::{Document, DocumentView, Importance, ParserConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "rfc-split")]
#[command(version, about = "Split an IETF RFC into clauses")]
struct Args {
    /// Path to the input RFC document in plain text format
    #[arg(value_name = "rfcNNNN.txt")]
    input: PathBuf,

    /// Write the clause tree as JSON to this path ("-" for stdout)
    #[arg(long, value_name = "PATH")]
    json: Option<String>,

    /// List every clause with its requirement level
    #[arg(long)]
    clauses: bool,

    /// Reject header lines that are not "Key: Value" pairs
    #[arg(long)]
    strict_header: bool,

    /// Width of page header and footer lines
    #[arg(long)]
    page_width: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout may carry JSON; logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ParserConfig::from_env()?;
    if args.strict_header {
        config = config.with_strict_header(true);
    }
    if let Some(width) = args.page_width {
        config = config.with_page_width(width);
    }

    let doc = Document::from_path(&args.input, &config)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;
    tracing::info!(
        rfc = ?doc.rfc_number,
        sections = doc.sections.len(),
        hash = doc.hash.as_deref().unwrap_or(""),
        "parsed {}",
        args.input.display()
    );

    if let Some(target) = &args.json {
        let view = DocumentView::build(&doc)?;
        let json = view.to_json_pretty()?;
        if target == "-" {
            println!("{}", json);
        } else {
            std::fs::write(target, json).with_context(|| format!("Failed to write {}", target))?;
            tracing::info!("wrote {}", target);
        }
        return Ok(());
    }

    print_outline(&doc, args.clauses)
}

fn print_outline(doc: &Document, list_clauses: bool) -> Result<()> {
    match doc.rfc_number {
        Some(number) => println!("RFC {}: {}", number, doc.title),
        None => println!("{}", doc.title),
    }
    if let Some(category) = &doc.category {
        println!("Category: {}", category);
    }
    println!();

    for section in &doc.sections {
        let mut clause_count = 0;
        for paragraph in &section.paragraphs {
            clause_count += doc.clauses(paragraph)?.len();
        }
        let label = if section.num.is_empty() {
            "-".to_string()
        } else {
            section.num.clone()
        };
        println!(
            "{:>8}  {:<48} {:>3} paragraphs {:>4} clauses",
            label,
            truncate(&section.name, 48),
            section.paragraphs.len(),
            clause_count
        );

        if list_clauses {
            for paragraph in &section.paragraphs {
                for clause in doc.clauses(paragraph)? {
                    let level = clause
                        .importance(&doc.text)
                        .map(|i| i.as_str())
                        .unwrap_or("");
                    println!("          {:<16} {}", clause.id, level);
                }
            }
        }
    }

    let summary = doc.summary()?;
    println!();
    for level in Importance::ALL {
        println!("{:<20} {:>5}", level.heading(), summary.count(level));
    }
    println!("{:<20} {:>5}", "(none)", summary.unclassified);
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 3).collect();
        format!("{}...", truncated)
    }
}
