//! Result formatting for text, json, jsonl and csv output

use std::io::{self, Write};

use libkaomoji::{Dataset, Kaomoji, Related};
use serde::Serialize;

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Jsonl,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Invalid format '{}'. Valid formats: text, json, jsonl, csv",
                s
            )),
        }
    }
}

/// One matching entry
#[derive(Debug, Serialize)]
pub struct EntryRecord<'a> {
    pub symbol: &'a str,
    pub category: Option<&'a str>,
    pub tags: &'a [String],
}

impl<'a> EntryRecord<'a> {
    pub fn new(dataset: &'a Dataset, entry: &'a Kaomoji) -> Self {
        Self {
            symbol: &entry.symbol,
            category: dataset.category_of(entry).map(|c| c.name.as_str()),
            tags: &entry.tags,
        }
    }
}

/// One category with its size
#[derive(Debug, Serialize)]
pub struct CategoryRecord<'a> {
    pub name: &'a str,
    pub count: usize,
}

/// The category and siblings of an entry
#[derive(Debug, Serialize)]
pub struct RelatedRecord<'a> {
    pub symbol: &'a str,
    pub category: Option<&'a str>,
    pub entries: Vec<EntryRecord<'a>>,
}

impl<'a> RelatedRecord<'a> {
    pub fn new(entry: &'a Kaomoji, related: Related<'a>) -> Self {
        Self {
            symbol: &entry.symbol,
            category: related.category_name,
            entries: related
                .entries
                .iter()
                .map(|e| EntryRecord {
                    symbol: &e.symbol,
                    category: related.category_name,
                    tags: &e.tags,
                })
                .collect(),
        }
    }
}

/// Quote a CSV field, doubling embedded quotes
pub fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

pub fn write_entries(
    out: &mut impl Write,
    entries: &[EntryRecord<'_>],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)?;
        }
        OutputFormat::Jsonl => {
            for entry in entries {
                serde_json::to_writer(&mut *out, entry)?;
                writeln!(out)?;
            }
        }
        OutputFormat::Csv => {
            writeln!(out, "symbol,category,tags")?;
            for entry in entries {
                writeln!(
                    out,
                    "{},{},{}",
                    csv_field(entry.symbol),
                    csv_field(entry.category.unwrap_or("")),
                    csv_field(&entry.tags.join(";"))
                )?;
            }
        }
        OutputFormat::Text => {
            // Empty results print nothing
            for entry in entries {
                writeln!(
                    out,
                    "{} | {} | {}",
                    entry.symbol,
                    entry.category.unwrap_or("-"),
                    entry.tags.join(", ")
                )?;
            }
        }
    }
    Ok(())
}

pub fn write_categories(
    out: &mut impl Write,
    categories: &[CategoryRecord<'_>],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, categories)?;
            writeln!(out)?;
        }
        OutputFormat::Jsonl => {
            for category in categories {
                serde_json::to_writer(&mut *out, category)?;
                writeln!(out)?;
            }
        }
        OutputFormat::Csv => {
            writeln!(out, "name,count")?;
            for category in categories {
                writeln!(out, "{},{}", csv_field(category.name), category.count)?;
            }
        }
        OutputFormat::Text => {
            for category in categories {
                writeln!(out, "{} ({})", category.name, category.count)?;
            }
        }
    }
    Ok(())
}

pub fn write_related(
    out: &mut impl Write,
    related: &RelatedRecord<'_>,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, related)?;
            writeln!(out)?;
        }
        OutputFormat::Jsonl | OutputFormat::Csv => write_entries(out, &related.entries, format)?,
        OutputFormat::Text => {
            writeln!(out, "More from {}:", related.category.unwrap_or("-"))?;
            for entry in &related.entries {
                let marker = if entry.symbol == related.symbol { "*" } else { " " };
                writeln!(out, "{} {} | {}", marker, entry.symbol, entry.tags.join(", "))?;
            }
        }
    }
    Ok(())
}
