use crate::dictionary::entry::{self, NormalizedEntry};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    word: &'a str,
    entries: &'a [NormalizedEntry],
}

/// Render `entries` for the terminal.
pub fn render_entries(
    word: &str,
    entries: &[NormalizedEntry],
    format: OutputFormat,
    colored_output: bool,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(entries, colored_output)),
        OutputFormat::Json => serde_json::to_string_pretty(&JsonOutput { word, entries }),
    }
}

fn render_text(entries: &[NormalizedEntry], colored_output: bool) -> String {
    let plain = entry::format(entries);
    if !colored_output {
        return plain;
    }

    // Every rendered line ends with '\n', so `lines()` loses nothing.
    plain
        .lines()
        .map(|line| {
            let styled = if line.starts_with("- ") {
                line.bold().to_string()
            } else if line.starts_with('\t') {
                line.dimmed().to_string()
            } else {
                line.to_string()
            };
            styled + "\n"
        })
        .collect()
}

pub fn print_suggestions(suggestions: &[String], colored_output: bool) {
    let suggestions: Vec<&str> = suggestions
        .iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();
    if suggestions.is_empty() {
        return;
    }

    if colored_output {
        let separator = ", ".dimmed().to_string();
        let joined = suggestions
            .iter()
            .map(|s| s.green().to_string())
            .collect::<Vec<_>>()
            .join(separator.as_str());
        eprintln!("{} {}", "Did you mean:".yellow().bold(), joined);
    } else {
        eprintln!("Did you mean: {}", suggestions.join(", "));
    }
}

pub fn print_downloads(paths: &[PathBuf], colored_output: bool) {
    for path in paths {
        if colored_output {
            println!("{} {}", "✓".green().bold(), path.display().to_string().cyan());
        } else {
            println!("✓ {}", path.display());
        }
    }

    if paths.is_empty() {
        if colored_output {
            println!("{}", "No pronunciations available.".yellow());
        } else {
            println!("No pronunciations available.");
        }
    }
}

pub fn print_error(message: &str, colored_output: bool) {
    if colored_output {
        eprintln!("{} {}", "✗".red().bold(), message);
    } else {
        eprintln!("{}", message);
    }
}
