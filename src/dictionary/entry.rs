use super::schema::RawEntry;
use serde::Serialize;
use std::fmt::{self, Write};

/// One numbered sense of a headword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedDefinition {
    pub text: String,
    pub examples: Vec<String>,
    pub properties: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedEntry {
    pub headword: String,
    pub definitions: Vec<NormalizedDefinition>,
}

impl NormalizedEntry {
    /// Build the entry for `raw`, or `None` when it carries no meanings.
    pub fn from_raw(raw: &RawEntry) -> Option<Self> {
        let meanings = raw.meanings();
        if meanings.is_empty() {
            return None;
        }

        let definitions = meanings
            .iter()
            .filter_map(|meaning| {
                Some(NormalizedDefinition {
                    text: meaning.definition()?.to_string(),
                    examples: meaning.examples().map(str::to_string).collect(),
                    properties: meaning.properties().map(str::to_string).collect(),
                })
            })
            .collect();

        Some(Self {
            headword: raw.headword().to_string(),
            definitions,
        })
    }

    /// Render this entry as a dictionary block. `index` is appended after the
    /// headword to tell homographs apart.
    pub fn formatted(&self, index: Option<usize>) -> String {
        let mut out = String::new();
        // Writing into a String never fails.
        let _ = self.write_block(&mut out, index);
        out
    }

    fn write_block(&self, out: &mut impl Write, index: Option<usize>) -> fmt::Result {
        write!(out, "- {} ", self.headword)?;
        match index {
            Some(i) => writeln!(out, "({})", i)?,
            None => writeln!(out)?,
        }

        for (k, definition) in self.definitions.iter().enumerate() {
            write!(out, "{:2}. ", k + 1)?;
            if !definition.properties.is_empty() {
                write!(out, "[{}] ", definition.properties.join(", "))?;
            }
            writeln!(out, "{}", definition.text)?;

            for example in &definition.examples {
                writeln!(out, "\t\"{}\"", example)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for NormalizedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_block(f, None)
    }
}

/// Normalize every entry that has meanings, preserving order.
pub fn normalize(raw: &[RawEntry]) -> Vec<NormalizedEntry> {
    raw.iter().filter_map(NormalizedEntry::from_raw).collect()
}

/// Render entries the way a dictionary page lists them.
///
/// A single entry is printed without an index. Several entries are numbered
/// from 1 and each block is followed by a blank line.
pub fn format(entries: &[NormalizedEntry]) -> String {
    match entries {
        [only] => only.formatted(None),
        _ => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| entry.formatted(Some(i + 1)) + "\n")
            .collect(),
    }
}
