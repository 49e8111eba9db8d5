//! Flattened lists over already-fetched lookup entries. Order always follows
//! the response.

use super::schema::RawEntry;

/// Compound nouns (birleşik kelimeler), split on commas and trimmed.
pub fn compound_nouns(entries: &[RawEntry]) -> Vec<String> {
    entries
        .iter()
        .filter_map(RawEntry::compound_nouns)
        .flat_map(|nouns| nouns.split(','))
        .map(|noun| noun.trim().to_string())
        .collect()
}

/// Expressions and idioms attached to the entries.
pub fn expressions(entries: &[RawEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(RawEntry::idioms)
        .filter_map(|idiom| idiom.headword())
        .map(str::to_string)
        .collect()
}

pub fn meanings(entries: &[RawEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(RawEntry::meanings)
        .filter_map(|meaning| meaning.definition())
        .map(str::to_string)
        .collect()
}

/// Example sentences across every meaning.
pub fn examples(entries: &[RawEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(RawEntry::meanings)
        .flat_map(|meaning| meaning.examples())
        .map(str::to_string)
        .collect()
}
