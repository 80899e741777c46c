//! Glossary views over the pictogram dictionary
//!
//! Two listings: every meaning alphabetized (with a letter index), and every
//! pictogram laid out three to a row.

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

use crate::models::{Meaning, Orientation, PictogramDictionary, PictogramEntry};

/// Name of the orientation mask entry, listed apart from the pictograms
pub const ORIENT_MASK: &str = "orient";

const ROW_WIDTH: usize = 3;

/// Unique meaning groups (first occurrence per primary), sorted case-insensitively.
///
/// Orientations are always walked up, right, down, left, whatever key order
/// the dictionary JSON used; this decides which duplicate primary is kept.
pub fn meanings_alphabetized(dictionary: &PictogramDictionary) -> Vec<&Meaning> {
    let mut seen = HashSet::new();
    let mut meanings: Vec<&Meaning> = dictionary
        .entries()
        .iter()
        .flat_map(|entry| entry.orientations.iter())
        .flat_map(|(_, o)| o.meanings.iter())
        .filter(|m| seen.insert(m.primary.as_str()))
        .collect();

    meanings.sort_by_cached_key(|m| m.primary.to_lowercase());
    meanings
}

/// Lowercase first letters of all primaries, sorted
pub fn index_letters(dictionary: &PictogramDictionary) -> Vec<char> {
    meanings_alphabetized(dictionary)
        .iter()
        .filter_map(|m| m.primary.chars().next())
        .flat_map(char::to_lowercase)
        .collect::<BTreeSet<char>>()
        .into_iter()
        .collect()
}

/// First pictogram (dictionary order, then up/right/down/left) carrying `primary`
pub fn first_pictogram_for_meaning<'a>(
    dictionary: &'a PictogramDictionary,
    primary: &str,
) -> Option<(&'a str, Orientation)> {
    dictionary.entries().iter().find_map(|entry| {
        entry
            .orientations
            .iter()
            .find(|(_, o)| o.meanings.iter().any(|m| m.primary == primary))
            .map(|(orientation, _)| (entry.name.as_str(), orientation))
    })
}

/// Pictogram entries without the mask, in rows of three (last row may be short)
pub fn pictogram_rows(dictionary: &PictogramDictionary) -> Vec<Vec<&PictogramEntry>> {
    let entries: Vec<&PictogramEntry> = dictionary
        .entries()
        .iter()
        .filter(|e| e.name != ORIENT_MASK)
        .collect();
    entries.chunks(ROW_WIDTH).map(|row| row.to_vec()).collect()
}

/// One line of the alphabetized glossary, as sent to the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    pub primary: String,
    pub secondary: Vec<String>,
    pub pictogram: Option<String>,
    pub orientation: Option<Orientation>,
}

pub fn glossary_entries(dictionary: &PictogramDictionary) -> Vec<GlossaryEntry> {
    meanings_alphabetized(dictionary)
        .into_iter()
        .map(|m| {
            let found = first_pictogram_for_meaning(dictionary, &m.primary);
            GlossaryEntry {
                primary: m.primary.clone(),
                secondary: m.secondary.clone(),
                pictogram: found.map(|(name, _)| name.to_string()),
                orientation: found.map(|(_, o)| o),
            }
        })
        .collect()
}
