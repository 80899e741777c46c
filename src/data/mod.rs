//! Static reference data compiled into the module
//!
//! - `pictograms.json`: the pictogram dictionary
//! - `solved_cube.json`: the six faces of the solved cube
//! - `public_poems.json`: the public poem collection
//!
//! Each table is parsed once on first use and never mutated.

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

use crate::models::{Face, PictogramDictionary, PoemRecord};

const PICTOGRAMS_JSON: &str = include_str!("pictograms.json");
const SOLVED_CUBE_JSON: &str = include_str!("solved_cube.json");
const PUBLIC_POEMS_JSON: &str = include_str!("public_poems.json");

static DICTIONARY: Lazy<PictogramDictionary> =
    Lazy::new(|| PictogramDictionary::new(parse_table(PICTOGRAMS_JSON, "pictogram dictionary")));

static SOLVED_FACES: Lazy<Vec<Face>> = Lazy::new(|| parse_table(SOLVED_CUBE_JSON, "solved cube"));

static PUBLIC_POEMS: Lazy<Vec<PoemRecord>> = Lazy::new(|| parse_table(PUBLIC_POEMS_JSON, "public poems"));

fn parse_table<T: DeserializeOwned>(json: &str, what: &str) -> Vec<T> {
    serde_json::from_str(json).unwrap_or_else(|e| {
        log::error!("Failed to parse {} table: {}", what, e);
        Vec::new()
    })
}

pub fn dictionary() -> &'static PictogramDictionary {
    &DICTIONARY
}

pub fn solved_faces() -> &'static [Face] {
    &SOLVED_FACES
}

pub fn public_poems() -> &'static [PoemRecord] {
    &PUBLIC_POEMS
}
