//! Stateless poem and cube functions
//!
//! These work on values passed in from JavaScript and never touch the
//! app state held in `core`.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, parse_arg, serialize};
use crate::data::dictionary;
use crate::geometry;
use crate::glossary;
use crate::models::{flatten, Arrow, FaceId, Pictogram, PoemText, ReadOrder, WordToken};
use crate::poem;
use crate::wasm_log;

/// Primary word tokens for a pictogram sequence
#[wasm_bindgen(js_name = deriveFromPictograms)]
pub fn derive_poem(pictograms_js: JsValue) -> Result<JsValue, JsValue> {
    let pictograms: Vec<Pictogram> = deserialize(pictograms_js, "Pictogram sequence deserialization error")?;
    wasm_log!("deriveFromPictograms: {} pictograms", pictograms.len());
    serialize(&poem::derive_from_pictograms(dictionary(), &pictograms), "Word serialization error")
}

/// Hand-authored poem of a solved face
#[wasm_bindgen(js_name = canonicalPoem)]
pub fn canonical_poem_words(face: &str) -> Result<JsValue, JsValue> {
    let face: FaceId = parse_arg(face)?;
    serialize(&poem::canonical_poem(face), "Word serialization error")
}

/// Tagged tokens for flat text (or a token list) shown over a pictogram sequence
#[wasm_bindgen(js_name = reconstructPoem)]
pub fn reconstruct_poem(pictograms_js: JsValue, text_js: JsValue) -> Result<JsValue, JsValue> {
    let pictograms: Vec<Pictogram> = deserialize(pictograms_js, "Pictogram sequence deserialization error")?;
    let text: PoemText = deserialize(text_js, "Poem text deserialization error")?;
    serialize(&poem::reconstruct(dictionary(), &pictograms, &text), "Word serialization error")
}

/// Grid cell for each sequence position under a reading order `{corner, direction}`
#[wasm_bindgen(js_name = layoutIndexes)]
pub fn layout_indexes(read_order_js: JsValue) -> Result<JsValue, JsValue> {
    let order: ReadOrder = deserialize(read_order_js, "Read order deserialization error")?;
    serialize(
        &geometry::layout_indexes(order.corner, order.direction),
        "Layout serialization error",
    )
}

/// Face reached from `face` by the rotation `arrow`
#[wasm_bindgen(js_name = rotateFace)]
pub fn rotate_face(face: &str, arrow: &str) -> Result<String, JsValue> {
    let face: FaceId = parse_arg(face)?;
    let arrow: Arrow = parse_arg(arrow)?;
    Ok(geometry::rotate(face, arrow).to_string())
}

/// Flat display text for a token list
#[wasm_bindgen(js_name = flattenPoem)]
pub fn flatten_poem(words_js: JsValue) -> Result<String, JsValue> {
    let words: Vec<WordToken> = deserialize(words_js, "Word deserialization error")?;
    Ok(flatten(&words))
}

/// Alphabetized glossary with the letter index
#[wasm_bindgen(js_name = glossaryMeanings)]
pub fn glossary_meanings() -> Result<JsValue, JsValue> {
    #[derive(serde::Serialize)]
    struct Glossary {
        letters: Vec<String>,
        entries: Vec<glossary::GlossaryEntry>,
    }

    let dict = dictionary();
    let result = Glossary {
        letters: glossary::index_letters(dict).into_iter().map(String::from).collect(),
        entries: glossary::glossary_entries(dict),
    };
    serialize(&result, "Glossary serialization error")
}

/// Pictogram glossary, three entries per row
#[wasm_bindgen(js_name = glossaryPictograms)]
pub fn glossary_pictograms() -> Result<JsValue, JsValue> {
    serialize(&glossary::pictogram_rows(dictionary()), "Glossary serialization error")
}
