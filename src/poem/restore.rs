//! Poem reconstruction: flat display text → tagged word tokens
//!
//! Saved and displayed poems travel as flat text, so the editor has to work
//! out which tokens are pictogram words and which were inserted. There is no
//! edit log; each token is classified on its own:
//!
//! - line break escape, punctuation mark or connector word → inserted
//! - otherwise primary only if it equals a primary meaning of the pictogram at
//!   the token's own position in the sequence
//!
//! The position used is the token's index among ALL tokens, not among primary
//! tokens, so any insertion shifts every later lookup. Text such as
//! `"who \n walks"` therefore tags `walks` as inserted. Callers relying on
//! exact tagging should keep structured tokens (`PoemText::Tokens`), which
//! pass through untouched.

use crate::models::word::{is_line_break, is_mortar, is_punctuation, split_tokens, WordToken, LINE_BREAK};
use crate::models::{Pictogram, PictogramDictionary, PoemText};

/// Rebuild tagged tokens for `text` as displayed over `pictograms`
pub fn reconstruct(dictionary: &PictogramDictionary, pictograms: &[Pictogram], text: &PoemText) -> Vec<WordToken> {
    match text {
        PoemText::Tokens(tokens) => tokens.clone(),
        PoemText::Flat(flat) => reconstruct_flat(dictionary, pictograms, flat),
    }
}

fn reconstruct_flat(dictionary: &PictogramDictionary, pictograms: &[Pictogram], text: &str) -> Vec<WordToken> {
    if text.is_empty() {
        return Vec::new();
    }

    split_tokens(text)
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            let line_break = is_line_break(word);
            let primary = is_primary_for_index(dictionary, pictograms, i, word);
            let inserted = line_break || is_punctuation(word) || is_mortar(word) || !primary;

            WordToken {
                text: if line_break { LINE_BREAK.to_string() } else { word.to_string() },
                inserted,
            }
        })
        .collect()
}

fn is_primary_for_index(dictionary: &PictogramDictionary, pictograms: &[Pictogram], index: usize, word: &str) -> bool {
    pictograms
        .get(index)
        .map(|picto| dictionary.is_primary(picto, word))
        .unwrap_or(false)
}
