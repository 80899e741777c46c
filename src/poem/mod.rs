//! Poem engines
//!
//! - `derive`: pictogram sequence → primary words, canonical poems of solved faces
//! - `restore`: flat display text → tagged tokens

pub mod derive;
pub mod restore;

pub use derive::{
    canonical_poem, canonical_poem_string, derive_from_pictograms, is_solved_sequence, poem_string_from_pictograms,
};
pub use restore::reconstruct;
