//! Saved poem records

use serde::{Deserialize, Serialize};

use crate::models::cube::FaceId;
use crate::models::pictogram::Pictogram;

/// A poem stored in the library.
///
/// Exactly one of `is_user_poem` / `is_public` is set on a well-formed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoemRecord {
    pub id: String,
    pub serial_number: u32,
    pub pictograms: Vec<Pictogram>,
    /// Flat display text, line breaks encoded as `\n` escapes
    pub displayed_text: String,
    pub face: FaceId,
    #[serde(default)]
    pub is_user_poem: bool,
    #[serde(default)]
    pub is_public: bool,
}

impl PoemRecord {
    pub fn is_well_formed(&self) -> bool {
        self.is_user_poem != self.is_public
    }

    pub fn is_deletable(&self) -> bool {
        self.is_user_poem
    }
}
