//! Pictograms and the pictogram dictionary
//!
//! A pictogram is a named symbol placed on a cube cell in one of four
//! orientations. The dictionary maps every (name, orientation) pair to an
//! ordered list of meaning groups; the first group's primary word is the
//! word a pictogram "reads as" when a poem is derived.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Rotation of a pictogram on its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Up,
    Right,
    Down,
    Left,
}

impl Orientation {
    /// All orientations in clockwise order starting from `Up`
    pub const ALL: [Orientation; 4] = [
        Orientation::Up,
        Orientation::Right,
        Orientation::Down,
        Orientation::Left,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Up => "up",
            Orientation::Right => "right",
            Orientation::Down => "down",
            Orientation::Left => "left",
        }
    }

    /// Clockwise rotation applied when drawing the pictogram
    pub fn degrees(&self) -> u16 {
        match self {
            Orientation::Up => 0,
            Orientation::Right => 90,
            Orientation::Down => 180,
            Orientation::Left => 270,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Orientation::Up),
            "right" => Ok(Orientation::Right),
            "down" => Ok(Orientation::Down),
            "left" => Ok(Orientation::Left),
            _ => Err(format!("Unknown orientation: '{}'", s)),
        }
    }
}

/// One placed pictogram: a name plus its rotation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pictogram {
    pub name: String,
    pub orientation: Orientation,
}

impl Pictogram {
    pub fn new(name: impl Into<String>, orientation: Orientation) -> Self {
        Self {
            name: name.into(),
            orientation,
        }
    }

    /// Placeholder text used when the dictionary has nothing for this pictogram
    pub fn placeholder(&self) -> String {
        format!("[{}-{}]", self.name, self.orientation)
    }
}

/// A meaning group: one primary word and its alternates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    pub primary: String,
    #[serde(default)]
    pub secondary: Vec<String>,
}

impl Meaning {
    /// Primary word followed by every secondary word
    pub fn words(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.secondary.iter().map(|s| s.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationMeanings {
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// Meanings for each of the four orientations (any may be absent)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orientations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up: Option<OrientationMeanings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<OrientationMeanings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down: Option<OrientationMeanings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<OrientationMeanings>,
}

impl Orientations {
    pub fn get(&self, orientation: Orientation) -> Option<&OrientationMeanings> {
        match orientation {
            Orientation::Up => self.up.as_ref(),
            Orientation::Right => self.right.as_ref(),
            Orientation::Down => self.down.as_ref(),
            Orientation::Left => self.left.as_ref(),
        }
    }

    /// Iterate present orientations in up/right/down/left order
    pub fn iter(&self) -> impl Iterator<Item = (Orientation, &OrientationMeanings)> {
        Orientation::ALL
            .into_iter()
            .filter_map(move |o| self.get(o).map(|m| (o, m)))
    }
}

/// Dictionary record for one pictogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictogramEntry {
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub orientations: Orientations,
}

impl PictogramEntry {
    pub fn meanings(&self, orientation: Orientation) -> &[Meaning] {
        self.orientations
            .get(orientation)
            .map(|o| o.meanings.as_slice())
            .unwrap_or(&[])
    }
}

/// Read-only lookup table of every pictogram
#[derive(Debug, Clone, Default)]
pub struct PictogramDictionary {
    entries: Vec<PictogramEntry>,
    by_name: HashMap<String, usize>,
}

impl PictogramDictionary {
    /// Build a dictionary; when a name repeats, the first entry wins
    pub fn new(entries: Vec<PictogramEntry>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            by_name.entry(entry.name.clone()).or_insert(i);
        }
        Self { entries, by_name }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<PictogramEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[PictogramEntry] {
        &self.entries
    }

    pub fn entry(&self, name: &str) -> Option<&PictogramEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Meaning groups registered for a placed pictogram (empty when unknown)
    pub fn meanings(&self, pictogram: &Pictogram) -> &[Meaning] {
        self.entry(&pictogram.name)
            .map(|e| e.meanings(pictogram.orientation))
            .unwrap_or(&[])
    }

    /// First meaning group's primary word, if any
    pub fn primary(&self, pictogram: &Pictogram) -> Option<&str> {
        self.meanings(pictogram).first().map(|m| m.primary.as_str())
    }

    /// True when `word` equals the primary of one of the pictogram's meaning groups
    pub fn is_primary(&self, pictogram: &Pictogram, word: &str) -> bool {
        self.meanings(pictogram).iter().any(|m| m.primary == word)
    }

    /// Every primary and secondary word, group by group
    pub fn all_words(&self, pictogram: &Pictogram) -> Vec<String> {
        self.meanings(pictogram)
            .iter()
            .flat_map(|m| m.words())
            .map(|w| w.to_string())
            .collect()
    }
}
