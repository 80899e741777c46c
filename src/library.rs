//! Poem library: public poems plus the user's saved poems
//!
//! Every record carries a serial number. New records take the next serial
//! after both the highest one in the collection and the last serial handed
//! out, so serials never repeat even after deletions. Re-saving a poem keeps
//! its id and serial.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::errors::LibraryError;
use crate::models::{FaceId, Pictogram, PoemRecord};

/// Which poems a listing shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryFilter {
    #[default]
    User,
    All,
}

/// Build a user poem record.
///
/// With `existing_id` found in `library` the record keeps that poem's serial;
/// otherwise (unknown id, or no id and a fresh one is minted) it gets
/// `max(highest serial in library, last_serial) + 1`.
pub fn make_poem(
    pictograms: Vec<Pictogram>,
    displayed_text: String,
    library: &Library,
    existing_id: Option<&str>,
    face: FaceId,
    last_serial: u32,
) -> PoemRecord {
    let next_serial = || library.max_serial().max(last_serial) + 1;

    let (id, serial_number) = match existing_id {
        Some(id) => match library.get(id) {
            Some(existing) => (id.to_string(), existing.serial_number),
            None => (id.to_string(), next_serial()),
        },
        None => (Uuid::new_v4().to_string(), next_serial()),
    };

    PoemRecord {
        id,
        serial_number,
        pictograms,
        displayed_text,
        face,
        is_user_poem: true,
        is_public: false,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    poems: HashMap<String, PoemRecord>,
    last_serial: u32,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library seeded with public poems; user serials start above them and above `serial_floor`
    pub fn from_public(records: impl IntoIterator<Item = PoemRecord>, serial_floor: u32) -> Self {
        let poems: HashMap<String, PoemRecord> = records
            .into_iter()
            .map(|mut poem| {
                poem.is_public = true;
                poem.is_user_poem = false;
                (poem.id.clone(), poem)
            })
            .collect();
        let max_public = poems.values().map(|p| p.serial_number).max().unwrap_or(0);

        Self {
            poems,
            last_serial: max_public.max(serial_floor),
        }
    }

    /// Library seeded with the bundled public poem collection
    pub fn with_public_poems(serial_floor: u32) -> Self {
        Self::from_public(crate::data::public_poems().iter().cloned(), serial_floor)
    }

    pub fn get(&self, id: &str) -> Option<&PoemRecord> {
        self.poems.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.poems.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.poems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poems.is_empty()
    }

    pub fn last_serial(&self) -> u32 {
        self.last_serial
    }

    /// Highest serial in the collection (0 when empty)
    pub fn max_serial(&self) -> u32 {
        self.poems.values().map(|p| p.serial_number).max().unwrap_or(0)
    }

    /// Save a poem, replacing the record with `existing_id` in place.
    ///
    /// A public poem is never overwritten: saving over one stores a new user
    /// poem instead.
    pub fn save(&mut self, pictograms: Vec<Pictogram>, text: String, existing_id: Option<&str>, face: FaceId) -> PoemRecord {
        let existing_id = existing_id.filter(|id| match self.get(id) {
            Some(poem) if poem.is_public => {
                log::info!("Poem {} is public, saving a new user poem instead", id);
                false
            }
            _ => true,
        });

        let record = make_poem(pictograms, text, self, existing_id, face, self.last_serial);
        self.store(record)
    }

    /// Save as a new poem with a fresh id, leaving any original untouched
    pub fn save_a_copy(&mut self, pictograms: Vec<Pictogram>, text: String, face: FaceId) -> PoemRecord {
        let record = make_poem(pictograms, text, self, None, face, self.last_serial);
        self.store(record)
    }

    fn store(&mut self, record: PoemRecord) -> PoemRecord {
        self.last_serial = self.last_serial.max(record.serial_number);
        log::debug!("Stored poem {} as #{}", record.id, record.serial_number);
        self.poems.insert(record.id.clone(), record.clone());
        record
    }

    /// Delete a user poem; public and unknown poems are rejected and left in place
    pub fn delete(&mut self, id: &str) -> Result<PoemRecord, LibraryError> {
        match self.poems.get(id) {
            Some(poem) if poem.is_deletable() => self
                .poems
                .remove(id)
                .ok_or_else(|| LibraryError::NotFound(id.to_string())),
            Some(_) => {
                log::warn!("Attempted to delete public poem {}, deletion aborted", id);
                Err(LibraryError::PublicPoem(id.to_string()))
            }
            None => {
                log::warn!("Poem not found or not deletable: {}", id);
                Err(LibraryError::NotFound(id.to_string()))
            }
        }
    }

    /// Poems matching `filter`, by serial number
    pub fn list(&self, filter: LibraryFilter) -> Vec<&PoemRecord> {
        let mut poems: Vec<&PoemRecord> = self
            .poems
            .values()
            .filter(|p| filter == LibraryFilter::All || p.is_user_poem)
            .collect();
        poems.sort_by(|a, b| a.serial_number.cmp(&b.serial_number).then_with(|| a.id.cmp(&b.id)));
        poems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Orientation;

    fn public(id: &str, serial: u32) -> PoemRecord {
        PoemRecord {
            id: id.to_string(),
            serial_number: serial,
            pictograms: vec![Pictogram::new("nape", Orientation::Up)],
            displayed_text: "who".to_string(),
            face: FaceId::Front,
            is_user_poem: true,
            is_public: false,
        }
    }

    #[test]
    fn test_from_public_forces_flags() {
        let lib = Library::from_public(vec![public("a", 4), public("b", 9)], 0);
        assert!(lib.list(LibraryFilter::All).iter().all(|p| p.is_public && !p.is_user_poem));
        assert!(lib.list(LibraryFilter::User).is_empty());
        assert_eq!(lib.last_serial(), 9);
    }

    #[test]
    fn test_serial_floor() {
        let lib = Library::from_public(vec![public("a", 4)], 300);
        assert_eq!(lib.last_serial(), 300);
    }

    #[test]
    fn test_make_poem_unknown_id_keeps_id_with_next_serial() {
        let lib = Library::from_public(vec![public("a", 4)], 0);
        let poem = make_poem(vec![], String::new(), &lib, Some("ghost"), FaceId::Top, 10);
        assert_eq!(poem.id, "ghost");
        assert_eq!(poem.serial_number, 11);
        assert!(poem.is_user_poem && !poem.is_public);
    }

    #[test]
    fn test_save_replaces_in_place() {
        let mut lib = Library::new();
        let first = lib.save(vec![], "who".to_string(), None, FaceId::Front);
        let second = lib.save(vec![], "who walks".to_string(), Some(&first.id), FaceId::Front);
        assert_eq!(first.id, second.id);
        assert_eq!(first.serial_number, second.serial_number);
        assert_eq!(lib.len(), 1);
        assert_eq!(lib.get(&first.id).unwrap().displayed_text, "who walks");
    }

    #[test]
    fn test_saving_over_public_poem_forks() {
        let mut lib = Library::from_public(vec![public("a", 4)], 0);
        let saved = lib.save(vec![], "edited".to_string(), Some("a"), FaceId::Front);
        assert_ne!(saved.id, "a");
        assert_eq!(saved.serial_number, 5);
        assert_eq!(lib.get("a").unwrap().displayed_text, "who");
    }

    #[test]
    fn test_serials_do_not_repeat_after_delete() {
        let mut lib = Library::new();
        let a = lib.save_a_copy(vec![], "a".to_string(), FaceId::Front);
        lib.delete(&a.id).unwrap();
        let b = lib.save_a_copy(vec![], "b".to_string(), FaceId::Front);
        assert!(b.serial_number > a.serial_number);
    }
}
