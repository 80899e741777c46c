//! Editor page state
//!
//! The editor owns a working copy of a poem's tokens and at most one open
//! menu. All changes go through [`EditorState::apply`]; the app layer reads
//! `words` back when saving.

use serde::{Deserialize, Serialize};

use crate::errors::MenuError;
use crate::menu::{apply_menu_choice, compute_menu, ClickTarget, Menu, MenuOption};
use crate::models::{FaceId, Pictogram, PictogramDictionary, PoemText, WordToken};
use crate::poem::{canonical_poem, canonical_poem_string, is_solved_sequence, reconstruct};

/// Actions the editing page can take
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum EditorAction {
    ClickWord(usize),
    ClickGap(usize),
    Choose(MenuOption),
    HideMenu,
    /// Clear the dirty flag after a successful save
    MarkSaved,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub words: Vec<WordToken>,
    pub pictograms: Vec<Pictogram>,
    pub face: FaceId,
    pub poem_id: Option<String>,
    pub has_unsaved_changes: bool,
    pub menu: Option<Menu>,
}

impl EditorState {
    /// Open the editor on a poem.
    ///
    /// A fresh poem (no id) on an empty text starts from the face's canonical
    /// poem, as does the untouched default front poem. Anything else is
    /// reconstructed from its text and counts as unsaved only without an id.
    pub fn open(
        dictionary: &PictogramDictionary,
        pictograms: Vec<Pictogram>,
        text: &str,
        poem_id: Option<String>,
        face: FaceId,
    ) -> Self {
        let fresh = poem_id.is_none();

        let words = if fresh && text.is_empty() {
            log::debug!("Opening canonical {} poem", face);
            canonical_poem(face)
        } else if fresh
            && face == FaceId::Front
            && is_solved_sequence(FaceId::Front, &pictograms)
            && text == canonical_poem_string(FaceId::Front)
        {
            canonical_poem(FaceId::Front)
        } else {
            reconstruct(dictionary, &pictograms, &PoemText::from(text))
        };

        Self {
            words,
            pictograms,
            face,
            poem_id,
            has_unsaved_changes: fresh,
            menu: None,
        }
    }

    pub fn apply(&mut self, dictionary: &PictogramDictionary, action: EditorAction) -> Result<(), MenuError> {
        match action {
            EditorAction::ClickWord(index) => self.click(dictionary, ClickTarget::Word(index)),
            EditorAction::ClickGap(index) => self.click(dictionary, ClickTarget::Gap(index)),
            EditorAction::Choose(option) => {
                let menu = self.menu.as_ref().ok_or(MenuError::NoMenu)?;
                apply_menu_choice(&mut self.words, menu, &option)?;
                self.has_unsaved_changes = true;
                self.menu = None;
                Ok(())
            }
            EditorAction::HideMenu => {
                self.menu = None;
                Ok(())
            }
            EditorAction::MarkSaved => {
                self.has_unsaved_changes = false;
                Ok(())
            }
        }
    }

    fn click(&mut self, dictionary: &PictogramDictionary, target: ClickTarget) -> Result<(), MenuError> {
        let menu = compute_menu(dictionary, &self.words, &self.pictograms, target)?;
        self.menu = menu.filter(Menu::is_visible);
        Ok(())
    }

    pub fn can_save(&self) -> bool {
        self.has_unsaved_changes
    }

    pub fn can_save_a_copy(&self) -> bool {
        self.has_unsaved_changes && self.poem_id.is_some()
    }
}
