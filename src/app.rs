//! Application state container
//!
//! One [`AppState`] holds everything the pages share: the live cube, the
//! poem being viewed, the library and the open editor. It changes only
//! through [`AppState::dispatch`]; the presentation layer renders from
//! [`AppState::snapshot`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::CubeSettings;
use crate::data::dictionary;
use crate::editor::{EditorAction, EditorState};
use crate::errors::AppError;
use crate::geometry::{rotate, scramble, solved_cube, solved_sequence};
use crate::library::{Library, LibraryFilter};
use crate::menu::Menu;
use crate::models::{flatten, Arrow, CubeState, FaceId, Pictogram, PoemRecord, PoemText, WordToken, FACE_SEQUENCE_LEN};
use crate::poem::{canonical_poem, canonical_poem_string, is_solved_sequence, poem_string_from_pictograms, reconstruct};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Viewer,
    Editor,
    Library,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Viewer => "viewer",
            Page::Editor => "editor",
            Page::Library => "library",
        }
    }
}

/// How a poem picked from the library is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectMode {
    View,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum AppAction {
    Rotate(Arrow),
    Scramble,
    /// Scramble with a fixed seed (reproducible)
    ScrambleWith(u64),
    Solve,
    OpenEditor,
    Editor(EditorAction),
    Save,
    SaveACopy,
    CloseEditor,
    ShowLibrary,
    ShowViewer,
    SelectPoem { id: String, mode: SelectMode },
    DeletePoem(String),
    SetFilter(LibraryFilter),
}

/// What the presentation layer needs to draw the current page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub page: Page,
    pub face: FaceId,
    pub pictograms: Vec<Pictogram>,
    pub words: Vec<WordToken>,
    pub poem_id: Option<String>,
    pub filter: LibraryFilter,
    pub menu: Option<Menu>,
    pub can_save: bool,
    pub can_save_a_copy: bool,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub page: Page,
    pub cube: CubeState,
    pub active_face: FaceId,
    pub pictograms: Vec<Pictogram>,
    pub current_text: String,
    pub poem_id: Option<String>,
    pub library: Library,
    pub filter: LibraryFilter,
    pub editor: Option<EditorState>,
    pub settings: CubeSettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CubeSettings::default())
    }
}

impl AppState {
    pub fn new(settings: CubeSettings) -> Self {
        let face = settings.initial_face;
        let mut cube = solved_cube();
        cube.active = face;

        Self {
            page: Page::Viewer,
            pictograms: cube.sequence(face),
            cube,
            active_face: face,
            current_text: default_text(face),
            poem_id: None,
            library: Library::with_public_poems(settings.serial_floor),
            filter: settings.default_filter,
            editor: None,
            settings,
        }
    }

    pub fn dispatch(&mut self, action: AppAction) -> Result<(), AppError> {
        log::debug!("dispatch: {:?}", action);

        match action {
            AppAction::Rotate(arrow) => self.rotate(arrow),
            AppAction::Scramble => {
                self.scramble_with(&mut rand::thread_rng());
                Ok(())
            }
            AppAction::ScrambleWith(seed) => {
                self.scramble_with(&mut StdRng::seed_from_u64(seed));
                Ok(())
            }
            AppAction::Solve => {
                self.solve();
                Ok(())
            }
            AppAction::OpenEditor => {
                self.open_editor();
                Ok(())
            }
            AppAction::Editor(action) => {
                self.require_page(Page::Editor)?;
                let editor = self.editor.as_mut().ok_or(AppError::WrongPage { expected: "editor" })?;
                editor.apply(dictionary(), action)?;
                Ok(())
            }
            AppAction::Save => self.save(false).map(|_| ()),
            AppAction::SaveACopy => self.save(true).map(|_| ()),
            AppAction::CloseEditor => {
                self.require_page(Page::Editor)?;
                self.show(Page::Viewer);
                Ok(())
            }
            AppAction::ShowLibrary => {
                self.show(Page::Library);
                Ok(())
            }
            AppAction::ShowViewer => {
                self.show(Page::Viewer);
                Ok(())
            }
            AppAction::SelectPoem { id, mode } => self.select_poem(&id, mode),
            AppAction::DeletePoem(id) => {
                self.library.delete(&id)?;
                if self.poem_id.as_deref() == Some(id.as_str()) {
                    self.poem_id = None;
                }
                Ok(())
            }
            AppAction::SetFilter(filter) => {
                self.filter = filter;
                Ok(())
            }
        }
    }

    fn require_page(&self, page: Page) -> Result<(), AppError> {
        if self.page == page {
            Ok(())
        } else {
            Err(AppError::WrongPage {
                expected: page.as_str(),
            })
        }
    }

    fn show(&mut self, page: Page) {
        if page != Page::Editor {
            self.editor = None;
        }
        self.page = page;
    }

    fn rotate(&mut self, arrow: Arrow) -> Result<(), AppError> {
        self.require_page(Page::Viewer)?;

        let face = rotate(self.active_face, arrow);
        let sequence = self.cube.sequence(face);
        self.current_text = if is_solved_sequence(face, &sequence) {
            String::new()
        } else {
            poem_string_from_pictograms(dictionary(), &sequence)
        };
        self.cube.active = face;
        self.active_face = face;
        self.pictograms = sequence;
        self.poem_id = None;
        Ok(())
    }

    pub fn scramble_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cube = scramble(&self.cube, rng);
        self.active_face = self.cube.active;
        self.pictograms = self.cube.sequence(self.active_face);
        self.current_text = poem_string_from_pictograms(dictionary(), &self.pictograms);
        self.poem_id = None;
        self.show(Page::Viewer);
    }

    fn solve(&mut self) {
        self.cube = solved_cube();
        self.active_face = FaceId::Front;
        self.pictograms = self.cube.sequence(FaceId::Front);
        self.current_text = canonical_poem_string(FaceId::Front);
        self.poem_id = None;
        self.show(Page::Viewer);
    }

    fn open_editor(&mut self) {
        if self.page != Page::Library || self.poem_id.is_none() {
            self.poem_id = None;
        }
        self.editor = Some(EditorState::open(
            dictionary(),
            self.pictograms.clone(),
            &self.current_text,
            self.poem_id.clone(),
            self.active_face,
        ));
        self.page = Page::Editor;
    }

    /// Persist the editor's poem and switch to the library
    pub fn save(&mut self, as_copy: bool) -> Result<PoemRecord, AppError> {
        self.require_page(Page::Editor)?;
        let editor = self.editor.as_ref().ok_or(AppError::WrongPage { expected: "editor" })?;

        if as_copy && editor.poem_id.is_none() {
            return Err(AppError::CopyRequiresSavedPoem);
        }
        if !editor.can_save() {
            return Err(AppError::NothingToSave);
        }

        let text = flatten(&editor.words);
        let pictograms = editor.pictograms.clone();
        let poem_id = editor.poem_id.clone();
        let face = editor.face;

        let record = if as_copy {
            self.library.save_a_copy(pictograms, text.clone(), face)
        } else {
            self.library.save(pictograms, text.clone(), poem_id.as_deref(), face)
        };
        log::info!("Saved poem #{} ({})", record.serial_number, record.id);

        self.current_text = text;
        self.poem_id = Some(record.id.clone());
        self.active_face = record.face;
        self.pictograms = record.pictograms.clone();
        self.filter = LibraryFilter::User;
        self.show(Page::Library);
        Ok(record)
    }

    fn select_poem(&mut self, id: &str, mode: SelectMode) -> Result<(), AppError> {
        let record = self
            .library
            .get(id)
            .cloned()
            .ok_or_else(|| crate::errors::LibraryError::NotFound(id.to_string()))?;

        if record.pictograms.len() == FACE_SEQUENCE_LEN {
            if let Some(face) = self.cube.face_mut(record.face) {
                face.sequence = record.pictograms.clone();
            }
        } else {
            log::warn!(
                "Poem {} has {} pictograms, leaving the cube unchanged",
                record.id,
                record.pictograms.len()
            );
        }
        self.cube.active = record.face;
        self.active_face = record.face;
        self.pictograms = record.pictograms;
        self.current_text = record.displayed_text;
        self.poem_id = Some(record.id);

        match mode {
            SelectMode::Edit => {
                self.page = Page::Library;
                self.open_editor();
            }
            SelectMode::View => self.show(Page::Viewer),
        }
        Ok(())
    }

    /// Poems visible under the current filter
    pub fn poems(&self) -> Vec<&PoemRecord> {
        self.library.list(self.filter)
    }

    pub fn snapshot(&self) -> Snapshot {
        let editor = self.editor.as_ref().filter(|_| self.page == Page::Editor);

        let words = match editor {
            Some(editor) => editor.words.clone(),
            None if self.poem_id.is_none() && is_solved_sequence(self.active_face, &self.pictograms) => {
                canonical_poem(self.active_face)
            }
            None => reconstruct(dictionary(), &self.pictograms, &PoemText::from(self.current_text.as_str())),
        };

        Snapshot {
            page: self.page,
            face: self.active_face,
            pictograms: self.pictograms.clone(),
            words,
            poem_id: self.poem_id.clone(),
            filter: self.filter,
            menu: editor.and_then(|e| e.menu.clone()),
            can_save: editor.map_or(false, EditorState::can_save),
            can_save_a_copy: editor.map_or(false, EditorState::can_save_a_copy),
        }
    }
}

/// Text shown for a solved face before any poem is loaded
fn default_text(face: FaceId) -> String {
    if face == FaceId::Front && !solved_sequence(FaceId::Front).is_empty() {
        canonical_poem_string(FaceId::Front)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuOption;

    #[test]
    fn test_initial_snapshot_shows_canonical_front() {
        let app = AppState::default();
        let snap = app.snapshot();
        assert_eq!(snap.page, Page::Viewer);
        assert_eq!(snap.face, FaceId::Front);
        assert_eq!(snap.words, canonical_poem(FaceId::Front));
    }

    #[test]
    fn test_rotate_to_solved_face_clears_text() {
        let mut app = AppState::default();
        app.dispatch(AppAction::Rotate(Arrow::Top)).unwrap();
        assert_eq!(app.active_face, FaceId::Top);
        assert!(app.current_text.is_empty());
        assert_eq!(app.snapshot().words, canonical_poem(FaceId::Top));
    }

    #[test]
    fn test_rotate_outside_viewer_is_rejected() {
        let mut app = AppState::default();
        app.dispatch(AppAction::ShowLibrary).unwrap();
        let err = app.dispatch(AppAction::Rotate(Arrow::Left)).unwrap_err();
        assert_eq!(err, AppError::WrongPage { expected: "viewer" });
        assert_eq!(app.active_face, FaceId::Front);
    }

    #[test]
    fn test_save_without_changes_is_rejected() {
        let mut app = AppState::default();
        app.dispatch(AppAction::OpenEditor).unwrap();
        app.dispatch(AppAction::Save).unwrap();
        let id = app.poem_id.clone().unwrap();
        app.dispatch(AppAction::SelectPoem { id, mode: SelectMode::Edit }).unwrap();
        assert_eq!(app.dispatch(AppAction::Save).unwrap_err(), AppError::NothingToSave);
        assert_eq!(app.page, Page::Editor);
    }

    #[test]
    fn test_copy_requires_saved_poem() {
        let mut app = AppState::default();
        app.dispatch(AppAction::OpenEditor).unwrap();
        assert_eq!(
            app.dispatch(AppAction::SaveACopy).unwrap_err(),
            AppError::CopyRequiresSavedPoem
        );
    }

    #[test]
    fn test_edit_and_save_goes_to_library() {
        let mut app = AppState::default();
        app.dispatch(AppAction::OpenEditor).unwrap();
        app.dispatch(AppAction::Editor(EditorAction::ClickGap(0))).unwrap();
        app.dispatch(AppAction::Editor(EditorAction::Choose(MenuOption::Mortar("and".into()))))
            .unwrap();
        app.dispatch(AppAction::Save).unwrap();

        assert_eq!(app.page, Page::Library);
        assert!(app.current_text.starts_with("and who walks"));
        let user_poems = app.poems();
        assert_eq!(user_poems.len(), 1);
        assert_eq!(user_poems[0].displayed_text, app.current_text);
    }
}
