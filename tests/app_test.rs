// App state container: viewer → editor → library flows

use wordcube_wasm::data::dictionary;
use wordcube_wasm::geometry::solved_sequence;
use wordcube_wasm::poem::{canonical_poem, poem_string_from_pictograms};
use wordcube_wasm::{
    AppAction, AppError, AppState, Arrow, CubeSettings, EditorAction, FaceId, LibraryError, LibraryFilter,
    MenuMode, MenuOption, Page, SelectMode, WordToken,
};

#[test]
fn test_rotate_back_to_front_restores_canonical_poem() {
    let mut app = AppState::default();
    app.dispatch(AppAction::Rotate(Arrow::Right)).unwrap();
    assert_eq!(app.active_face, FaceId::Right);
    app.dispatch(AppAction::Rotate(Arrow::Left)).unwrap();
    assert_eq!(app.active_face, FaceId::Front);
    assert_eq!(app.snapshot().words, canonical_poem(FaceId::Front));
}

#[test]
fn test_scramble_with_seed_shows_derived_poem() {
    let mut app = AppState::default();
    app.dispatch(AppAction::ScrambleWith(3)).unwrap();

    assert_eq!(app.page, Page::Viewer);
    assert_eq!(app.cube.active, app.active_face);
    assert_eq!(app.pictograms, app.cube.sequence(app.active_face));
    assert_eq!(app.current_text, poem_string_from_pictograms(dictionary(), &app.pictograms));
    assert!(app.poem_id.is_none());

    let snap = app.snapshot();
    assert_eq!(snap.words.len(), 8);
}

#[test]
fn test_unseeded_scramble_keeps_every_piece() {
    let mut app = AppState::default();
    let mut before: Vec<String> = app.cube.pictogram_names().into_iter().map(String::from).collect();
    app.dispatch(AppAction::Scramble).unwrap();
    let mut after: Vec<String> = app.cube.pictogram_names().into_iter().map(String::from).collect();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn test_solve_resets_cube() {
    let mut app = AppState::default();
    app.dispatch(AppAction::ScrambleWith(11)).unwrap();
    app.dispatch(AppAction::Solve).unwrap();
    assert_eq!(app.active_face, FaceId::Front);
    assert_eq!(app.pictograms, solved_sequence(FaceId::Front).to_vec());
    assert_eq!(app.snapshot().words, canonical_poem(FaceId::Front));
}

#[test]
fn test_open_editor_on_solved_face_starts_from_canonical_poem() {
    let mut app = AppState::new(CubeSettings {
        initial_face: FaceId::Bottom,
        ..CubeSettings::default()
    });
    app.dispatch(AppAction::OpenEditor).unwrap();

    let snap = app.snapshot();
    assert_eq!(snap.page, Page::Editor);
    assert_eq!(snap.words, canonical_poem(FaceId::Bottom));
    assert!(snap.can_save);
    assert!(!snap.can_save_a_copy);
}

#[test]
fn test_edit_save_reopen_and_copy() {
    let mut app = AppState::default();
    app.dispatch(AppAction::Rotate(Arrow::Top)).unwrap();
    app.dispatch(AppAction::ScrambleWith(5)).unwrap();
    app.dispatch(AppAction::OpenEditor).unwrap();

    // replace the first word with another of its pictogram's meanings
    app.dispatch(AppAction::Editor(EditorAction::ClickWord(0))).unwrap();
    let menu = app.snapshot().menu.unwrap();
    assert_eq!(menu.mode, MenuMode::Replace);
    let choice = menu.options[0].clone();
    app.dispatch(AppAction::Editor(EditorAction::Choose(choice.clone()))).unwrap();
    assert!(app.snapshot().menu.is_none());

    let saved = app.save(false).unwrap();
    assert_eq!(app.page, Page::Library);
    assert_eq!(app.filter, LibraryFilter::User);
    assert_eq!(saved.serial_number, 8);
    assert_eq!(app.poem_id.as_deref(), Some(saved.id.as_str()));
    assert!(saved.displayed_text.starts_with(&choice.to_string()));

    app.dispatch(AppAction::SelectPoem {
        id: saved.id.clone(),
        mode: SelectMode::Edit,
    })
    .unwrap();
    assert_eq!(app.page, Page::Editor);
    assert!(!app.snapshot().can_save);

    app.dispatch(AppAction::Editor(EditorAction::ClickGap(8))).unwrap();
    app.dispatch(AppAction::Editor(EditorAction::Choose(MenuOption::Punctuation(".".into()))))
        .unwrap();
    let copy = app.save(true).unwrap();

    assert_ne!(copy.id, saved.id);
    assert_eq!(copy.serial_number, 9);
    assert!(copy.displayed_text.ends_with(" ."));
    assert_eq!(app.poems().len(), 2);
}

#[test]
fn test_select_public_poem_for_viewing() {
    let mut app = AppState::default();
    app.dispatch(AppAction::ShowLibrary).unwrap();
    app.dispatch(AppAction::SetFilter(LibraryFilter::All)).unwrap();
    assert_eq!(app.poems().len(), 7);

    app.dispatch(AppAction::SelectPoem {
        id: "public-007".into(),
        mode: SelectMode::View,
    })
    .unwrap();
    let snap = app.snapshot();
    assert_eq!(snap.page, Page::Viewer);
    assert_eq!(snap.poem_id.as_deref(), Some("public-007"));
    assert_eq!(app.cube.sequence(FaceId::Front), snap.pictograms);
    assert!(snap.words.iter().any(|w| *w == WordToken::line_break()));
}

#[test]
fn test_open_editor_from_viewer_drops_poem_id() {
    let mut app = AppState::default();
    app.dispatch(AppAction::SelectPoem {
        id: "public-002".into(),
        mode: SelectMode::View,
    })
    .unwrap();
    app.dispatch(AppAction::OpenEditor).unwrap();
    assert!(app.poem_id.is_none());
    assert!(app.snapshot().can_save);
}

#[test]
fn test_delete_public_poem_is_refused() {
    let mut app = AppState::default();
    let err = app.dispatch(AppAction::DeletePoem("public-001".into())).unwrap_err();
    assert_eq!(err, AppError::Library(LibraryError::PublicPoem("public-001".into())));
    app.dispatch(AppAction::SetFilter(LibraryFilter::All)).unwrap();
    assert_eq!(app.poems().len(), 7);
}

#[test]
fn test_editor_actions_need_the_editor() {
    let mut app = AppState::default();
    let err = app.dispatch(AppAction::Editor(EditorAction::ClickWord(0))).unwrap_err();
    assert_eq!(err, AppError::WrongPage { expected: "editor" });
}

#[test]
fn test_actions_deserialize_from_js_shape() {
    let action: AppAction = serde_json::from_str(r#"{"type":"rotate","payload":"left"}"#).unwrap();
    assert_eq!(action, AppAction::Rotate(Arrow::Left));

    let action: AppAction =
        serde_json::from_str(r#"{"type":"selectPoem","payload":{"id":"public-001","mode":"edit"}}"#).unwrap();
    assert_eq!(
        action,
        AppAction::SelectPoem {
            id: "public-001".into(),
            mode: SelectMode::Edit
        }
    );

    let action: AppAction = serde_json::from_str(r#"{"type":"solve"}"#).unwrap();
    assert_eq!(action, AppAction::Solve);
}
