//! Stateful WASM API over the app state container
//!
//! The app state lives here, owned by WASM. JavaScript sends actions and
//! renders from the returned snapshots; it never mutates state directly.

use lazy_static::lazy_static;
use std::sync::{Mutex, MutexGuard};
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, deserialize_or_default, js_error, parse_arg, serialize};
use super::types::{HoverResult, PoemListing, SaveResult};
use crate::app::{AppAction, AppState};
use crate::config::CubeSettings;
use crate::editor::EditorAction;
use crate::hover::HoverState;
use crate::library::LibraryFilter;
use crate::menu::MenuOption;
use crate::models::Arrow;
use crate::{wasm_info, wasm_log, wasm_warn};

// WASM-owned app state (canonical source of truth)
lazy_static! {
    static ref APP: Mutex<Option<AppState>> = Mutex::new(None);
    static ref HOVER: Mutex<HoverState> = Mutex::new(HoverState::default());
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, JsValue> {
    mutex
        .lock()
        .map_err(|e| js_error(format!("State lock poisoned: {}", e)))
}

/// Run `f` against the initialized app state
fn with_app<R>(f: impl FnOnce(&mut AppState) -> Result<R, JsValue>) -> Result<R, JsValue> {
    let mut guard = lock(&*APP)?;
    let app = guard
        .as_mut()
        .ok_or_else(|| js_error("Cube not initialized, call initCube first"))?;
    f(app)
}

fn dispatch_and_snapshot(action: AppAction) -> Result<JsValue, JsValue> {
    with_app(|app| {
        app.dispatch(action).map_err(js_error)?;
        serialize(&app.snapshot(), "Snapshot serialization error")
    })
}

/// Create (or reset) the app state; `settings` may be undefined
#[wasm_bindgen(js_name = initCube)]
pub fn init_cube(settings_js: JsValue) -> Result<JsValue, JsValue> {
    let settings: CubeSettings = deserialize_or_default(settings_js, "Settings deserialization error")?;
    wasm_info!(
        "initCube: face={}, hoverDebounceMs={}, serialFloor={}",
        settings.initial_face,
        settings.hover_debounce_ms,
        settings.serial_floor
    );

    *lock(&*HOVER)? = HoverState::new(settings.hover_debounce_ms);

    let app = AppState::new(settings);
    let snapshot = serialize(&app.snapshot(), "Snapshot serialization error")?;
    *lock(&*APP)? = Some(app);
    Ok(snapshot)
}

/// Apply an action (`{type, payload}`) and return the new snapshot
#[wasm_bindgen(js_name = dispatchAction)]
pub fn dispatch_action(action_js: JsValue) -> Result<JsValue, JsValue> {
    let action: AppAction = deserialize(action_js, "Action deserialization error")?;
    wasm_log!("dispatchAction: {:?}", action);
    dispatch_and_snapshot(action)
}

#[wasm_bindgen(js_name = getSnapshot)]
pub fn get_snapshot() -> Result<JsValue, JsValue> {
    with_app(|app| serialize(&app.snapshot(), "Snapshot serialization error"))
}

/// Poems under `filter` ("user" | "all"), or the current filter when undefined
#[wasm_bindgen(js_name = listPoems)]
pub fn list_poems(filter_js: JsValue) -> Result<JsValue, JsValue> {
    let filter: Option<LibraryFilter> = if filter_js.is_undefined() || filter_js.is_null() {
        None
    } else {
        Some(deserialize(filter_js, "Filter deserialization error")?)
    };

    with_app(|app| {
        let filter = filter.unwrap_or(app.filter);
        let listing = PoemListing {
            filter,
            poems: app.library.list(filter).into_iter().cloned().collect(),
        };
        serialize(&listing, "Poem listing serialization error")
    })
}

/// Open the menu for the token at `index`; returns the menu or null
#[wasm_bindgen(js_name = computeWordMenu)]
pub fn compute_word_menu(index: usize) -> Result<JsValue, JsValue> {
    with_app(|app| {
        app.dispatch(AppAction::Editor(EditorAction::ClickWord(index)))
            .map_err(js_error)?;
        serialize(&app.snapshot().menu, "Menu serialization error")
    })
}

/// Open the menu for the gap before token `index`; returns the menu or null
#[wasm_bindgen(js_name = computeGapMenu)]
pub fn compute_gap_menu(index: usize) -> Result<JsValue, JsValue> {
    with_app(|app| {
        app.dispatch(AppAction::Editor(EditorAction::ClickGap(index)))
            .map_err(js_error)?;
        serialize(&app.snapshot().menu, "Menu serialization error")
    })
}

/// Apply an option from the open menu and return the new snapshot
#[wasm_bindgen(js_name = chooseMenuOption)]
pub fn choose_menu_option(option_js: JsValue) -> Result<JsValue, JsValue> {
    let option: MenuOption = deserialize(option_js, "Menu option deserialization error")?;
    wasm_log!("chooseMenuOption: {}", option);
    dispatch_and_snapshot(AppAction::Editor(EditorAction::Choose(option)))
}

fn save(as_copy: bool) -> Result<JsValue, JsValue> {
    with_app(|app| {
        let poem = app.save(as_copy).map_err(js_error)?;
        wasm_info!("Saved poem #{} ({})", poem.serial_number, poem.id);
        let result = SaveResult {
            poem,
            snapshot: app.snapshot(),
        };
        serialize(&result, "Save result serialization error")
    })
}

#[wasm_bindgen(js_name = savePoem)]
pub fn save_poem() -> Result<JsValue, JsValue> {
    save(false)
}

#[wasm_bindgen(js_name = savePoemCopy)]
pub fn save_poem_copy() -> Result<JsValue, JsValue> {
    save(true)
}

/// Delete a user poem; public poems are refused
#[wasm_bindgen(js_name = deletePoem)]
pub fn delete_poem(id: &str) -> Result<JsValue, JsValue> {
    let result = dispatch_and_snapshot(AppAction::DeletePoem(id.to_string()));
    if result.is_err() {
        wasm_warn!("deletePoem refused for {}", id);
    }
    result
}

// ============================================================================
// Arrow hover highlight
// ============================================================================

fn hover_result(hover: &HoverState, changed: bool) -> Result<JsValue, JsValue> {
    serialize(
        &HoverResult {
            hovered: hover.hovered,
            changed,
            pending: hover.is_pending(),
        },
        "Hover serialization error",
    )
}

#[wasm_bindgen(js_name = hoverArrow)]
pub fn hover_arrow(arrow: &str) -> Result<JsValue, JsValue> {
    let arrow: Arrow = parse_arg(arrow)?;
    let mut hover = lock(&*HOVER)?;
    hover.enter(arrow);
    hover_result(&hover, true)
}

#[wasm_bindgen(js_name = leaveArrow)]
pub fn leave_arrow() -> Result<JsValue, JsValue> {
    let mut hover = lock(&*HOVER)?;
    hover.leave(js_sys::Date::now());
    hover_result(&hover, false)
}

/// Clear the highlight if its debounce has run out
#[wasm_bindgen(js_name = tickHover)]
pub fn tick_hover() -> Result<JsValue, JsValue> {
    let mut hover = lock(&*HOVER)?;
    let changed = hover.tick(js_sys::Date::now());
    hover_result(&hover, changed)
}
