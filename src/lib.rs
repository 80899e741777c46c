//! Word Cube WASM Module
//!
//! Core of the word cube poetry toy: a cube of pictograms whose faces read
//! as poems. This crate holds the cube geometry, poem derivation and
//! reconstruction, the contextual edit menu, the poem library and the app
//! state container. Rendering stays in JavaScript.

pub mod errors;
pub mod models;
pub mod data;
pub mod geometry;
pub mod poem;
pub mod menu;
pub mod editor;
pub mod library;
pub mod config;
pub mod app;
pub mod hover;
pub mod glossary;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use errors::{AppError, CubeError, LibraryError, MenuError};
pub use app::{AppAction, AppState, Page, SelectMode, Snapshot};
pub use config::CubeSettings;
pub use editor::{EditorAction, EditorState};
pub use library::{make_poem, Library, LibraryFilter};
pub use menu::{Menu, MenuMode, MenuOption};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    init_logger();

    log::info!("Word cube WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logger() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        api::helpers::log_warn(&format!("Logger already initialized: {}", e));
    }
}
