//! Word Cube WASM API
//!
//! JavaScript-facing functions for the word cube.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serialization and error conversion
//! - `types`: result shapes returned to JavaScript
//! - `poems`: stateless derivation, reconstruction, geometry and glossary calls
//! - `core`: the app state container (init, actions, menus, saving, hover)

pub mod helpers;
pub mod types;
pub mod poems;
pub mod core;

pub use core::*;
pub use poems::*;
