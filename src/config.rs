//! Runtime settings passed in from JavaScript once at start-up

use serde::{Deserialize, Serialize};

use crate::library::LibraryFilter;
use crate::models::FaceId;

/// Settings for the cube app; every field has a default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CubeSettings {
    /// Face shown when the app starts
    pub initial_face: FaceId,

    /// Delay before a hovered arrow loses its highlight
    pub hover_debounce_ms: u32,

    /// Library filter selected at start-up
    pub default_filter: LibraryFilter,

    /// Lowest serial a user poem may start from
    pub serial_floor: u32,
}

impl Default for CubeSettings {
    fn default() -> Self {
        Self {
            initial_face: FaceId::Front,
            hover_debounce_ms: 100,
            default_filter: LibraryFilter::User,
            serial_floor: 0,
        }
    }
}
