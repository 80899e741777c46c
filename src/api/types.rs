//! Shared result types for the WASM API

use serde::Serialize;

use crate::app::Snapshot;
use crate::library::LibraryFilter;
use crate::models::PoemRecord;

/// Result of a save: the stored record and the page state after it
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SaveResult {
    pub poem: PoemRecord,
    pub snapshot: Snapshot,
}

/// Library listing under a filter
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PoemListing {
    pub filter: LibraryFilter,
    pub poems: Vec<PoemRecord>,
}

/// Hover highlight after a pointer event or tick
#[derive(Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HoverResult {
    pub hovered: Option<crate::models::Arrow>,
    pub changed: bool,
    /// A clear is scheduled; keep calling `tickHover`
    pub pending: bool,
}
