//! Error types for cube, menu, library and application operations
//!
//! None of these are fatal: every operation that fails leaves its state
//! untouched and reports the reason to the caller.

use thiserror::Error;

use crate::models::cube::FaceId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    /// Face data does not hold 8 pictograms and 9 cell colours
    #[error("Invalid face data for '{face}': {sequence_len} pictograms, {colors_len} cell colours")]
    InvalidFace {
        face: FaceId,
        sequence_len: usize,
        colors_len: usize,
    },

    #[error("No face data for '{0}'")]
    MissingFace(FaceId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("No menu is open")]
    NoMenu,

    #[error("Option '{0}' is not offered by the open menu")]
    OptionNotOffered(String),

    #[error("Token index {index} out of range (poem has {len} tokens)")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("Poem {0} is public and cannot be deleted")]
    PublicPoem(String),

    #[error("Poem {0} not found")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Library(#[from] LibraryError),

    #[error("Action requires the {expected} page")]
    WrongPage { expected: &'static str },

    #[error("No unsaved changes")]
    NothingToSave,

    #[error("Only a previously saved poem can be saved as a copy")]
    CopyRequiresSavedPoem,
}
