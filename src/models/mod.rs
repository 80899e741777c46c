//! Models module for the word cube
//!
//! This module contains the data models shared by the cube geometry,
//! poem engines, edit menu and library.

pub mod pictogram;
pub mod cube;
pub mod word;
pub mod poem;

// Re-export commonly used types
pub use pictogram::*;
pub use cube::*;
pub use word::*;
pub use poem::PoemRecord;
