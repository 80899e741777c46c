//! Cube model: faces, reading orders and cell colours
//!
//! A face is a 3×3 grid (row-major, indexes 0..8). The centre cell (4) is the
//! orientation mask and never holds a pictogram; the other eight cells hold the
//! face's pictogram sequence in the order given by its reading order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CubeError;
use crate::models::pictogram::Pictogram;

/// Number of pictograms on one face (the ring around the centre)
pub const FACE_SEQUENCE_LEN: usize = 8;

/// Number of cells on one face, centre included
pub const FACE_CELL_COUNT: usize = 9;

/// Grid index of the centre mask cell
pub const CENTER_CELL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceId {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl FaceId {
    pub const ALL: [FaceId; 6] = [
        FaceId::Front,
        FaceId::Back,
        FaceId::Left,
        FaceId::Right,
        FaceId::Top,
        FaceId::Bottom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaceId::Front => "front",
            FaceId::Back => "back",
            FaceId::Left => "left",
            FaceId::Right => "right",
            FaceId::Top => "top",
            FaceId::Bottom => "bottom",
        }
    }
}

impl Default for FaceId {
    fn default() -> Self {
        FaceId::Front
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FaceId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "front" => Ok(FaceId::Front),
            "back" => Ok(FaceId::Back),
            "left" => Ok(FaceId::Left),
            "right" => Ok(FaceId::Right),
            "top" => Ok(FaceId::Top),
            "bottom" => Ok(FaceId::Bottom),
            _ => Err(format!("Unknown face: '{}'", s)),
        }
    }
}

/// Rotation gesture (arrow clicked or arrow key pressed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrow {
    Top,
    Bottom,
    Left,
    Right,
}

impl FromStr for Arrow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" | "up" | "arrowup" => Ok(Arrow::Top),
            "bottom" | "down" | "arrowdown" => Ok(Arrow::Bottom),
            "left" | "arrowleft" => Ok(Arrow::Left),
            "right" | "arrowright" => Ok(Arrow::Right),
            _ => Err(format!("Unknown arrow: '{}'", s)),
        }
    }
}

/// Corner where a face's reading order starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Grid index of this corner
    pub fn grid_index(&self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 2,
            Corner::BottomRight => 8,
            Corner::BottomLeft => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Clockwise,
    Counterclockwise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadOrder {
    pub corner: Corner,
    pub direction: Direction,
}

/// Foreground/background colour pair of a grid cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellColor {
    pub fg: String,
    pub bg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Face {
    pub face: FaceId,
    pub sequence: Vec<Pictogram>,
    pub cell_colors: Vec<CellColor>,
    pub read_order: ReadOrder,
}

impl Face {
    /// Check the face holds a full ring of pictograms and a colour per cell
    pub fn validate(&self) -> Result<(), CubeError> {
        if self.sequence.len() != FACE_SEQUENCE_LEN || self.cell_colors.len() != FACE_CELL_COUNT {
            return Err(CubeError::InvalidFace {
                face: self.face,
                sequence_len: self.sequence.len(),
                colors_len: self.cell_colors.len(),
            });
        }
        Ok(())
    }

    /// Pictograms placed on the 3×3 grid, centre empty
    pub fn grid(&self) -> Result<[Option<&Pictogram>; FACE_CELL_COUNT], CubeError> {
        self.validate()?;
        let mut grid = [None; FACE_CELL_COUNT];
        let layout = crate::geometry::layout_indexes(self.read_order.corner, self.read_order.direction);
        for (seq_idx, &grid_idx) in layout.iter().enumerate() {
            grid[grid_idx] = self.sequence.get(seq_idx);
        }
        Ok(grid)
    }
}

/// Six faces plus the face currently shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CubeState {
    pub faces: Vec<Face>,
    pub active: FaceId,
}

impl CubeState {
    pub fn new(faces: Vec<Face>, active: FaceId) -> Self {
        Self { faces, active }
    }

    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.iter().find(|f| f.face == id)
    }

    pub fn face_mut(&mut self, id: FaceId) -> Option<&mut Face> {
        self.faces.iter_mut().find(|f| f.face == id)
    }

    /// Face data for `id`, or `MissingFace` when the cube lacks it
    pub fn require_face(&self, id: FaceId) -> Result<&Face, CubeError> {
        self.face(id).ok_or(CubeError::MissingFace(id))
    }

    pub fn active_face(&self) -> Option<&Face> {
        self.face(self.active)
    }

    /// Sequence of a face, empty when the face is missing
    pub fn sequence(&self, id: FaceId) -> Vec<Pictogram> {
        match self.face(id) {
            Some(face) => face.sequence.clone(),
            None => {
                log::warn!("No face data for '{}', using an empty sequence", id);
                Vec::new()
            }
        }
    }

    /// Every pictogram name on the cube, face by face
    pub fn pictogram_names(&self) -> Vec<&str> {
        self.faces
            .iter()
            .flat_map(|f| f.sequence.iter().map(|p| p.name.as_str()))
            .collect()
    }
}
