//! Cube geometry: reading-order traversal, face rotation and scrambling
//!
//! ## Grid
//!
//! ```text
//!  0 | 1 | 2
//!  3 | 4 | 5      4 = orientation mask, never holds a pictogram
//!  6 | 7 | 8
//! ```
//!
//! The eight outer cells form a ring, walked clockwise as `0 1 2 5 8 7 6 3`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Arrow, CellColor, Corner, CubeState, Direction, Face, FaceId, Orientation, Pictogram};

/// Clockwise ring of outer grid cells, starting top-left
pub const CLOCKWISE_RING: [usize; 8] = [0, 1, 2, 5, 8, 7, 6, 3];

/// Grid positions in reading order for a face read from `corner` in `direction`.
///
/// The ring is rotated to start at the corner; a counterclockwise reading keeps
/// the starting corner and walks the remaining seven cells in reverse.
pub fn layout_indexes(corner: Corner, direction: Direction) -> [usize; 8] {
    let start = corner.grid_index();
    let offset = CLOCKWISE_RING.iter().position(|&i| i == start).unwrap_or(0);

    let mut ordered = CLOCKWISE_RING;
    ordered.rotate_left(offset);
    if direction == Direction::Counterclockwise {
        ordered[1..].reverse();
    }
    ordered
}

/// Face shown after rotating the cube with `arrow` while `current` faces the viewer
pub fn rotate(current: FaceId, arrow: Arrow) -> FaceId {
    use Arrow as A;
    use FaceId as F;

    match (current, arrow) {
        (F::Front, A::Top) => F::Top,
        (F::Front, A::Bottom) => F::Bottom,
        (F::Front, A::Left) => F::Left,
        (F::Front, A::Right) => F::Right,

        (F::Back, A::Top) => F::Bottom,
        (F::Back, A::Bottom) => F::Top,
        (F::Back, A::Left) => F::Right,
        (F::Back, A::Right) => F::Left,

        (F::Left, A::Top) => F::Top,
        (F::Left, A::Bottom) => F::Bottom,
        (F::Left, A::Left) => F::Back,
        (F::Left, A::Right) => F::Front,

        (F::Right, A::Top) => F::Top,
        (F::Right, A::Bottom) => F::Bottom,
        (F::Right, A::Left) => F::Front,
        (F::Right, A::Right) => F::Back,

        (F::Top, A::Top) => F::Back,
        (F::Top, A::Bottom) => F::Front,
        (F::Top, A::Left) => F::Left,
        (F::Top, A::Right) => F::Right,

        (F::Bottom, A::Top) => F::Front,
        (F::Bottom, A::Bottom) => F::Back,
        (F::Bottom, A::Left) => F::Left,
        (F::Bottom, A::Right) => F::Right,
    }
}

/// A fresh copy of the solved reference cube, front face active
pub fn solved_cube() -> CubeState {
    CubeState::new(crate::data::solved_faces().to_vec(), FaceId::Front)
}

/// Solved reference sequence for a face (empty when the face is unknown)
pub fn solved_sequence(face: FaceId) -> &'static [Pictogram] {
    crate::data::solved_faces()
        .iter()
        .find(|f| f.face == face)
        .map(|f| f.sequence.as_slice())
        .unwrap_or(&[])
}

/// One pooled piece: a pictogram name and the colours of the cell it left
struct Piece {
    name: String,
    color: CellColor,
}

/// Scramble every face of the cube.
///
/// All pieces are pooled in each face's reading order, shuffled, and dealt
/// back into the same slots in the same order. Each piece takes the colours of
/// the cell it came from to the cell it lands in, and gets a random
/// orientation. The centre cell keeps its colour. Returns the scrambled cube
/// with a randomly chosen active face.
pub fn scramble<R: Rng + ?Sized>(cube: &CubeState, rng: &mut R) -> CubeState {
    let mut pool: Vec<Piece> = Vec::with_capacity(cube.faces.len() * 8);
    for face in &cube.faces {
        let layout = layout_indexes(face.read_order.corner, face.read_order.direction);
        for (seq_idx, &grid_idx) in layout.iter().enumerate() {
            let Some(picto) = face.sequence.get(seq_idx) else {
                log::warn!("Face '{}' has no pictogram at position {}", face.face, seq_idx);
                continue;
            };
            let color = face.cell_colors.get(grid_idx).cloned().unwrap_or_else(|| CellColor {
                fg: String::new(),
                bg: String::new(),
            });
            pool.push(Piece {
                name: picto.name.clone(),
                color,
            });
        }
    }

    pool.shuffle(rng);
    let mut pieces = pool.into_iter();

    let faces: Vec<Face> = cube
        .faces
        .iter()
        .map(|face| {
            let layout = layout_indexes(face.read_order.corner, face.read_order.direction);
            let mut sequence = face.sequence.clone();
            let mut cell_colors = face.cell_colors.clone();
            for (seq_idx, &grid_idx) in layout.iter().enumerate().take(sequence.len()) {
                let Some(piece) = pieces.next() else { break };
                sequence[seq_idx] = Pictogram::new(piece.name, random_orientation(rng));
                if let Some(cell) = cell_colors.get_mut(grid_idx) {
                    *cell = piece.color;
                }
            }
            Face {
                sequence,
                cell_colors,
                ..face.clone()
            }
        })
        .collect();

    let active = *FaceId::ALL.choose(rng).unwrap_or(&FaceId::Front);
    log::debug!("Scrambled {} faces, showing '{}'", faces.len(), active);
    CubeState::new(faces, active)
}

fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    Orientation::ALL[rng.gen_range(0..Orientation::ALL.len())]
}
