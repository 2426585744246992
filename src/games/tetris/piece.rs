//! Tetromino catalog and piece geometry.
//!
//! Every piece is a 4x4 occupancy mask plus a signed top-left position in
//! board coordinates (`x` = column, `y` = row, row 0 at the top). Rotation
//! works on the mask alone; the position is unchanged.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::core::RandomSource;

use super::board::WIDTH;

/// Side length of a piece mask.
pub const MASK_SIZE: usize = 4;

/// Column of a freshly spawned piece's mask origin.
pub const SPAWN_X: i32 = WIDTH as i32 / 2 - 2;

/// Row of a freshly spawned piece's mask origin.
pub const SPAWN_Y: i32 = 0;

/// The seven tetromino types.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Color identifier used by the presentation layer, `1..=7`.
    #[must_use]
    pub fn color_id(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Kind for a color identifier.
    #[must_use]
    pub fn from_color_id(id: u8) -> Option<PieceKind> {
        PieceKind::ALL.into_iter().find(|kind| kind.color_id() == id)
    }

    /// Single-letter symbol, as used in board fixtures.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }

    #[must_use]
    pub fn from_symbol(c: char) -> Option<PieceKind> {
        PieceKind::ALL.into_iter().find(|kind| kind.symbol() == c)
    }

    /// Spawn orientation of this kind.
    #[must_use]
    pub fn shape(self) -> Shape {
        let rows = match self {
            PieceKind::I => [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
            PieceKind::O => [[0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
            PieceKind::T => [[0, 0, 0, 0], [0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0]],
            PieceKind::S => [[0, 0, 0, 0], [0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0]],
            PieceKind::Z => [[0, 0, 0, 0], [1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
            PieceKind::J => [[0, 0, 0, 0], [1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0]],
            PieceKind::L => [[0, 0, 0, 0], [0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0]],
        };
        Shape::from_rows(rows)
    }

    /// Uniformly random kind.
    pub fn random(rng: &mut impl RandomSource) -> PieceKind {
        PieceKind::ALL[rng.gen_index(PieceKind::ALL.len())]
    }
}

/// 4x4 occupancy mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    rows: [[u8; MASK_SIZE]; MASK_SIZE],
}

impl Shape {
    /// Build from 0/1 rows; any non-zero value counts as occupied.
    #[must_use]
    pub fn from_rows(rows: [[u8; MASK_SIZE]; MASK_SIZE]) -> Self {
        let mut mask = [[0; MASK_SIZE]; MASK_SIZE];
        for (dst, src) in mask.iter_mut().zip(rows) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = u8::from(s != 0);
            }
        }
        Self { rows: mask }
    }

    #[must_use]
    pub fn rows(&self) -> &[[u8; MASK_SIZE]; MASK_SIZE] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|&c| c != 0)
    }

    /// Occupied `(row, col)` offsets in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &c)| c != 0)
                .map(move |(c, _)| (r, c))
        })
    }

    /// 90 degrees clockwise: transpose, then reverse each row.
    #[must_use]
    pub fn rotated_cw(&self) -> Shape {
        let mut out = [[0; MASK_SIZE]; MASK_SIZE];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.rows[MASK_SIZE - 1 - c][r];
            }
        }
        Shape { rows: out }
    }
}

/// Top-left offset of a piece mask in board coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A falling tetromino.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub position: Position,
}

impl Piece {
    /// `kind` in its spawn orientation at the spawn position.
    #[must_use]
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: kind.shape(),
            position: Position::new(SPAWN_X, SPAWN_Y),
        }
    }

    /// Spawn a uniformly random kind.
    pub fn random(rng: &mut impl RandomSource) -> Self {
        Self::spawn(PieceKind::random(rng))
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// This piece moved by `(dx, dy)`, or `None` if the position overflows.
    #[must_use]
    pub fn shifted(&self, dx: i32, dy: i32) -> Option<Self> {
        let x = self.position.x.checked_add(dx)?;
        let y = self.position.y.checked_add(dy)?;
        Some(self.with_position(Position::new(x, y)))
    }

    /// This piece rotated 90 degrees clockwise in place.
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// Occupied cells as signed `(row, col)` board coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let origin = self.position;
        self.shape
            .cells()
            .map(move |(r, c)| {
                (
                    origin.y.saturating_add(r as i32),
                    origin.x.saturating_add(c as i32),
                )
            })
    }
}
