//! The 10x20 well, row 0 at the top.
//!
//! Settled cells remember which kind of piece filled them so the
//! presentation layer can color them. Pieces may hang above row 0 while
//! spawning; those cells are never collision-checked and never merged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Grid, ParseBoardError};

use super::piece::{Piece, PieceKind};

pub const WIDTH: usize = 10;
pub const HEIGHT: usize = 20;

/// Settled cells of the well.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    grid: Grid<Option<PieceKind>, WIDTH, HEIGHT>,
}

impl Board {
    /// An empty well.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<PieceKind> {
        self.grid.get(row, col).copied().flatten()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid<Option<PieceKind>, WIDTH, HEIGHT> {
        &self.grid
    }

    /// Color ids per cell, `0` for empty.
    #[must_use]
    pub fn color_ids(&self) -> [[u8; WIDTH]; HEIGHT] {
        let mut out = [[0; WIDTH]; HEIGHT];
        for ((row, col), cell) in self.grid.iter() {
            out[row][col] = cell.map_or(0, PieceKind::color_id);
        }
        out
    }

    /// Number of settled cells.
    #[must_use]
    pub fn filled_cells(&self) -> usize {
        self.grid.count(Option::is_some)
    }

    /// Whether `piece` fits where it is.
    ///
    /// Every occupied mask cell must land in a column in `0..WIDTH` and a
    /// row below `HEIGHT`; cells at row 0 or lower must also be empty.
    #[must_use]
    pub fn is_valid_position(&self, piece: &Piece) -> bool {
        piece.cells().all(|(row, col)| {
            if row < 0 {
                return (0..WIDTH as i32).contains(&col);
            }
            Grid::<Option<PieceKind>, WIDTH, HEIGHT>::contains(row, col)
                && self.get(row as usize, col as usize).is_none()
        })
    }

    /// Board with `piece` merged in. Cells outside the well are dropped.
    #[must_use]
    pub fn place(&self, piece: &Piece) -> Board {
        let mut next = *self;
        for (row, col) in piece.cells() {
            if row < 0 || col < 0 {
                continue;
            }
            if let Some(cell) = next.grid.get_mut(row as usize, col as usize) {
                *cell = Some(piece.kind);
            }
        }
        next
    }

    /// Remove every full row, shifting the rest down.
    ///
    /// Returns the new board and the number of rows removed.
    #[must_use]
    pub fn clear_lines(&self) -> (Board, usize) {
        let mut next = *self;
        let cleared = next
            .grid
            .clear_rows(|row| row.iter().all(Option::is_some));
        (next, cleared)
    }

    /// `piece` moved straight down as far as it fits.
    ///
    /// Never moves the mask origin below the last row, so a mask with no
    /// occupied cells stops there.
    #[must_use]
    pub fn ghost(&self, piece: &Piece) -> Piece {
        let mut ghost = *piece;
        while ghost.position.y < HEIGHT as i32 - 1 {
            match ghost.shifted(0, 1) {
                Some(lower) if self.is_valid_position(&lower) => ghost = lower,
                _ => break,
            }
        }
        ghost
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for cell in row {
                let c = cell.map_or('.', PieceKind::symbol);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse 200 cells: a kind letter (`IOTSZJL`) or `.` for empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<Option<PieceKind>> = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '.' | '-' => Ok(None),
                other => PieceKind::from_symbol(other)
                    .map(Some)
                    .ok_or(ParseBoardError::InvalidCell(other)),
            })
            .collect::<Result<_, _>>()?;

        if cells.len() != WIDTH * HEIGHT {
            return Err(ParseBoardError::WrongLength {
                expected: WIDTH * HEIGHT,
                found: cells.len(),
            });
        }

        let mut board = Board::new();
        for (index, cell) in cells.into_iter().enumerate() {
            if let Some(slot) = board.grid.get_mut(index / WIDTH, index % WIDTH) {
                *slot = cell;
            }
        }
        Ok(board)
    }
}
