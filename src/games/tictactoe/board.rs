//! Tic-tac-toe board, addressed by linear cell index.
//!
//! ```text
//!  0 | 1 | 2
//!  3 | 4 | 5
//!  6 | 7 | 8
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Grid, MoveError, ParseBoardError};
use crate::rules::Outcome;

/// A player's mark. X moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Rows, columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 board of optional marks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    grid: Grid<Option<Mark>, 3, 3>,
}

impl Board {
    /// Number of cells.
    pub const CELLS: usize = 9;

    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from its nine cells in index order.
    #[must_use]
    pub fn from_cells(cells: [Option<Mark>; 9]) -> Self {
        let mut board = Self::new();
        for (index, cell) in cells.into_iter().enumerate() {
            board.grid = board.with_cell(index, cell);
        }
        board
    }

    /// The nine cells in index order.
    #[must_use]
    pub fn cells(&self) -> [Option<Mark>; 9] {
        let mut cells = [None; 9];
        for ((row, col), cell) in self.grid.iter() {
            cells[row * 3 + col] = *cell;
        }
        cells
    }

    /// Mark at `index`; `None` for empty or out-of-range cells.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.grid.get_index(index).copied().flatten()
    }

    /// Whether `index` is on the board and empty.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        matches!(self.grid.get_index(index), Some(None))
    }

    /// Board with `mark` placed at `index`. The receiver is unchanged.
    pub fn place(&self, index: usize, mark: Mark) -> Result<Board, MoveError> {
        match self.grid.get_index(index) {
            None => Err(MoveError::CellOutOfRange { index }),
            Some(Some(_)) => Err(MoveError::CellOccupied { index }),
            Some(None) => Ok(Board {
                grid: self.with_cell(index, Some(mark)),
            }),
        }
    }

    /// Empty cell indices, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..Self::CELLS).filter(|&index| self.is_open(index))
    }

    /// Number of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.grid.count(|cell| *cell == Some(mark))
    }

    /// Mark to play next, assuming X opened and turns alternated.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Mark owning a complete line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.get(a)?;
            (self.get(b) == Some(mark) && self.get(c) == Some(mark)).then_some(mark)
        })
    }

    /// The line that won the game, for highlighting.
    #[must_use]
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LINES.iter().copied().find(|&[a, b, c]| {
            self.get(a)
                .is_some_and(|mark| self.get(b) == Some(mark) && self.get(c) == Some(mark))
        })
    }

    /// True iff no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.grid.count(Option::is_none) == 0
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome<Mark> {
        match self.winner() {
            Some(mark) => Outcome::Winner(mark),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    fn with_cell(&self, index: usize, cell: Option<Mark>) -> Grid<Option<Mark>, 3, 3> {
        let mut grid = self.grid;
        if let Some(slot) = grid
            .coord_of(index)
            .and_then(|(row, col)| grid.get_mut(row, col))
        {
            *slot = cell;
        }
        grid
    }
}

/// Three rows of `X`, `O` and `.`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for cell in row {
                write!(f, "{}", cell.map_or('.', Mark::symbol))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Nine cells of `X`, `O` and `.`/`-` in index order; whitespace ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<Option<Mark>> = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' | 'x' => Ok(Some(Mark::X)),
                'O' | 'o' => Ok(Some(Mark::O)),
                '.' | '-' => Ok(None),
                other => Err(ParseBoardError::InvalidCell(other)),
            })
            .collect::<Result<_, _>>()?;

        let cells: [Option<Mark>; 9] =
            cells
                .try_into()
                .map_err(|cells: Vec<_>| ParseBoardError::WrongLength {
                    expected: Self::CELLS,
                    found: cells.len(),
                })?;
        Ok(Self::from_cells(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().count(), 9);
        assert!(!board.is_full());
        assert_eq!(board.outcome(), Outcome::InProgress);
        assert_eq!(board.to_move(), Mark::X);
    }

    #[test]
    fn test_place_returns_new_board() {
        let board = Board::new();
        let next = board.place(4, Mark::X).unwrap();

        assert_eq!(board.get(4), None);
        assert_eq!(next.get(4), Some(Mark::X));
        assert_eq!(next.to_move(), Mark::O);
    }

    #[test]
    fn test_place_rejects_bad_cells() {
        let board = Board::new().place(0, Mark::X).unwrap();

        assert_eq!(
            board.place(0, Mark::O),
            Err(MoveError::CellOccupied { index: 0 })
        );
        assert_eq!(
            board.place(9, Mark::O),
            Err(MoveError::CellOutOfRange { index: 9 })
        );
    }

    #[test]
    fn test_winner_rows_columns_diagonals() {
        assert_eq!("XXX OO. ...".parse::<Board>().unwrap().winner(), Some(Mark::X));
        assert_eq!("XO. XO. .O.".parse::<Board>().unwrap().winner(), Some(Mark::O));
        assert_eq!("X.O .XO ..X".parse::<Board>().unwrap().winner(), Some(Mark::X));
        assert_eq!("X.O XO. O..".parse::<Board>().unwrap().winner(), Some(Mark::O));
        assert_eq!("XOX XOO OXX".parse::<Board>().unwrap().winner(), None);
    }

    #[test]
    fn test_winning_line() {
        let board: Board = "X.O .XO ..X".parse().unwrap();
        assert_eq!(board.winning_line(), Some([0, 4, 8]));
        assert_eq!(Board::new().winning_line(), None);
    }

    #[test]
    fn test_draw_outcome() {
        let board: Board = "XOX XOO OXO".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(board.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO.\n.X.\n..O".parse().unwrap();
        assert_eq!(board.to_string(), "XO.\n.X.\n..O\n");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongLength { expected: 9, found: 2 })
        );
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(ParseBoardError::InvalidCell('?'))
        );
    }

    #[test]
    fn test_cells_roundtrip() {
        let board: Board = "X.O .X. O..".parse().unwrap();
        assert_eq!(Board::from_cells(board.cells()), board);
    }

    #[test]
    fn test_serialization() {
        let board = Board::new().place(2, Mark::O).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
