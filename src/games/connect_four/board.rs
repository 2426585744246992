//! Connect-four board: 6 rows by 7 columns, row 0 at the top.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Grid, MoveError, ParseBoardError};
use crate::rules::Outcome;

pub const ROWS: usize = 6;
pub const COLUMNS: usize = 7;
pub const CENTER_COLUMN: usize = COLUMNS / 2;

/// A player's token. Red moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    Red,
    Yellow,
}

impl Token {
    /// The other token.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Token::Red => Token::Yellow,
            Token::Yellow => Token::Red,
        }
    }

    fn symbol(self) -> char {
        match self {
            Token::Red => 'R',
            Token::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Red => write!(f, "red"),
            Token::Yellow => write!(f, "yellow"),
        }
    }
}

/// A line of four cells as `(row, col)`.
pub type Window = [(usize, usize); 4];

/// Every horizontal, vertical and diagonal line of four on the board.
pub const WINDOWS: [Window; 69] = build_windows();

const fn build_windows() -> [Window; 69] {
    // right, down, down-right, up-right
    const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

    let mut windows = [[(0, 0); 4]; 69];
    let mut n = 0;
    let mut d = 0;
    while d < DIRECTIONS.len() {
        let (dr, dc) = DIRECTIONS[d];
        let mut row = 0;
        while row < ROWS {
            let mut col = 0;
            while col < COLUMNS {
                let end_row = row as isize + 3 * dr;
                let end_col = col as isize + 3 * dc;
                if end_row >= 0 && end_row < ROWS as isize && end_col < COLUMNS as isize {
                    let mut k = 0;
                    while k < 4 {
                        windows[n][k] = (
                            (row as isize + k as isize * dr) as usize,
                            (col as isize + k as isize * dc) as usize,
                        );
                        k += 1;
                    }
                    n += 1;
                }
                col += 1;
            }
            row += 1;
        }
        d += 1;
    }
    windows
}

/// 6x7 board of optional tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    grid: Grid<Option<Token>, COLUMNS, ROWS>,
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Token at `(row, col)`; `None` for empty or out-of-range cells.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Token> {
        self.grid.get(row, col).copied().flatten()
    }

    /// Row a token dropped into `column` would land in.
    ///
    /// `None` if the column is out of range or full.
    #[must_use]
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= COLUMNS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.get(row, column).is_none())
    }

    /// Whether the top cell of `column` is taken. Out-of-range columns
    /// count as full.
    #[must_use]
    pub fn is_column_full(&self, column: usize) -> bool {
        !matches!(self.grid.get(0, column), Some(None))
    }

    /// Board with `token` dropped into `column`. The receiver is unchanged.
    pub fn drop_token(&self, column: usize, token: Token) -> Result<Board, MoveError> {
        if column >= COLUMNS {
            return Err(MoveError::ColumnOutOfRange { column });
        }
        let row = self
            .landing_row(column)
            .ok_or(MoveError::ColumnFull { column })?;

        let mut next = *self;
        next.grid.set(row, column, Some(token))?;
        Ok(next)
    }

    /// Columns that can still take a token, ascending.
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLUMNS).filter(|&column| !self.is_column_full(column))
    }

    /// Number of tokens of one color.
    #[must_use]
    pub fn count(&self, token: Token) -> usize {
        self.grid.count(|cell| *cell == Some(token))
    }

    /// Token to play next, assuming red opened and turns alternated.
    #[must_use]
    pub fn to_move(&self) -> Token {
        if self.count(Token::Red) > self.count(Token::Yellow) {
            Token::Yellow
        } else {
            Token::Red
        }
    }

    /// Token filling the first complete window, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Token> {
        let window = self.winning_window()?;
        let (row, col) = window[0];
        self.get(row, col)
    }

    /// The first window held entirely by one token, for highlighting.
    #[must_use]
    pub fn winning_window(&self) -> Option<Window> {
        WINDOWS.iter().copied().find(|window| {
            let (row, col) = window[0];
            self.get(row, col).is_some_and(|token| {
                window
                    .iter()
                    .all(|&(row, col)| self.get(row, col) == Some(token))
            })
        })
    }

    /// True iff the top row is occupied; gravity fills every row below.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.grid.row(0).iter().all(Option::is_some)
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome<Token> {
        match self.winner() {
            Some(token) => Outcome::Winner(token),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }
}

/// Six rows of `R`, `Y` and `.`, top row first.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for cell in row {
                write!(f, "{}", cell.map_or('.', Token::symbol))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// 42 cells of `R`, `Y` and `.`/`-`, top row first; whitespace ignored.
/// Tokens must rest on the floor or on another token.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<Option<Token>> = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'R' | 'r' => Ok(Some(Token::Red)),
                'Y' | 'y' => Ok(Some(Token::Yellow)),
                '.' | '-' => Ok(None),
                other => Err(ParseBoardError::InvalidCell(other)),
            })
            .collect::<Result<_, _>>()?;

        if cells.len() != ROWS * COLUMNS {
            return Err(ParseBoardError::WrongLength {
                expected: ROWS * COLUMNS,
                found: cells.len(),
            });
        }

        let mut board = Board::new();
        for (index, cell) in cells.into_iter().enumerate() {
            let (row, col) = (index / COLUMNS, index % COLUMNS);
            if let Some(slot) = board.grid.get_mut(row, col) {
                *slot = cell;
            }
        }

        for col in 0..COLUMNS {
            let floating = (1..ROWS)
                .any(|row| board.get(row - 1, col).is_some() && board.get(row, col).is_none());
            if floating {
                return Err(ParseBoardError::FloatingToken { column: col });
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [&str; 6]) -> Board {
        rows.concat().parse().unwrap()
    }

    #[test]
    fn test_window_table() {
        let horizontal = WINDOWS.iter().filter(|w| w[0].0 == w[3].0).count();
        let vertical = WINDOWS.iter().filter(|w| w[0].1 == w[3].1).count();

        assert_eq!(horizontal, 24);
        assert_eq!(vertical, 21);
        assert_eq!(WINDOWS.len() - horizontal - vertical, 24);
        assert!(WINDOWS
            .iter()
            .flatten()
            .all(|&(row, col)| row < ROWS && col < COLUMNS));
    }

    #[test]
    fn test_drop_uses_gravity() {
        let b = Board::new().drop_token(2, Token::Red).unwrap();
        assert_eq!(b.get(5, 2), Some(Token::Red));

        let b = b.drop_token(2, Token::Yellow).unwrap();
        assert_eq!(b.get(4, 2), Some(Token::Yellow));
        assert_eq!(b.landing_row(2), Some(3));
    }

    #[test]
    fn test_drop_does_not_mutate_input() {
        let b = Board::new();
        let _ = b.drop_token(0, Token::Red).unwrap();
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_drop_rejections() {
        let mut b = Board::new();
        for i in 0..ROWS {
            let token = if i % 2 == 0 { Token::Red } else { Token::Yellow };
            b = b.drop_token(6, token).unwrap();
        }

        assert!(b.is_column_full(6));
        assert_eq!(b.landing_row(6), None);
        assert_eq!(
            b.drop_token(6, Token::Red),
            Err(MoveError::ColumnFull { column: 6 })
        );
        assert_eq!(
            b.drop_token(7, Token::Red),
            Err(MoveError::ColumnOutOfRange { column: 7 })
        );
        assert_eq!(b.legal_columns().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_winner_all_directions() {
        let horizontal = board([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            ".YYYY..",
        ]);
        let vertical = board([
            ".......",
            ".......",
            "R......",
            "R......",
            "R......",
            "RY.YY..",
        ]);
        let diagonal = board([
            ".......",
            ".......",
            "...R...",
            "..RY...",
            ".RYY...",
            "RYYR...",
        ]);
        let anti_diagonal = board([
            ".......",
            ".......",
            "...Y...",
            "...RY..",
            "...RRY.",
            "...RRRY",
        ]);

        assert_eq!(horizontal.winner(), Some(Token::Yellow));
        assert_eq!(vertical.winner(), Some(Token::Red));
        assert_eq!(diagonal.winner(), Some(Token::Red));
        assert_eq!(anti_diagonal.winner(), Some(Token::Yellow));
        assert_eq!(
            anti_diagonal.winning_window(),
            Some([(2, 3), (3, 4), (4, 5), (5, 6)])
        );
    }

    #[test]
    fn test_three_is_not_a_win() {
        let b = board([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "RRR.YYY",
        ]);
        assert_eq!(b.winner(), None);
        assert_eq!(b.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_draw() {
        let b = board([
            "RRYYRRY",
            "YYRRYYR",
            "RRYYRRY",
            "YYRRYYR",
            "RRYYRRY",
            "YYRRYYR",
        ]);
        assert!(b.is_full());
        assert_eq!(b.winner(), None);
        assert_eq!(b.outcome(), Outcome::Draw);
        assert_eq!(b.legal_columns().count(), 0);
    }

    #[test]
    fn test_parse_rejects_floating_tokens() {
        let floating = [
            ".......",
            ".......",
            ".......",
            ".......",
            "...R...",
            ".......",
        ]
        .concat();
        assert_eq!(
            floating.parse::<Board>(),
            Err(ParseBoardError::FloatingToken { column: 3 })
        );
        assert!(matches!(
            "RY".parse::<Board>(),
            Err(ParseBoardError::WrongLength { expected: 42, found: 2 })
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        let b = Board::new()
            .drop_token(3, Token::Red)
            .unwrap()
            .drop_token(3, Token::Yellow)
            .unwrap();
        assert_eq!(b.to_string().parse::<Board>().unwrap(), b);
        assert_eq!(b.to_move(), Token::Red);
    }
}
