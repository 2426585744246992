//! Static evaluation for the connect-four search.
//!
//! Center-column tokens are worth 3 each. Every window of four is scored by
//! its composition; windows holding both colors are dead and score nothing.
//! An opponent three is weighted well above our own three so the bot prefers
//! blocking to building.

use super::board::{Board, Token, Window, CENTER_COLUMN, ROWS, WINDOWS};

pub const CENTER_WEIGHT: i32 = 3;
pub const FOUR_WEIGHT: i32 = 100;
pub const THREE_WEIGHT: i32 = 10;
pub const TWO_WEIGHT: i32 = 2;
pub const OPPONENT_THREE_WEIGHT: i32 = 80;

/// Score `board` from `side`'s point of view.
#[must_use]
pub fn evaluate(board: &Board, side: Token) -> i32 {
    let center: i32 = (0..ROWS)
        .filter_map(|row| board.get(row, CENTER_COLUMN))
        .map(|token| if token == side { CENTER_WEIGHT } else { -CENTER_WEIGHT })
        .sum();

    let windows: i32 = WINDOWS
        .iter()
        .map(|window| score_window(board, window, side))
        .sum();

    center + windows
}

fn score_window(board: &Board, window: &Window, side: Token) -> i32 {
    let mut own = 0;
    let mut theirs = 0;
    for &(row, col) in window {
        match board.get(row, col) {
            Some(token) if token == side => own += 1,
            Some(_) => theirs += 1,
            None => {}
        }
    }

    match (own, theirs) {
        (4, 0) => FOUR_WEIGHT,
        (3, 0) => THREE_WEIGHT,
        (2, 0) => TWO_WEIGHT,
        (0, 4) => -FOUR_WEIGHT,
        (0, 3) => -OPPONENT_THREE_WEIGHT,
        (0, 2) => -TWO_WEIGHT,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [&str; 6]) -> Board {
        rows.concat().parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_neutral() {
        assert_eq!(evaluate(&Board::new(), Token::Red), 0);
    }

    #[test]
    fn test_single_center_token() {
        let b = Board::new().drop_token(CENTER_COLUMN, Token::Red).unwrap();
        // One own token per window scores nothing; only the center bonus counts.
        assert_eq!(evaluate(&b, Token::Red), CENTER_WEIGHT);
        assert_eq!(evaluate(&b, Token::Yellow), -CENTER_WEIGHT);
    }

    #[test]
    fn test_open_two_on_the_floor() {
        let b = board([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "RR.....",
        ]);
        // Only the floor window starting at column 0 holds both tokens.
        assert_eq!(evaluate(&b, Token::Red), TWO_WEIGHT);
    }

    #[test]
    fn test_threats_are_asymmetric() {
        let b = board([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "YYY....",
        ]);
        // [0..4] is an open three; [1..5] an open two.
        assert_eq!(
            evaluate(&b, Token::Red),
            -OPPONENT_THREE_WEIGHT - TWO_WEIGHT
        );
        assert_eq!(evaluate(&b, Token::Yellow), THREE_WEIGHT + TWO_WEIGHT);
    }

    #[test]
    fn test_mixed_windows_are_ignored() {
        let b = board([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "RY.....",
        ]);
        assert_eq!(evaluate(&b, Token::Red), 0);
    }
}
