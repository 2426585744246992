//! Fixed-size rectangular boards.
//!
//! Every game in the arcade stores its board in a `Grid`: a const-generic,
//! row-major array whose dimensions are part of the type. Row 0 is the top
//! row. Reads and writes are bounds-checked; nothing ever resizes a grid.
//!
//! ```
//! use rust_arcade::core::Grid;
//!
//! let mut grid: Grid<u8, 3, 2> = Grid::new();
//! grid.set(1, 2, 9).unwrap();
//!
//! assert_eq!(grid.get(1, 2), Some(&9));
//! assert_eq!(grid.get(2, 0), None);
//! assert_eq!(grid.index_of(1, 2), Some(5));
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use super::error::MoveError;

/// A `W` x `H` grid of cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid<T, const W: usize, const H: usize> {
    cells: [[T; W]; H],
}

impl<T: Copy + Default, const W: usize, const H: usize> Grid<T, W, H> {
    /// Create a grid with every cell set to `T::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::filled(T::default())
    }

    /// Move rows matching `pred` out of the grid.
    ///
    /// Remaining rows keep their relative order and settle to the bottom;
    /// the same number of default rows is inserted at the top. Returns the
    /// number of rows removed.
    pub fn clear_rows(&mut self, pred: impl Fn(&[T; W]) -> bool) -> usize {
        let mut write = H;
        for read in (0..H).rev() {
            if pred(&self.cells[read]) {
                continue;
            }
            write -= 1;
            if write != read {
                self.cells[write] = self.cells[read];
            }
        }

        let cleared = write;
        for row in &mut self.cells[..cleared] {
            *row = [T::default(); W];
        }
        cleared
    }
}

impl<T: Copy, const W: usize, const H: usize> Grid<T, W, H> {
    /// Number of columns.
    pub const WIDTH: usize = W;
    /// Number of rows.
    pub const HEIGHT: usize = H;
    /// Total cell count.
    pub const LEN: usize = W * H;

    /// Create a grid with every cell set to `value`.
    #[must_use]
    pub fn filled(value: T) -> Self {
        Self {
            cells: [[value; W]; H],
        }
    }

    /// Build a grid from its rows.
    #[must_use]
    pub fn from_rows(cells: [[T; W]; H]) -> Self {
        Self { cells }
    }

    /// Whether a signed coordinate falls inside the grid.
    #[must_use]
    pub fn contains(row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < H && (col as usize) < W
    }

    /// Row-major index of a cell, or `None` if out of bounds.
    #[must_use]
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < H && col < W).then_some(row * W + col)
    }

    /// `(row, col)` of a row-major index, or `None` if out of bounds.
    #[must_use]
    pub fn coord_of(&self, index: usize) -> Option<(usize, usize)> {
        (index < W * H).then_some((index / W, index % W))
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.cells.get(row)?.get(col)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.cells.get_mut(row)?.get_mut(col)
    }

    /// Cell at a row-major index.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&T> {
        let (row, col) = self.coord_of(index)?;
        self.get(row, col)
    }

    /// Write a cell, rejecting coordinates outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MoveError> {
        let cell = self
            .get_mut(row, col)
            .ok_or(MoveError::OutOfBounds { row, col })?;
        *cell = value;
        Ok(())
    }

    /// A single row. Panics if `row >= H`, like slice indexing.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T; W] {
        &self.cells[row]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T; W]> {
        self.cells.iter()
    }

    /// All cells in row-major order with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, cell)| ((r, c), cell))
        })
    }

    /// Number of cells matching `pred`.
    #[must_use]
    pub fn count(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.cells.iter().flatten().filter(|cell| pred(cell)).count()
    }
}

impl<T: Copy + Default, const W: usize, const H: usize> Default for Grid<T, W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const W: usize, const H: usize> fmt::Debug for Grid<T, W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cells.iter()).finish()
    }
}

// serde only implements arrays up to a fixed length, so grids go through
// nested sequences and are validated against `W` x `H` on the way back in.
impl<T: Serialize, const W: usize, const H: usize> Serialize for Grid<T, W, H> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.iter().map(|row| row.as_slice()))
    }
}

impl<'de, T, const W: usize, const H: usize> Deserialize<'de> for Grid<T, W, H>
where
    T: Deserialize<'de> + Copy + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GridVisitor<T, const W: usize, const H: usize>(PhantomData<T>);

        impl<'de, T, const W: usize, const H: usize> Visitor<'de> for GridVisitor<T, W, H>
        where
            T: Deserialize<'de> + Copy + Default,
        {
            type Value = Grid<T, W, H>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{H} rows of {W} cells")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut grid = Grid::<T, W, H>::new();
                for r in 0..H {
                    let row: Vec<T> = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(r, &self))?;
                    if row.len() != W {
                        return Err(de::Error::invalid_length(row.len(), &self));
                    }
                    grid.cells[r].copy_from_slice(&row);
                }
                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(H + 1, &self));
                }
                Ok(grid)
            }
        }

        deserializer.deserialize_seq(GridVisitor::<T, W, H>(PhantomData))
    }
}
