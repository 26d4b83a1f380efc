//! Board dimensions and flat-index geometry.

use derive_more::{Display, Error};

/// Dimensions of a sliding-tile board.
///
/// A `Dims` value fixes the column and row counts for the lifetime of every
/// value derived from it (boards, codecs, distance tables). Cells are
/// addressed by row-major flat indices in `[0, columns * rows)`.
///
/// Construction validates that the board is non-empty and has at most
/// [`Dims::MAX_CELLS`] cells so that the number of arrangements fits the
/// permutation codec's `u64` index space.
///
/// # Examples
///
/// ```
/// use taquin_core::Dims;
///
/// let dims = Dims::new(3, 3)?;
/// assert_eq!(dims.size(), 9);
/// assert_eq!(dims.row_of(5), 1);
/// assert_eq!(dims.column_of(5), 2);
/// assert_eq!(dims.index_of(1, 2), 5);
/// # Ok::<(), taquin_core::DimsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{columns}x{rows}")]
pub struct Dims {
    columns: u8,
    rows: u8,
}

impl Dims {
    /// Maximum number of cells a board may have.
    ///
    /// 20! is the largest factorial that fits in a `u64`, so boards beyond
    /// 20 cells cannot be indexed by the permutation codec.
    pub const MAX_CELLS: usize = 20;

    /// Creates validated board dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`DimsError::Empty`] if either side is zero, and
    /// [`DimsError::TooLarge`] if `columns * rows` exceeds
    /// [`Dims::MAX_CELLS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::{Dims, DimsError};
    ///
    /// assert!(Dims::new(4, 3).is_ok());
    /// assert!(matches!(Dims::new(0, 3), Err(DimsError::Empty { .. })));
    /// assert!(matches!(Dims::new(5, 5), Err(DimsError::TooLarge { .. })));
    /// ```
    pub fn new(columns: u8, rows: u8) -> Result<Self, DimsError> {
        if columns == 0 || rows == 0 {
            return Err(DimsError::Empty { columns, rows });
        }
        let cells = usize::from(columns) * usize::from(rows);
        if cells > Self::MAX_CELLS {
            return Err(DimsError::TooLarge {
                columns,
                rows,
                cells,
            });
        }
        Ok(Self { columns, rows })
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn columns(&self) -> u8 {
        self.columns
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Returns the total number of cells (`columns * rows`).
    #[must_use]
    pub const fn size(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Returns the row containing a flat index.
    #[must_use]
    pub const fn row_of(&self, index: usize) -> usize {
        index / self.columns as usize
    }

    /// Returns the column containing a flat index.
    #[must_use]
    pub const fn column_of(&self, index: usize) -> usize {
        index % self.columns as usize
    }

    /// Returns the flat index of the cell at `(row, column)`.
    #[must_use]
    pub const fn index_of(&self, row: usize, column: usize) -> usize {
        row * self.columns as usize + column
    }
}

/// Errors that can occur when constructing [`Dims`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DimsError {
    /// One of the sides is zero, leaving no cells.
    #[display("board has no cells: {columns}x{rows}")]
    Empty {
        /// Requested column count.
        columns: u8,
        /// Requested row count.
        rows: u8,
    },
    /// The board has more cells than the codec can index.
    #[display("{columns}x{rows} board has {cells} cells, more than the supported 20")]
    TooLarge {
        /// Requested column count.
        columns: u8,
        /// Requested row count.
        rows: u8,
        /// Resulting cell count.
        cells: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_round_trip() {
        let dims = Dims::new(4, 3).unwrap();
        assert_eq!(dims.columns(), 4);
        assert_eq!(dims.rows(), 3);
        assert_eq!(dims.size(), 12);

        for index in 0..dims.size() {
            let row = dims.row_of(index);
            let column = dims.column_of(index);
            assert!(row < 3);
            assert!(column < 4);
            assert_eq!(dims.index_of(row, column), index);
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            Dims::new(0, 5),
            Err(DimsError::Empty {
                columns: 0,
                rows: 5
            })
        );
        assert_eq!(
            Dims::new(5, 0),
            Err(DimsError::Empty {
                columns: 5,
                rows: 0
            })
        );
    }

    #[test]
    fn test_rejects_oversized() {
        // 4x5 = 20 is the largest accepted board.
        assert!(Dims::new(4, 5).is_ok());
        assert_eq!(
            Dims::new(3, 7),
            Err(DimsError::TooLarge {
                columns: 3,
                rows: 7,
                cells: 21
            })
        );
    }

    #[test]
    fn test_degenerate_single_cell() {
        let dims = Dims::new(1, 1).unwrap();
        assert_eq!(dims.size(), 1);
        assert_eq!(dims.row_of(0), 0);
        assert_eq!(dims.column_of(0), 0);
    }

    #[test]
    fn test_display() {
        let dims = Dims::new(4, 3).unwrap();
        assert_eq!(dims.to_string(), "4x3");
    }
}
