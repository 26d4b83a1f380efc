//! Board state and the legal-move transition function.

use std::{
    fmt::{self, Display},
    ops::Index,
};

use crate::dims::Dims;

/// One cell's content: a numbered tile, or the blank.
///
/// Tile identifiers live in `[0, N)` for an `N`-cell board, with `0`
/// reserved for the blank. Range validation happens at board construction
/// ([`Board::from_values`]), not per tile.
///
/// # Examples
///
/// ```
/// use taquin_core::{Dims, Tile};
///
/// let dims = Dims::new(3, 3)?;
/// assert!(Tile::BLANK.is_blank());
/// assert_eq!(Tile::new(1).goal_index(dims), 0);
/// assert_eq!(Tile::BLANK.goal_index(dims), 8);
/// # Ok::<(), taquin_core::DimsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(u8);

impl Tile {
    /// The blank cell, tile identifier `0`.
    pub const BLANK: Self = Self(0);

    /// Creates a tile from its identifier.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the tile identifier.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` for the blank.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }

    /// Returns the flat index this tile occupies on a solved board.
    ///
    /// Tile `t` belongs at index `t - 1`; the blank belongs at the last
    /// cell.
    #[must_use]
    pub const fn goal_index(self, dims: Dims) -> usize {
        if self.is_blank() {
            dims.size() - 1
        } else {
            self.0 as usize - 1
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A direction the blank may travel.
///
/// Directions describe the blank's movement, not a tile's: sliding the blank
/// `Up` moves it one row towards row zero and pulls the tile above it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Direction {
    /// Towards row zero.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column zero.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the direction that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A sliding-tile board: a permutation of `[0, N)` over an `R x C` grid.
///
/// Every identifier in `[0, N)` appears exactly once; `0` is the blank. The
/// solved form is the identity permutation with the blank last:
/// `[1, 2, ..., N-1, 0]`. The blank's position is located once at
/// construction and kept in sync by every swap, so it is always valid.
///
/// The only mutation path is [`Board::try_swap`] (and its directional
/// wrapper [`Board::slide`]), which enforces grid adjacency and therefore
/// preserves the permutation invariant.
///
/// # Examples
///
/// ```
/// use taquin_core::{Board, Dims, Direction};
///
/// let dims = Dims::new(3, 3)?;
/// let mut board = Board::solved(dims);
/// assert!(board.is_solved());
/// assert_eq!(board.blank_index(), 8);
///
/// // The blank is in the bottom-right corner: it cannot go down or right.
/// assert!(!board.slide(Direction::Down));
/// assert!(!board.slide(Direction::Right));
/// assert!(board.slide(Direction::Up));
/// assert_eq!(board.blank_index(), 5);
/// # Ok::<(), taquin_core::DimsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dims: Dims,
    tiles: Vec<Tile>,
    blank: usize,
}

impl Board {
    /// Creates the solved board for the given dimensions.
    #[must_use]
    pub fn solved(dims: Dims) -> Self {
        let size = dims.size();
        let mut values: Vec<u8> = Vec::with_capacity(size);
        let mut value = 1;
        for _ in 1..size {
            values.push(value);
            value += 1;
        }
        values.push(0);
        Self::from_values_unchecked(dims, &values)
    }

    /// Creates a board from raw tile identifiers in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::LengthMismatch`] if `values` does not have
    /// exactly `dims.size()` entries, [`BoardError::TileOutOfRange`] if an
    /// identifier is not in `[0, N)`, and [`BoardError::DuplicateTile`] if
    /// an identifier appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::{Board, BoardError, Dims};
    ///
    /// let dims = Dims::new(3, 3)?;
    /// let board = Board::from_values(dims, &[2, 1, 3, 4, 5, 6, 7, 8, 0])?;
    /// assert_eq!(board.blank_index(), 8);
    ///
    /// let result = Board::from_values(dims, &[1, 1, 3, 4, 5, 6, 7, 8, 0]);
    /// assert!(matches!(result, Err(BoardError::DuplicateTile { .. })));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_values(dims: Dims, values: &[u8]) -> Result<Self, BoardError> {
        let size = dims.size();
        if values.len() != size {
            return Err(BoardError::LengthMismatch {
                expected: size,
                actual: values.len(),
            });
        }
        let mut seen = 0u32;
        for &value in values {
            if usize::from(value) >= size {
                return Err(BoardError::TileOutOfRange { tile: value, cells: size });
            }
            let bit = 1u32 << value;
            if seen & bit != 0 {
                return Err(BoardError::DuplicateTile { tile: value });
            }
            seen |= bit;
        }
        Ok(Self::from_values_unchecked(dims, values))
    }

    /// Builds a board from identifiers already known to form a permutation.
    pub(crate) fn from_values_unchecked(dims: Dims, values: &[u8]) -> Self {
        debug_assert_eq!(values.len(), dims.size());
        let tiles: Vec<Tile> = values.iter().copied().map(Tile::new).collect();
        let blank = tiles
            .iter()
            .position(|tile| tile.is_blank())
            .unwrap_or_default();
        Self { dims, tiles, blank }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub const fn dims(&self) -> Dims {
        self.dims
    }

    /// Returns the tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns the tile at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn tile_at(&self, index: usize) -> Tile {
        self.tiles[index]
    }

    /// Returns the blank's current flat index.
    #[must_use]
    pub const fn blank_index(&self) -> usize {
        self.blank
    }

    /// Returns the flat index currently holding `tile`, if present.
    #[must_use]
    pub fn tile_index(&self, tile: Tile) -> Option<usize> {
        self.tiles.iter().position(|&t| t == tile)
    }

    /// Returns `true` if every tile sits at its goal index.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(index, tile)| tile.goal_index(self.dims) == index)
    }

    /// Attempts to swap the cell at `index` with the blank.
    ///
    /// This is the single authoritative legality check: the swap succeeds
    /// iff `index` is one of the up-to-four grid-adjacent cells of the
    /// blank. Adjacency is measured on the grid, so a numerically adjacent
    /// index on a different row never qualifies (no row wrap).
    ///
    /// Returns `false` without touching the board for any illegal request,
    /// including out-of-bounds indices. Illegal moves are a normal outcome,
    /// not an error.
    pub fn try_swap(&mut self, index: usize) -> bool {
        if index >= self.tiles.len() || !self.is_adjacent(index, self.blank) {
            return false;
        }
        self.tiles.swap(index, self.blank);
        self.blank = index;
        true
    }

    /// Attempts to slide the blank one cell in `direction`.
    ///
    /// Computes the target index for the blank's travel and delegates to
    /// [`Board::try_swap`]. Returns `false` when the blank sits on the
    /// corresponding edge.
    pub fn slide(&mut self, direction: Direction) -> bool {
        match self.slide_target(direction) {
            Some(target) => self.try_swap(target),
            None => false,
        }
    }

    /// Returns the flat index the blank would move to, if in bounds.
    #[must_use]
    pub fn slide_target(&self, direction: Direction) -> Option<usize> {
        let columns = usize::from(self.dims.columns());
        let row = self.dims.row_of(self.blank);
        let column = self.dims.column_of(self.blank);
        match direction {
            Direction::Up => (row > 0).then(|| self.blank - columns),
            Direction::Down => {
                (row + 1 < usize::from(self.dims.rows())).then(|| self.blank + columns)
            }
            Direction::Left => (column > 0).then(|| self.blank - 1),
            Direction::Right => (column + 1 < columns).then(|| self.blank + 1),
        }
    }

    fn is_adjacent(&self, a: usize, b: usize) -> bool {
        let row_delta = self.dims.row_of(a).abs_diff(self.dims.row_of(b));
        let column_delta = self.dims.column_of(a).abs_diff(self.dims.column_of(b));
        row_delta + column_delta == 1
    }
}

impl Index<usize> for Board {
    type Output = Tile;

    fn index(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..usize::from(self.dims.rows()) {
            for column in 0..usize::from(self.dims.columns()) {
                let tile = self.tiles[self.dims.index_of(row, column)];
                if tile.is_blank() {
                    write!(f, " . ")?;
                } else {
                    write!(f, "{:>2} ", tile.value())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors that can occur when constructing a [`Board`] from raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The value slice does not cover the board exactly.
    #[display("expected {expected} tiles, got {actual}")]
    LengthMismatch {
        /// Cell count of the board.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
    /// An identifier does not fit the board.
    #[display("tile {tile} is out of range for a board of {cells} cells")]
    TileOutOfRange {
        /// The offending identifier.
        tile: u8,
        /// Cell count of the board.
        cells: usize,
    },
    /// An identifier appears more than once.
    #[display("tile {tile} appears more than once")]
    DuplicateTile {
        /// The repeated identifier.
        tile: u8,
    },
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn dims_3x3() -> Dims {
        Dims::new(3, 3).unwrap()
    }

    #[test]
    fn test_solved_board() {
        let board = Board::solved(dims_3x3());
        let values: Vec<u8> = board.tiles().iter().map(|tile| tile.value()).collect();
        assert_eq!(values, [1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(board.blank_index(), 8);
        assert!(board.is_solved());
    }

    #[test]
    fn test_from_values_validation() {
        let dims = dims_3x3();
        assert_eq!(
            Board::from_values(dims, &[1, 2, 3]),
            Err(BoardError::LengthMismatch {
                expected: 9,
                actual: 3
            })
        );
        assert_eq!(
            Board::from_values(dims, &[1, 2, 3, 4, 5, 6, 7, 8, 9]),
            Err(BoardError::TileOutOfRange { tile: 9, cells: 9 })
        );
        assert_eq!(
            Board::from_values(dims, &[1, 2, 3, 4, 5, 6, 7, 0, 0]),
            Err(BoardError::DuplicateTile { tile: 0 })
        );
    }

    #[test]
    fn test_try_swap_adjacency() {
        let dims = dims_3x3();
        let mut board = Board::solved(dims);

        // Blank at 8; 5 (above) and 7 (left) are legal, the rest are not.
        assert!(!board.try_swap(0));
        assert!(!board.try_swap(4));
        assert!(!board.try_swap(8)); // the blank itself
        assert!(!board.try_swap(42)); // out of bounds
        assert!(board.try_swap(5));
        assert_eq!(board.blank_index(), 5);
        assert_eq!(board.tile_at(8).value(), 6);
    }

    #[test]
    fn test_no_row_wrap() {
        // Blank at index 3 (row 1, column 0). Index 2 is numerically
        // adjacent but lives at the end of row 0, so the swap must fail.
        let dims = dims_3x3();
        let mut board = Board::from_values(dims, &[1, 2, 3, 0, 5, 6, 7, 8, 4]).unwrap();
        assert!(!board.try_swap(2));
        assert!(board.try_swap(4));
    }

    #[test]
    fn test_slide_edges() {
        let dims = dims_3x3();
        let mut board = Board::solved(dims);

        // Bottom-right corner: only Up and Left are possible.
        assert!(!board.slide(Direction::Down));
        assert!(!board.slide(Direction::Right));
        assert!(board.slide(Direction::Up));
        assert!(board.slide(Direction::Up));
        // Top row now: no further Up.
        assert!(!board.slide(Direction::Up));
        assert!(board.slide(Direction::Left));
        assert!(board.slide(Direction::Left));
        assert_eq!(board.blank_index(), 0);
        assert!(!board.slide(Direction::Left));
    }

    #[test]
    fn test_move_and_undo_restores_board() {
        let dims = dims_3x3();
        let mut board = Board::solved(dims);
        let original = board.clone();

        let previous_blank = board.blank_index();
        assert!(board.try_swap(5));
        assert!(board.try_swap(previous_blank));
        assert_eq!(board, original);
    }

    #[test]
    fn test_tile_index() {
        let board = Board::solved(dims_3x3());
        assert_eq!(board.tile_index(Tile::new(1)), Some(0));
        assert_eq!(board.tile_index(Tile::BLANK), Some(8));
        assert_eq!(board.tile_index(Tile::new(42)), None);
    }

    #[test]
    fn test_direction_opposites() {
        for direction in Direction::ALL {
            assert_ne!(direction, direction.opposite());
            assert_eq!(direction, direction.opposite().opposite());
        }
    }

    #[test]
    fn test_display() {
        let board = Board::solved(Dims::new(2, 2).unwrap());
        assert_eq!(board.to_string(), " 1  2 \n 3  . \n");
    }

    proptest! {
        // Every successful slide is undone exactly by its opposite.
        #[test]
        fn prop_slide_symmetry(steps in proptest::collection::vec(0usize..4, 1..64)) {
            let mut board = Board::solved(dims_3x3());
            for step in steps {
                let direction = Direction::ALL[step];
                let before = board.clone();
                if board.slide(direction) {
                    let mut undone = board.clone();
                    prop_assert!(undone.slide(direction.opposite()));
                    prop_assert_eq!(undone, before);
                }
            }
        }

        // Legal moves keep the permutation invariant intact.
        #[test]
        fn prop_moves_preserve_permutation(steps in proptest::collection::vec(0usize..4, 1..128)) {
            let dims = dims_3x3();
            let mut board = Board::solved(dims);
            for step in steps {
                board.slide(Direction::ALL[step]);
            }
            let mut values: Vec<u8> = board.tiles().iter().map(|tile| tile.value()).collect();
            values.sort_unstable();
            let expected: Vec<u8> = (0..9).collect();
            prop_assert_eq!(values, expected);
            prop_assert!(board.tile_at(board.blank_index()).is_blank());
        }
    }
}
