use std::{
    cell::Cell,
    fmt::{self, Display},
};

use taquin_core::{Board, BoardError, CodecError, Dims, Direction, PermutationCodec, Tile};

/// Derived solving heuristics, recomputed in one board scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Heuristics {
    displaced: usize,
    manhattan: usize,
}

/// A sliding-tile puzzle session.
///
/// Owns exactly one [`Board`] plus the [`PermutationCodec`] for its
/// dimension, and caches the displaced-tile count and Manhattan distance.
/// The cache is invalidated by every successful move and recomputed lazily
/// by the heuristic accessors, which therefore stay `&self`.
///
/// All mutation goes through the core transition function: illegal moves
/// return `false` and leave the board untouched; there is no panicking path
/// for a move attempt on a validly constructed puzzle.
///
/// # Examples
///
/// ```
/// use taquin_core::{Dims, Tile};
/// use taquin_game::Puzzle;
///
/// let mut puzzle = Puzzle::new(Dims::new(3, 3)?);
///
/// // The blank starts bottom-right; tile 6 sits directly above it.
/// assert!(puzzle.move_tile(Tile::new(6)));
/// assert!(!puzzle.move_tile(Tile::new(1))); // not adjacent to the blank
/// assert_eq!(puzzle.displaced_tiles(), 2); // tile 6 and the blank
/// # Ok::<(), taquin_core::DimsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Puzzle {
    board: Board,
    codec: PermutationCodec,
    heuristics: Cell<Option<Heuristics>>,
}

impl Puzzle {
    /// Creates a solved puzzle of the given dimensions.
    #[must_use]
    pub fn new(dims: Dims) -> Self {
        Self::from_board(Board::solved(dims))
    }

    /// Creates a puzzle from an arrangement index previously produced by
    /// [`Puzzle::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Code`] if `code` is not in `[0, N!)`. The
    /// caller is always informed; an invalid code is never silently
    /// replaced by a default board.
    pub fn from_code(dims: Dims, code: u64) -> Result<Self, PuzzleError> {
        let codec = PermutationCodec::new(dims);
        let board = codec.decode(code)?;
        Ok(Self {
            board,
            codec,
            heuristics: Cell::new(None),
        })
    }

    /// Creates a puzzle from raw tile identifiers in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Board`] if the values are not a permutation
    /// of `[0, N)`.
    pub fn from_values(dims: Dims, values: &[u8]) -> Result<Self, PuzzleError> {
        let board = Board::from_values(dims, values)?;
        Ok(Self::from_board(board))
    }

    /// Creates a puzzle around an existing board.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let codec = PermutationCodec::new(board.dims());
        Self {
            board,
            codec,
            heuristics: Cell::new(None),
        }
    }

    /// Returns the underlying board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board dimensions.
    #[must_use]
    pub const fn dims(&self) -> Dims {
        self.board.dims()
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn columns(&self) -> u8 {
        self.dims().columns()
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> u8 {
        self.dims().rows()
    }

    /// Returns the total number of cells.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.dims().size()
    }

    /// Returns the arrangement index of the current board.
    #[must_use]
    pub fn encode(&self) -> u64 {
        self.codec.encode(&self.board)
    }

    /// Returns `true` if every tile is at its goal position.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Attempts to swap the cell at `index` with the blank.
    ///
    /// Returns `true` and invalidates the heuristic cache on success;
    /// returns `false` and leaves the board untouched otherwise.
    pub fn try_swap(&mut self, index: usize) -> bool {
        let moved = self.board.try_swap(index);
        if moved {
            self.heuristics.set(None);
        }
        moved
    }

    /// Attempts to move the named tile into the blank.
    ///
    /// Locates the tile's current position and delegates to
    /// [`Puzzle::try_swap`]. Returns `false` if the tile is absent or not
    /// adjacent to the blank.
    pub fn move_tile(&mut self, tile: Tile) -> bool {
        match self.board.tile_index(tile) {
            Some(index) => self.try_swap(index),
            None => false,
        }
    }

    /// Attempts to slide the blank one cell in `direction`.
    pub fn slide(&mut self, direction: Direction) -> bool {
        let moved = self.board.slide(direction);
        if moved {
            self.heuristics.set(None);
        }
        moved
    }

    /// Slides the blank towards row zero.
    pub fn blank_up(&mut self) -> bool {
        self.slide(Direction::Up)
    }

    /// Slides the blank towards the last row.
    pub fn blank_down(&mut self) -> bool {
        self.slide(Direction::Down)
    }

    /// Slides the blank towards column zero.
    pub fn blank_left(&mut self) -> bool {
        self.slide(Direction::Left)
    }

    /// Slides the blank towards the last column.
    pub fn blank_right(&mut self) -> bool {
        self.slide(Direction::Right)
    }

    /// Returns the number of tiles away from their goal position.
    ///
    /// The blank participates like any other tile, with the last cell as
    /// its goal: a single slide therefore always displaces two cells.
    #[must_use]
    pub fn displaced_tiles(&self) -> usize {
        self.ensure_heuristics().displaced
    }

    /// Returns the sum of grid distances from each tile (blank included)
    /// to its goal position.
    #[must_use]
    pub fn manhattan_distance(&self) -> usize {
        self.ensure_heuristics().manhattan
    }

    fn ensure_heuristics(&self) -> Heuristics {
        if let Some(heuristics) = self.heuristics.get() {
            return heuristics;
        }
        let dims = self.dims();
        let mut displaced = 0;
        let mut manhattan = 0;
        for index in 0..dims.size() {
            let tile = self.board.tile_at(index);
            let goal = tile.goal_index(dims);
            if goal != index {
                displaced += 1;
                manhattan += dims.row_of(index).abs_diff(dims.row_of(goal))
                    + dims.column_of(index).abs_diff(dims.column_of(goal));
            }
        }
        let heuristics = Heuristics {
            displaced,
            manhattan,
        };
        self.heuristics.set(Some(heuristics));
        heuristics
    }
}

impl PartialEq for Puzzle {
    /// Puzzles compare by board state; the heuristic cache is invisible.
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for Puzzle {}

impl Display for Puzzle {
    /// Renders the grid plus a heuristic summary line, for diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(
            f,
            "displaced: {}, manhattan: {}",
            self.displaced_tiles(),
            self.manhattan_distance()
        )
    }
}

/// Errors that can occur when constructing a [`Puzzle`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum PuzzleError {
    /// The supplied tile values are not a permutation of `[0, N)`.
    #[display("{_0}")]
    Board(BoardError),
    /// The supplied arrangement index is out of range.
    #[display("{_0}")]
    Code(CodecError),
}
