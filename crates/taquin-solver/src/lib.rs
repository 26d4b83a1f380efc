//! Optimal-move distance tables for sliding-tile puzzles.
//!
//! This crate builds, by exhaustive breadth-first search from the solved
//! arrangement, a dense table giving the minimum number of legal slides
//! needed to solve every reachable arrangement of a board.
//!
//! The build is cooperative: [`OptimalDistances::step`] expands exactly one
//! BFS layer per call, so an event loop can interleave it with other work.
//! Until the build finishes, lookups report [`MoveCount::Pending`] instead
//! of blocking or returning stale data.
//!
//! # Examples
//!
//! ```
//! use taquin_core::{Board, Dims, Direction};
//! use taquin_solver::{MoveCount, OptimalDistances};
//!
//! let dims = Dims::new(2, 2)?;
//! let mut table = OptimalDistances::new(dims)?;
//! table.run_to_completion();
//!
//! let mut board = Board::solved(dims);
//! assert_eq!(table.lookup(&board), MoveCount::Exact(0));
//! board.slide(Direction::Up);
//! assert_eq!(table.lookup(&board), MoveCount::Exact(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod distance_table;

pub use self::distance_table::{BuildPhase, MoveCount, OptimalDistances, TableError};
