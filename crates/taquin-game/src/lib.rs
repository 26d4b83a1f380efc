//! Sliding-tile game session state.
//!
//! This crate provides [`Puzzle`], the mutable state machine a presentation
//! layer plays against: it owns one board, validates and applies slides
//! through the core transition function, and lazily maintains the two
//! solving heuristics (displaced-tile count and Manhattan distance).
//!
//! # Examples
//!
//! ```
//! use taquin_core::Dims;
//! use taquin_game::Puzzle;
//!
//! let mut puzzle = Puzzle::new(Dims::new(3, 3)?);
//! assert!(puzzle.is_solved());
//!
//! // Slide the tile above the blank down into the gap.
//! assert!(puzzle.blank_up());
//! assert_eq!(puzzle.displaced_tiles(), 2);
//! assert_eq!(puzzle.manhattan_distance(), 2);
//! # Ok::<(), taquin_core::DimsError>(())
//! ```

mod puzzle;

pub use self::puzzle::{Puzzle, PuzzleError};
