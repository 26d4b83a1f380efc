//! Core data structures for sliding-tile (N-puzzle) applications.
//!
//! This crate provides the board representation and the permutation codec
//! shared by the game, solver, and scrambler components.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Geometry** - [`dims`]: validated board dimensions ([`Dims`]) and the
//!    row-major flat-index arithmetic every other type relies on.
//! 2. **Board state** - [`board`]: the [`Tile`] identifier type, the
//!    [`Direction`] a blank may travel, and the [`Board`] permutation itself,
//!    including the single authoritative move validator ([`Board::try_swap`]).
//! 3. **Encoding** - [`codec`]: [`PermutationCodec`], a bijective mapping
//!    between boards and dense integers in `[0, N!)` built on the factorial
//!    number system.
//!
//! # Examples
//!
//! ```
//! use taquin_core::{Board, Dims, Direction, PermutationCodec};
//!
//! let dims = Dims::new(3, 3)?;
//! let mut board = Board::solved(dims);
//!
//! // Slide the blank up one row, then encode the arrangement.
//! assert!(board.slide(Direction::Up));
//! let codec = PermutationCodec::new(dims);
//! let code = codec.encode(&board);
//! assert_eq!(codec.decode(code)?, board);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod codec;
pub mod dims;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardError, Direction, Tile},
    codec::{CodecError, PermutationCodec},
    dims::{Dims, DimsError},
};
