//! Bijective mapping between board arrangements and dense integers.

use derive_more::{Display, Error};

use crate::{
    board::Board,
    dims::Dims,
};

/// Encodes boards as integers in `[0, N!)` via the factorial number system
/// (Lehmer code).
///
/// The codec owns the factorial table for its dimension, so it is a plain
/// value: cheap to build, cheap to clone, and shared freely between the
/// game and the distance-table builder without any global cache.
///
/// Encoding walks the board once; each tile contributes its rank among the
/// identifiers not yet placed, weighted by a falling factorial. This yields
/// a bijection: `decode(encode(b)) == b` for every valid board and
/// `encode(decode(x)) == x` for every `x` in `[0, N!)`.
///
/// # Examples
///
/// ```
/// use taquin_core::{Board, Dims, PermutationCodec};
///
/// let dims = Dims::new(2, 2)?;
/// let codec = PermutationCodec::new(dims);
/// assert_eq!(codec.state_count(), 24);
///
/// let board = Board::solved(dims);
/// let code = codec.encode(&board);
/// assert_eq!(codec.decode(code)?, board);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationCodec {
    dims: Dims,
    factorials: Vec<u64>,
}

impl PermutationCodec {
    /// Creates a codec for the given dimensions, precomputing `0!..=N!`.
    #[must_use]
    pub fn new(dims: Dims) -> Self {
        let size = dims.size();
        let mut factorials = Vec::with_capacity(size + 1);
        factorials.push(1u64);
        for k in 1..=size {
            let previous = factorials[k - 1];
            factorials.push(previous * k as u64);
        }
        Self { dims, factorials }
    }

    /// Returns the dimensions this codec was built for.
    #[must_use]
    pub const fn dims(&self) -> Dims {
        self.dims
    }

    /// Returns the number of distinct arrangements, `N!`.
    #[must_use]
    pub fn state_count(&self) -> u64 {
        self.factorials[self.dims.size()]
    }

    /// Encodes a board as its Lehmer-code index.
    ///
    /// # Panics
    ///
    /// Panics if `board` was built for different dimensions.
    #[must_use]
    pub fn encode(&self, board: &Board) -> u64 {
        assert_eq!(
            board.dims(),
            self.dims,
            "board dimensions do not match the codec"
        );
        let size = self.dims.size();
        let mut placed = 0u32;
        let mut code = 0u64;
        for i in 0..size {
            let value = board.tile_at(i).value();
            let smaller_placed = (placed & ((1u32 << value) - 1)).count_ones();
            let rank = u64::from(value) - u64::from(smaller_placed);
            code += rank * self.factorials[size - 1 - i];
            placed |= 1 << value;
        }
        code
    }

    /// Decodes a Lehmer-code index back into a board.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::IndexOutOfRange`] if `code >= N!`.
    pub fn decode(&self, code: u64) -> Result<Board, CodecError> {
        let states = self.state_count();
        if code >= states {
            return Err(CodecError::IndexOutOfRange { code, states });
        }
        let size = self.dims.size();
        let mut remainder = code;
        let mut used = 0u32;
        let mut values = Vec::with_capacity(size);
        for i in 0..size {
            let weight = self.factorials[size - 1 - i];
            let digit = remainder / weight;
            remainder %= weight;

            // The digit-th identifier not yet used, in increasing order.
            let mut skipped = digit;
            let mut value = 0u8;
            for candidate in 0..size as u8 {
                if used & (1u32 << candidate) != 0 {
                    continue;
                }
                if skipped == 0 {
                    value = candidate;
                    break;
                }
                skipped -= 1;
            }
            used |= 1u32 << value;
            values.push(value);
        }
        Ok(Board::from_values_unchecked(self.dims, &values))
    }
}

/// Errors that can occur when decoding an arrangement index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CodecError {
    /// The index does not name an arrangement of this board.
    #[display("arrangement index {code} out of range (board has {states} arrangements)")]
    IndexOutOfRange {
        /// The rejected index.
        code: u64,
        /// Number of valid arrangements, `N!`.
        states: u64,
    },
}
