use std::mem;

use derive_more::{Display, Error, IsVariant};
use taquin_core::{Board, Dims, Direction, PermutationCodec};

/// Sentinel for arrangements not yet discovered by the search.
const UNKNOWN: u8 = u8::MAX;

/// Largest cell count the table supports: 12! one-byte entries (~457 MiB)
/// is the practical in-memory ceiling.
const MAX_TABLE_CELLS: usize = 12;

/// Lifecycle of the table build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum BuildPhase {
    /// Allocated, but no search layer has been expanded yet.
    NotStarted,
    /// The breadth-first search is partway through.
    InProgress,
    /// Every reachable arrangement has its final distance.
    Ready,
}

/// Result of a distance lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum MoveCount {
    /// The table build has not finished; ask again after more [`OptimalDistances::step`] calls.
    Pending,
    /// The build is complete but this arrangement was never discovered, so
    /// no sequence of legal slides connects it to the solved board.
    Unreachable,
    /// Minimum number of legal slides to reach the solved board.
    Exact(u8),
}

/// Minimum-move distances from every arrangement to the solved board.
///
/// A dense array of `N!` one-byte entries indexed by the permutation
/// codec's arrangement index, filled by breadth-first search rooted at the
/// solved arrangement. Every legal slide is its own inverse, so distance
/// *from* solved equals distance *to* solved.
///
/// The build is cooperative: each [`OptimalDistances::step`] call expands
/// exactly one BFS layer and returns whether the table is ready, letting an
/// event loop interleave the search with other work instead of blocking on
/// the full state enumeration (9! = 362,880 arrangements for a 3x3 board).
/// Once ready the table is never written again.
///
/// # Examples
///
/// ```
/// use taquin_core::{Board, Dims};
/// use taquin_solver::{MoveCount, OptimalDistances};
///
/// let dims = Dims::new(2, 2)?;
/// let mut table = OptimalDistances::new(dims)?;
///
/// // Nothing is answered until the build completes.
/// assert_eq!(table.lookup(&Board::solved(dims)), MoveCount::Pending);
///
/// table.run_to_completion();
/// assert_eq!(table.lookup(&Board::solved(dims)), MoveCount::Exact(0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct OptimalDistances {
    codec: PermutationCodec,
    distances: Vec<u8>,
    frontier: Vec<u64>,
    depth: u8,
    phase: BuildPhase,
}

impl OptimalDistances {
    /// Allocates an empty table for the given dimensions.
    ///
    /// Every entry starts at the unknown sentinel except the solved
    /// arrangement, which is seeded at distance zero.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::TableTooLarge`] for boards with more than 12
    /// cells.
    pub fn new(dims: Dims) -> Result<Self, TableError> {
        if dims.size() > MAX_TABLE_CELLS {
            return Err(TableError::TableTooLarge {
                columns: dims.columns(),
                rows: dims.rows(),
            });
        }
        let codec = PermutationCodec::new(dims);
        let states = codec.state_count() as usize;
        let mut distances = vec![UNKNOWN; states];
        let solved = codec.encode(&Board::solved(dims));
        distances[solved as usize] = 0;
        Ok(Self {
            codec,
            distances,
            frontier: vec![solved],
            depth: 0,
            phase: BuildPhase::NotStarted,
        })
    }

    /// Returns the dimensions this table was built for.
    #[must_use]
    pub const fn dims(&self) -> Dims {
        self.codec.dims()
    }

    /// Returns the number of table entries, `N!`.
    #[must_use]
    pub fn state_count(&self) -> u64 {
        self.codec.state_count()
    }

    /// Returns the current build phase.
    #[must_use]
    pub const fn phase(&self) -> BuildPhase {
        self.phase
    }

    /// Returns `true` once every reachable arrangement has its distance.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase.is_ready()
    }

    /// Expands one breadth-first layer and reports whether the table is
    /// now ready.
    ///
    /// Each frontier arrangement is decoded, its up-to-four legal slides
    /// applied and re-encoded, and undiscovered neighbors recorded at the
    /// next distance. An exhausted frontier flips the phase to
    /// [`BuildPhase::Ready`]. Calling `step` on a ready table is a no-op.
    pub fn step(&mut self) -> bool {
        match self.phase {
            BuildPhase::Ready => return true,
            BuildPhase::NotStarted => self.phase = BuildPhase::InProgress,
            BuildPhase::InProgress => {}
        }

        let frontier = mem::take(&mut self.frontier);
        let mut next = Vec::new();
        for &code in &frontier {
            let mut board = self
                .codec
                .decode(code)
                .expect("frontier codes originate from encode");
            for direction in Direction::ALL {
                if !board.slide(direction) {
                    continue;
                }
                let neighbor = self.codec.encode(&board);
                if self.distances[neighbor as usize] == UNKNOWN {
                    self.distances[neighbor as usize] = self.depth + 1;
                    next.push(neighbor);
                }
                let undone = board.slide(direction.opposite());
                debug_assert!(undone);
            }
        }

        if next.is_empty() {
            self.phase = BuildPhase::Ready;
            let reachable = self
                .distances
                .iter()
                .filter(|&&distance| distance != UNKNOWN)
                .count();
            log::debug!(
                "distance table for {} ready: {reachable} reachable arrangements, max distance {}",
                self.dims(),
                self.depth
            );
        } else {
            self.depth += 1;
            log::debug!(
                "bfs layer {}: {} arrangements discovered",
                self.depth,
                next.len()
            );
            self.frontier = next;
        }
        self.is_ready()
    }

    /// Runs [`OptimalDistances::step`] until the table is ready.
    pub fn run_to_completion(&mut self) {
        while !self.step() {}
    }

    /// Looks up the minimum move count for a board.
    ///
    /// Returns [`MoveCount::Pending`] until the build has completed; never
    /// blocks and never returns a provisional distance.
    ///
    /// # Panics
    ///
    /// Panics if `board` was built for different dimensions.
    #[must_use]
    pub fn lookup(&self, board: &Board) -> MoveCount {
        if !self.is_ready() {
            return MoveCount::Pending;
        }
        match self.distances[self.codec.encode(board) as usize] {
            UNKNOWN => MoveCount::Unreachable,
            distance => MoveCount::Exact(distance),
        }
    }

    /// Advances the build by one layer if needed, then looks up.
    ///
    /// This is the entry point for callers driving the build from an event
    /// loop: the first query starts the search, subsequent queries each
    /// contribute one layer of work until the answer becomes available.
    pub fn poll(&mut self, board: &Board) -> MoveCount {
        if !self.is_ready() {
            self.step();
        }
        self.lookup(board)
    }
}

/// Errors that can occur when allocating an [`OptimalDistances`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TableError {
    /// The board has too many arrangements to tabulate in memory.
    #[display("{columns}x{rows} board has too many arrangements for an in-memory table")]
    TableTooLarge {
        /// Column count of the rejected board.
        columns: u8,
        /// Row count of the rejected board.
        rows: u8,
    },
}
