//! Error types for board construction, path search and result assembly.

use thiserror::Error;

use crate::graph::CellIndex;

/// Reasons a board cannot be searched at all.
///
/// These are precondition violations: nothing is repaired or inferred.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The board has no rows or no columns.
    #[error("board has no cells")]
    EmptyBoard,
    /// The top-left cell is not marked, so there is nowhere to start.
    #[error("origin cell (0, 0) is not marked")]
    OriginNotMarked,
    /// Rows of a board given row by row differ in length.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A character in a textual board is not a known cell.
    #[error("unknown cell character {0:?}")]
    UnknownCell(char),
    /// An edge names a cell that does not exist.
    #[error("edge {edge:?} leaves a graph of {count} cells")]
    EdgeOutOfRange {
        /// The offending edge.
        edge: (CellIndex, CellIndex),
        /// Number of cells in the graph.
        count: usize,
    },
    /// An edge joins a cell to itself.
    #[error("cell {0} is joined to itself")]
    SelfLoop(CellIndex),
}

/// Reasons a [`PathSolver`](crate::solver::PathSolver) may fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverFailure {
    /// Every branch from the origin was explored; no Hamiltonian path exists.
    #[error("no Hamiltonian path exists from the origin")]
    NotFound,
    /// The search placed more cells than its budget allows before reaching a verdict.
    #[error("search budget exhausted after {expansions} expansions")]
    Exhausted {
        /// Cells placed before the budget ran out.
        expansions: u64,
    },
    /// The search was asked something impossible, e.g. an origin outside the graph.
    #[error("malformed search input: {0}")]
    Malformed(String),
    /// The board could not be turned into a graph. Returned by [`solve_marked`](crate::solver::solve_marked).
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Reasons a path could not be mapped back to positions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssembleError {
    /// A cell index on the path has no entry in the position table.
    #[error("no position known for cell {0}")]
    MissingPosition(CellIndex),
}
