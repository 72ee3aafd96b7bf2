#![warn(missing_docs)]

//! # `knightpath`
//!
//! Finds a route for a chess knight through a chosen set of cells on a grid, visiting each exactly once,
//! as posed by "knight's path" puzzles where some cells of a board must be stepped on.
//! Begin by building a board object using a builder such as [`BoardBuilder`](builder::BoardBuilder), or parse one from text.
//! Then call [`solve()`](crate::Board::solve), consuming the board and yielding a solved version of the board.
//!
//! The knight always starts in the top-left cell, which is therefore always one of the cells to visit.
//!
//! # Internals
//! The board is expressed as an undirected graph G. A vertex corresponds to a cell that must be visited and
//! two vertices are joined when a knight can move directly between the cells, i.e. the cells are one row and two
//! columns apart, or two rows and one column apart.
//! The puzzle is then a search for a Hamiltonian path in G from the top-left vertex.
//!
//! That is NP-hard in general, but puzzle boards are small. We search depth-first with two cheap necessary
//! conditions cutting dead branches early and Warnsdorff's rule choosing which branch to try first;
//! see [`PathSolver`](solver::PathSolver) for details. Searches can be bounded with [`SearchLimits`](solver::SearchLimits).
//!
//! The lower level pieces are usable on their own:
//! [`build_adjacency`](graph::build_adjacency) turns a boolean matrix into a graph,
//! [`find_hamiltonian_path`](solver::find_hamiltonian_path) searches any graph,
//! [`solve_marked`](solver::solve_marked) does both in one call,
//! and [`to_coordinates`](assemble::to_coordinates) maps a path back to positions.
//! [`ClickScript`](script::ClickScript) turns positions into a replayable list of pointer clicks.

pub use board::{Board, SolvedBoard};
pub use builder::Builder;
pub use error::{AssembleError, BoardError, SolverFailure};
pub use location::{Dimension, Location};

/// Mapping paths back to positions.
pub mod assemble;
pub(crate) mod board;
/// Board builders.
pub mod builder;
pub(crate) mod cell;
pub mod error;
/// The knight-move graph between marked cells.
pub mod graph;
pub(crate) mod location;
pub mod script;
/// Movement rules.
pub mod shape;
/// Hamiltonian path search.
pub mod solver;
mod tests;
