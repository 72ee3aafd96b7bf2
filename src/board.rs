use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use ndarray::Array2;

use crate::builder::BoardBuilder;
use crate::cell::{order_char, Cell};
use crate::error::{BoardError, SolverFailure};
use crate::graph::{adjacency_of, Adjacency};
use crate::location::{Dimension, Location};
use crate::shape::{KnightStep, Step};
use crate::solver::{Path, PathSolver, SearchLimits};

/// A rectangular board of cells, some of which a knight must visit.
/// The top-left cell is always one of them, and is where the knight starts.
///
/// [`Board`]s should be built using a [`Builder`](crate::builder::Builder) such as [`BoardBuilder`], or parsed from text with [`str::parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: Array2<Cell>,
    pub(crate) dims: (Dimension, Dimension),
}

impl Board {
    /// Board dimensions in `(width, height)` order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Which cells must be visited, indexed `[row, column]`.
    pub fn marked(&self) -> Array2<bool> {
        self.cells.map(Cell::is_marked)
    }

    /// Locations of the cells to visit. The position of a location in this list is its [`CellIndex`](crate::graph::CellIndex).
    pub fn locations(&self) -> Vec<Location> {
        self.cells.indexed_iter()
            .filter(|(_, cell)| cell.is_marked())
            .map(|(ind, _)| Location::from(ind))
            .collect_vec()
    }

    /// The knight-move graph over [`Self::locations`].
    pub fn adjacency(&self) -> Adjacency {
        adjacency_of(&self.locations())
    }

    /// Solves this board with default [`SearchLimits`], consuming it and returning the solved version.
    pub fn solve(self) -> Result<SolvedBoard, SolverFailure> {
        self.solve_with(SearchLimits::default())
    }

    /// Solves this board, deferring to a [`PathSolver`] bounded by `limits`.
    ///
    /// Returns according to the result of [`PathSolver::solve`].
    pub fn solve_with(self, limits: SearchLimits) -> Result<SolvedBoard, SolverFailure> {
        let locations = self.locations();
        let adjacency = adjacency_of(&locations);
        let path = PathSolver::from(&adjacency)
            .with_limits(limits)
            .solve(0, locations.len())?;

        Ok(SolvedBoard {
            board: self,
            locations,
            path,
        })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", KnightStep::print(self.cells.map(Cell::display)))
    }
}

/// Parses one row per line: `S` for the origin, `#` or `x` for cells to visit, `.` for the rest.
///
/// The top-left cell is marked regardless of what the text says. Blank lines and surrounding whitespace are ignored.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars()
                .map(|c| Cell::try_from(c).map(|cell| cell.is_marked()))
                .collect::<Result<Vec<bool>, BoardError>>())
            .collect::<Result<Vec<Vec<bool>>, BoardError>>()?;

        // from_rows only marks locations inside the rows it was given, so the builder is valid
        Ok(BoardBuilder::from_rows(&rows)?.board())
    }
}

/// A [`Board`] together with a path through all of its marked cells.
#[derive(Clone, Debug)]
pub struct SolvedBoard {
    board: Board,
    locations: Vec<Location>,
    path: Path,
}

impl SolvedBoard {
    /// The board that was solved.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The path, as indices into [`Board::locations`].
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path as board locations, starting at [`Location::ORIGIN`].
    pub fn coordinates(&self) -> Vec<Location> {
        // every index on the path came from `locations`
        self.path.cells().iter().map(|cell| self.locations[*cell]).collect_vec()
    }
}

/// Each visited cell shows its position on the path in base 36; `*` past the 36th step.
impl Display for SolvedBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut chars = self.board.cells.map(|_| '.');
        for (order, location) in self.coordinates().into_iter().enumerate() {
            chars[location.as_index()] = order_char(order);
        }

        write!(f, "{}", KnightStep::print(chars))
    }
}
