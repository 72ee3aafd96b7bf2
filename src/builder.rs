use std::num::NonZero;
use std::ops::IndexMut;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};

use crate::board::Board;
use crate::cell::Cell;
use crate::error::BoardError;
use crate::location::{Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuilderInvalidReason {
    /// A cell was marked or unmarked outside the bounds specified by `dims` on a builder.
    LocationOutOfBounds,
}

/// Functionality all builders must implement.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
pub trait Builder: Clone {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(x, y)` order.
    /// Only the origin, `Location(0, 0)`, starts out marked.
    fn with_dims(dims: (Dimension, Dimension)) -> Self;
    /// Mark `location` as a cell the path must visit.
    ///
    /// May cause the builder to enter a [`LocationOutOfBounds`](BuilderInvalidReason::LocationOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    fn mark(&mut self, location: Location) -> &mut Self;
    /// Undo [`Self::mark`]. The origin cannot be unmarked; attempting to do so does nothing.
    ///
    /// May cause the builder to enter a [`LocationOutOfBounds`](BuilderInvalidReason::LocationOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    fn unmark(&mut self, location: Location) -> &mut Self;
    /// Mark every cell of the board.
    fn mark_all(&mut self) -> &mut Self;
    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>>;
    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>>;
}

/// A builder for rectangular boards whose cells are connected by knight moves.
#[derive(Clone)]
pub struct BoardBuilder {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<Cell>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Builder for BoardBuilder {
    fn with_dims(dims: (Dimension, Dimension)) -> Self {
        let mut cells = Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), Cell::default);
        cells.index_mut(Location::ORIGIN.as_index()).assign_elem(Cell::Origin);

        Self {
            dims,
            cells,
            invalid_reasons: Default::default(),
        }
    }

    fn mark(&mut self, location: Location) -> &mut Self {
        if !self.check_bounds(location) || location == Location::ORIGIN {
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(Cell::Active);
        self
    }

    fn unmark(&mut self, location: Location) -> &mut Self {
        if !self.check_bounds(location) || location == Location::ORIGIN {
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(Cell::Empty);
        self
    }

    fn mark_all(&mut self) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.cells.map_inplace(|cell| if *cell == Cell::Empty {
            cell.assign_elem(Cell::Active);
        });
        self
    }

    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(self.board())
    }
}

impl BoardBuilder {
    /// Start from a board given row by row, `true` marking cells to visit.
    /// The top-left cell is marked whatever `rows` says about it.
    ///
    /// Fails if there are no rows, the first row is empty, or rows differ in length.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, BoardError>
    where
        R: AsRef<[bool]>,
    {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let dims = match (NonZero::new(width), NonZero::new(rows.len())) {
            (Some(width), Some(height)) => (width, height),
            _ => return Err(BoardError::EmptyBoard),
        };

        if let Some((row, found)) = rows.iter()
            .map(|row| row.as_ref().len())
            .find_position(|len| *len != width) {
            return Err(BoardError::RaggedRows { row, expected: width, found });
        }

        let mut builder = Self::with_dims(dims);
        for (y, row) in rows.iter().enumerate() {
            for (x, marked) in row.as_ref().iter().enumerate() {
                if *marked {
                    builder.mark(Location(x, y));
                }
            }
        }

        Ok(builder)
    }

    pub(crate) fn board(&self) -> Board {
        Board {
            cells: self.cells.clone(),
            dims: self.dims,
        }
    }

    fn check_bounds(&mut self, location: Location) -> bool {
        if !self.invalid_reasons.is_empty() {
            return false;
        }

        if location.0 >= self.dims.0.get() || location.1 >= self.dims.1.get() {
            self.invalid_reasons.push(BuilderInvalidReason::LocationOutOfBounds);
            return false;
        }

        true
    }
}
