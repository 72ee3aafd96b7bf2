use std::hash::Hash;

use ndarray::Array2;
use strum::VariantArray;

use crate::location::Location;

/// A way of moving between cells of a board.
///
/// [`KnightStep`] is the built-in implementation and the one every [`Board`](crate::Board) uses.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// Steps leaving the top or left of the board wrap to huge coordinates and so are never in bounds.
    fn attempt_from(&self, location: Location) -> Location;
    /// The static array of all "forward" steps.
    ///
    /// Forward steps are those which cause the destination location to be indexed higher than the origin location in the row-major ordering of the cell array.
    /// Walking only forward steps from every cell visits each unordered pair of cells at most once.
    const FORWARD_VARIANTS: &'static [Self];
    /// Dump the specified [`ndarray::Array2`], laying out individual characters based on the geometry of the shape [`Self`].
    fn print(board: Array2<char>) -> String;
}

/// The eight moves of a chess knight: two cells along one axis and one along the other.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum KnightStep {
    /// Two rows up, one column left.
    UpUpLeft,
    /// Two rows up, one column right.
    UpUpRight,
    /// Two columns right, one row up.
    RightRightUp,
    /// Two columns right, one row down.
    RightRightDown,
    /// Two rows down, one column right.
    DownDownRight,
    /// Two rows down, one column left.
    DownDownLeft,
    /// Two columns left, one row down.
    LeftLeftDown,
    /// Two columns left, one row up.
    LeftLeftUp,
}

impl KnightStep {
    /// The `(dx, dy)` offset of this step.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Self::UpUpLeft => (-1, -2),
            Self::UpUpRight => (1, -2),
            Self::RightRightUp => (2, -1),
            Self::RightRightDown => (2, 1),
            Self::DownDownRight => (1, 2),
            Self::DownDownLeft => (-1, 2),
            Self::LeftLeftDown => (-2, 1),
            Self::LeftLeftUp => (-2, -1),
        }
    }
}

impl Step for KnightStep {
    fn attempt_from(&self, location: Location) -> Location {
        location.offset_by(self.delta())
    }

    const FORWARD_VARIANTS: &'static [Self] = &[Self::RightRightDown, Self::DownDownRight, Self::DownDownLeft, Self::LeftLeftDown];

    fn print(board: Array2<char>) -> String {
        let mut out = String::with_capacity(board.nrows() * (board.ncols() + 1));

        for row in board.rows() {
            for col in row {
                out.push(*col);
            }
            out.push('\n');
        }

        out
    }
}

/// Whether `a` and `b` are a knight's move apart: offsets of `{1, 2}` or `{2, 1}` in either order.
pub fn is_knight_move(a: Location, b: Location) -> bool {
    matches!((a.0.abs_diff(b.0), a.1.abs_diff(b.1)), (1, 2) | (2, 1))
}
