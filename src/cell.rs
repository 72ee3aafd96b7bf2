use crate::error::BoardError;

/// The state of one board cell.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum Cell {
    /// The forced start of the path. Only ever found at [`Location::ORIGIN`](crate::Location::ORIGIN).
    Origin,
    /// A cell the path must visit.
    Active,
    #[default]
    Empty,
}

impl Cell {
    pub(crate) fn is_marked(&self) -> bool {
        !matches!(self, Cell::Empty)
    }

    pub(crate) fn display(&self) -> char {
        match self {
            Cell::Origin => 'S',
            Cell::Active => '#',
            Cell::Empty => '.',
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = BoardError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'S' | 's' => Ok(Cell::Origin),
            '#' | 'x' | 'X' => Ok(Cell::Active),
            '.' => Ok(Cell::Empty),
            other => Err(BoardError::UnknownCell(other)),
        }
    }
}

/// Render a visit order as a single character: `0`-`9`, then `a`-`z`, then `*` for anything later.
pub(crate) fn order_char(order: usize) -> char {
    char::from_digit(order as u32, 36).filter(|_| order < 36).unwrap_or('*')
}
