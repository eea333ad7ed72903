/// The state of one position on a [`Grid`](crate::Grid).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Cell {
    /// Holds whatever the grid's marker stands for.
    Occupied,
    /// Holds nothing. Also the state of every removed cell.
    #[default]
    Empty,
}

impl Cell {
    pub(crate) fn parse(display: char, marker: char) -> Self {
        if display == marker {
            Self::Occupied
        } else {
            Self::Empty
        }
    }

    /// Whether this cell is [`Cell::Occupied`].
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied)
    }

    pub(crate) fn display(&self, marker: char) -> char {
        match self {
            Self::Occupied => marker,
            Self::Empty => '.',
        }
    }
}
