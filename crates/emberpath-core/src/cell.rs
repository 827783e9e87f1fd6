//! The [`CellKind`] type: what occupies a single grid square.

use std::fmt;

/// Content of one grid cell.
///
/// Every kind except [`Wall`](CellKind::Wall) can be walked on. Hazard
/// sources are passable terrain; whether they burn, block or are ignored
/// is decided by the grid handed to the search (see
/// [`HazardMode`](crate::HazardMode)).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Wall,
    Free,
    Start,
    Exit,
    HazardSource,
}

impl CellKind {
    /// Every kind, in symbol order.
    pub const ALL: [CellKind; 5] = [
        CellKind::Wall,
        CellKind::Free,
        CellKind::Start,
        CellKind::Exit,
        CellKind::HazardSource,
    ];

    /// Decode a text symbol. Returns `None` for anything outside `#.DSF`.
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Free),
            'D' => Some(Self::Start),
            'S' => Some(Self::Exit),
            'F' => Some(Self::HazardSource),
            _ => None,
        }
    }

    /// The text symbol for this kind.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Free => '.',
            Self::Start => 'D',
            Self::Exit => 'S',
            Self::HazardSource => 'F',
        }
    }

    /// Whether an agent or the hazard may enter this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
