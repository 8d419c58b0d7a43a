//! Enumeration types for the Undead Life automaton.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Cell State
// ---------------------------------------------------------------------------

/// The state of a single board cell.
///
/// Each state has a numeric code (for integer grids) and a text glyph
/// (for the board's text form):
///
/// | State  | Code | Glyph |
/// |--------|------|-------|
/// | Dead   | 0    | `.`   |
/// | Alive  | 1    | `#`   |
/// | Zombie | 2    | `Z`   |
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// An empty cell.
    #[default]
    Dead,
    /// A living cell following the classic Life survival rule.
    Alive,
    /// An undead cell that persists only while it has living prey nearby.
    Zombie,
}

impl CellState {
    /// All states, in code order.
    pub const ALL: [Self; 3] = [Self::Dead, Self::Alive, Self::Zombie];

    /// Decode a numeric state code. Returns `None` for anything but 0, 1, or 2.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Dead),
            1 => Some(Self::Alive),
            2 => Some(Self::Zombie),
            _ => None,
        }
    }

    /// The numeric code of this state.
    pub const fn code(self) -> u8 {
        match self {
            Self::Dead => 0,
            Self::Alive => 1,
            Self::Zombie => 2,
        }
    }

    /// Decode a text glyph.
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Dead),
            '#' => Some(Self::Alive),
            'Z' => Some(Self::Zombie),
            _ => None,
        }
    }

    /// The text glyph of this state.
    pub const fn glyph(self) -> char {
        match self {
            Self::Dead => '.',
            Self::Alive => '#',
            Self::Zombie => 'Z',
        }
    }

    /// Whether this state is [`CellState::Alive`].
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Whether this state is [`CellState::Zombie`].
    pub const fn is_zombie(self) -> bool {
        matches!(self, Self::Zombie)
    }
}

impl core::fmt::Display for CellState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Dead => "dead",
            Self::Alive => "alive",
            Self::Zombie => "zombie",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
