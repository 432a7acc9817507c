//! The [`Cell`] type — one field location with a terrain state and a
//! one-level undo slot.

use std::fmt;

/// Terrain state of a cell. Exactly one holds at any time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Walkable, unoccupied.
    #[default]
    Empty,
    /// Impassable wall, including the field's outer ring.
    Border,
    /// The search origin.
    Start,
    /// The search goal.
    End,
    /// A cell painted as part of a found path.
    Path,
}

impl CellState {
    /// The single character used when rendering a field.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            CellState::Empty => ' ',
            CellState::Border => '#',
            CellState::Start => 'X',
            CellState::End => 'O',
            CellState::Path => '.',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A field cell: its current state plus the state it held immediately
/// before the last change.
///
/// The previous state exists so that moving a Start or End marker can
/// restore whatever the old cell was before being marked. Only one level of
/// history is kept.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    state: CellState,
    previous_state: CellState,
}

impl Cell {
    /// Create a cell in the given state with an Empty history slot.
    #[inline]
    pub const fn new(state: CellState) -> Self {
        Self {
            state,
            previous_state: CellState::Empty,
        }
    }

    /// Current terrain state.
    #[inline]
    pub const fn state(self) -> CellState {
        self.state
    }

    /// State held before the last change.
    #[inline]
    pub const fn previous_state(self) -> CellState {
        self.previous_state
    }

    /// Change state, remembering the outgoing state.
    #[inline]
    pub fn change_state(&mut self, new_state: CellState) {
        self.previous_state = self.state;
        self.state = new_state;
    }

    /// Swap current and previous state (one level of undo).
    #[inline]
    pub fn revert(&mut self) {
        std::mem::swap(&mut self.state, &mut self.previous_state);
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)
    }
}
