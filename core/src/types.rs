//! Door and board model for a single trial.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Number of doors on every board.
pub const DOOR_COUNT: usize = 3;

/// A door index, 0-based.
pub type DoorIndex = usize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Door {
    pub has_car:     bool,
    pub is_selected: bool,
    pub is_open:     bool,
}

impl Door {
    fn symbol(&self) -> char {
        if self.has_car {
            'C'
        } else if self.is_open {
            ' '
        } else {
            'X'
        }
    }
}

/// The three doors of one trial.
///
/// Mutators are crate-private: only the engine moves a board through
/// its phases, so the car/selection/open invariants hold for any board
/// handed to observers. Boards are not deserializable for the same
/// reason:
///
/// ```compile_fail
/// let board: montyhall_core::types::Board =
///     serde_json::from_str(r#"{"doors":[]}"#).unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    doors: [Door; DOOR_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn car_index(&self) -> Option<DoorIndex> {
        self.doors.iter().position(|d| d.has_car)
    }

    pub fn selected_index(&self) -> Option<DoorIndex> {
        self.doors.iter().position(|d| d.is_selected)
    }

    pub fn open_index(&self) -> Option<DoorIndex> {
        self.doors.iter().position(|d| d.is_open)
    }

    pub fn count(&self, predicate: impl Fn(&Door) -> bool) -> usize {
        self.doors.iter().filter(|&d| predicate(d)).count()
    }

    pub(crate) fn place_car(&mut self, index: DoorIndex) {
        self.doors[index].has_car = true;
    }

    pub(crate) fn select(&mut self, index: DoorIndex) {
        self.doors[index].is_selected = true;
    }

    pub(crate) fn open(&mut self, index: DoorIndex) {
        self.doors[index].is_open = true;
    }

    /// Move the player's selection from `from` to `to`.
    pub(crate) fn move_selection(&mut self, from: DoorIndex, to: DoorIndex) {
        self.doors[from].is_selected = false;
        self.doors[to].is_selected = true;
    }
}

impl Index<DoorIndex> for Board {
    type Output = Door;

    fn index(&self, index: DoorIndex) -> &Door {
        &self.doors[index]
    }
}

/// Renders `{C}` for the selected door and `[C]` otherwise, where the
/// inner symbol is `C` (car), blank (opened) or `X` (closed goat).
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for door in &self.doors {
            let (left, right) = if door.is_selected { ('{', '}') } else { ('[', ']') };
            write!(f, "{left}{}{right} ", door.symbol())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Stay,   // keep the initial pick
    Switch, // take the remaining closed door after the reveal
}

impl Strategy {
    pub fn switches(&self) -> bool {
        matches!(self, Self::Switch)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Stay   => "the player does not change the door",
            Self::Switch => "the player changes the door",
        }
    }
}
