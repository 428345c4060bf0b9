// Game-state contract consumed by the search, plus a small grid adapter.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod grid;

pub use grid::{Fish, Snapshot, SnapshotError};

pub type FishId = u32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self { Self { x, y } }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerId {
    #[default]
    Zero,
    One,
}

impl PlayerId {
    pub fn index(self) -> usize {
        match self { PlayerId::Zero => 0, PlayerId::One => 1 }
    }

    pub fn other(self) -> Self {
        match self { PlayerId::Zero => PlayerId::One, PlayerId::One => PlayerId::Zero }
    }
}

/// Hook actions, numbered the way the game process encodes them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    #[default]
    Stay = 0,
    Up = 1,
    Down = 2,
    Left = 3,
    Right = 4,
}

impl Action {
    pub const ALL: [Action; 5] = [Action::Stay, Action::Up, Action::Down, Action::Left, Action::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Stay => "stay",
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        }
    }

    pub fn code(self) -> u8 { self as u8 }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Read access to one immutable game snapshot plus move simulation.
///
/// The search never mutates a state; every child is a fresh value returned by
/// [`compute_children`](StateAdapter::compute_children). Returning no children marks
/// the state as terminal and the search scores it as a leaf.
pub trait StateAdapter: Sized + Send + Sync {
    fn hook_positions(&self) -> [Pos; 2];
    fn fish_positions(&self) -> BTreeMap<FishId, Pos>;
    fn fish_scores(&self) -> BTreeMap<FishId, i32>;
    fn player_scores(&self) -> [i32; 2];
    /// One successor per legal action of `mover`, tagged with that action.
    fn compute_children(&self, mover: PlayerId) -> Vec<(Action, Self)>;
}
