use super::{Action, FishId, PlayerId, Pos, StateAdapter};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub const DEFAULT_WIDTH: i32 = 20;
pub const DEFAULT_HEIGHT: i32 = 20;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("board dimensions must be positive, got {width}x{height}")]
    Dimensions { width: i32, height: i32 },
    #[error("hook of player {player:?} at {pos:?} is outside the board")]
    HookOutOfBounds { player: PlayerId, pos: Pos },
    #[error("fish {id} at {pos:?} is outside the board")]
    FishOutOfBounds { id: FishId, pos: Pos },
    #[error("both hooks share column {0}")]
    SharedColumn(i32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fish {
    pub pos: Pos,
    pub score: i32,
}

fn default_width() -> i32 { DEFAULT_WIDTH }
fn default_height() -> i32 { DEFAULT_HEIGHT }

/// A board snapshot as delivered by the game process.
///
/// Rules are deliberately minimal: a hook steps one cell per action, x wraps around,
/// y is clamped, hooks never share a column and a fish under a hook is caught at once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    pub hooks: [Pos; 2],
    #[serde(default)]
    pub scores: [i32; 2],
    #[serde(default)]
    pub fish: BTreeMap<FishId, Fish>,
}

impl Snapshot {
    pub fn new(hooks: [Pos; 2]) -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT, hooks, scores: [0, 0], fish: BTreeMap::new() }
    }

    pub fn with_fish(mut self, id: FishId, pos: Pos, score: i32) -> Self {
        self.fish.insert(id, Fish { pos, score });
        self
    }

    pub fn with_scores(mut self, scores: [i32; 2]) -> Self {
        self.scores = scores;
        self
    }

    pub fn from_json(s: &str) -> Result<Self, SnapshotError> {
        let snap: Snapshot = serde_json::from_str(s)?;
        snap.validate()?;
        Ok(snap)
    }

    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(SnapshotError::Dimensions { width: self.width, height: self.height });
        }
        for player in [PlayerId::Zero, PlayerId::One] {
            let pos = self.hooks[player.index()];
            if !self.in_bounds(pos) { return Err(SnapshotError::HookOutOfBounds { player, pos }); }
        }
        if self.hooks[0].x == self.hooks[1].x { return Err(SnapshotError::SharedColumn(self.hooks[0].x)); }
        for (&id, f) in &self.fish {
            if !self.in_bounds(f.pos) { return Err(SnapshotError::FishOutOfBounds { id, pos: f.pos }); }
        }
        Ok(())
    }

    fn in_bounds(&self, p: Pos) -> bool { p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height }

    /// Mirror the snapshot so that player zero becomes player one.
    pub fn swapped(&self) -> Self {
        let mut s = self.clone();
        s.hooks.swap(0, 1);
        s.scores.swap(0, 1);
        s
    }

    /// Successor after `mover` plays `action`.
    pub fn apply(&self, mover: PlayerId, action: Action) -> Self {
        let mut next = self.clone();
        let me = mover.index();
        let rival = self.hooks[mover.other().index()];
        let hook = self.hooks[me];
        let moved = match action {
            Action::Stay => hook,
            Action::Up => Pos::new(hook.x, (hook.y + 1).min(self.height - 1)),
            Action::Down => Pos::new(hook.x, (hook.y - 1).max(0)),
            Action::Left => Pos::new((hook.x - 1).rem_euclid(self.width), hook.y),
            Action::Right => Pos::new((hook.x + 1).rem_euclid(self.width), hook.y),
        };
        // Boats cannot pass each other.
        if moved.x == rival.x { return next; }
        next.hooks[me] = moved;
        let caught: Vec<FishId> = next.fish.iter().filter(|(_, f)| f.pos == moved).map(|(&id, _)| id).collect();
        for id in caught {
            if let Some(f) = next.fish.remove(&id) { next.scores[me] += f.score; }
        }
        next
    }

    /// Random board with default dimensions and `fish_count` fish, hooks on the top row.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, fish_count: usize) -> Self {
        let (w, h) = (DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let mut columns: Vec<i32> = (0..w).collect();
        columns.shuffle(rng);
        let hooks = [Pos::new(columns[0], h - 1), Pos::new(columns[1], h - 1)];
        let mut snap = Snapshot::new(hooks);
        for id in 0..fish_count as FishId {
            let pos = Pos::new(rng.gen_range(0..w), rng.gen_range(0..h - 1));
            let score = match rng.gen_range(0..4) { 0 => -rng.gen_range(1..=10), _ => rng.gen_range(1..=12) };
            snap.fish.insert(id, Fish { pos, score });
        }
        snap
    }
}

impl StateAdapter for Snapshot {
    fn hook_positions(&self) -> [Pos; 2] { self.hooks }

    fn fish_positions(&self) -> BTreeMap<FishId, Pos> {
        self.fish.iter().map(|(&id, f)| (id, f.pos)).collect()
    }

    fn fish_scores(&self) -> BTreeMap<FishId, i32> {
        self.fish.iter().map(|(&id, f)| (id, f.score)).collect()
    }

    fn player_scores(&self) -> [i32; 2] { self.scores }

    fn compute_children(&self, mover: PlayerId) -> Vec<(Action, Self)> {
        if self.fish.is_empty() { return Vec::new(); }
        Action::ALL.iter().map(|&a| (a, self.apply(mover, a))).collect()
    }
}
