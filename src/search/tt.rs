use crate::board::{Action, FishId, Pos, StateAdapter};
use crate::search::alphabeta::Side;
use std::collections::HashMap;

/// Structural cache key. Fish come sorted by id, each with its position and score, so
/// iteration order never leaks in.
///
/// Scores and the side to move are part of the key: two paths can reach the same
/// positions with different catches credited, and iterative deepening revisits the
/// same remaining depth with the other side to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub fish: Vec<(FishId, Pos, i32)>,
    pub hooks: [Pos; 2],
    pub scores: [i32; 2],
    pub side: Side,
    pub depth: u32,
}

impl CacheKey {
    pub fn new<S: StateAdapter>(state: &S, side: Side, depth: u32) -> Self {
        let scores = state.fish_scores();
        Self {
            fish: state.fish_positions().into_iter()
                .map(|(id, pos)| (id, pos, scores.get(&id).copied().unwrap_or(0)))
                .collect(),
            hooks: state.hook_positions(),
            scores: state.player_scores(),
            side,
            depth,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry {
    pub value: f64,
    pub action: Action,
}

/// Memo table for one decision. Holds exact values only; there are no bound flags.
#[derive(Debug, Default)]
pub struct Cache {
    map: HashMap<CacheKey, Entry>,
    enabled: bool,
    pub(crate) hits: u64,
    pub(crate) stores: u64,
}

impl Cache {
    pub fn new(enabled: bool) -> Self { Self { enabled, ..Self::default() } }

    pub fn is_enabled(&self) -> bool { self.enabled }

    pub fn get(&mut self, key: &CacheKey) -> Option<Entry> {
        if !self.enabled { return None; }
        let e = self.map.get(key).copied();
        if e.is_some() { self.hits += 1; }
        e
    }

    pub fn put(&mut self, key: CacheKey, e: Entry) {
        if !self.enabled { return; }
        self.stores += 1;
        self.map.insert(key, e);
    }

    pub fn len(&self) -> usize { self.map.len() }

    pub fn hits(&self) -> u64 { self.hits }

    pub fn stores(&self) -> u64 { self.stores }
}
