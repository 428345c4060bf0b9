use crate::board::{PlayerId, Pos, StateAdapter};
use serde::{Deserialize, Serialize};

/// Returned outright by [`HeuristicVariant::Sentinel`] when a positive fish sits on our hook.
pub const CATCH_SENTINEL: f64 = 1000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicVariant {
    /// Raw point differential, nothing else.
    ScoreDifference,
    /// Weighted differential plus best fish term; a caught positive fish short-circuits to 1000.
    Sentinel,
    /// Weighted differential plus best fish term; a caught positive fish contributes its own score.
    #[default]
    Proximity,
}

/// Hook-to-fish distance: linear on y, toroidal on x. Hooks cannot cross, so when the rival
/// hook sits on one of the two x arcs only the other arc is open.
pub fn hook_distance(hook: Pos, rival: Pos, fish: Pos, width: i32) -> i32 {
    let dx = (hook.x - fish.x).abs();
    let dy = (hook.y - fish.y).abs();
    let (lo, hi) = (hook.x.min(fish.x), hook.x.max(fish.x));
    let x = if lo < rival.x && rival.x < hi {
        width - dx
    } else if rival.x < lo || rival.x > hi {
        dx
    } else {
        dx.min(width - dx)
    };
    x + dy
}

#[derive(Clone, Copy, Debug)]
pub struct Evaluator {
    pub variant: HeuristicVariant,
    pub score_weight: f64,
    pub board_width: i32,
    pub me: PlayerId,
}

impl Evaluator {
    pub fn new(variant: HeuristicVariant, score_weight: f64, board_width: i32, me: PlayerId) -> Self {
        Self { variant, score_weight, board_width, me }
    }

    /// Score `state` for the controlled player, whoever is to move.
    pub fn evaluate<S: StateAdapter>(&self, state: &S) -> f64 {
        let scores = state.player_scores();
        let diff = (scores[self.me.index()] - scores[self.me.other().index()]) as f64;
        if self.variant == HeuristicVariant::ScoreDifference { return diff; }
        let weighted = self.score_weight * diff;
        let hooks = state.hook_positions();
        let hook = hooks[self.me.index()];
        let rival = hooks[self.me.other().index()];
        let fish_scores = state.fish_scores();
        // Best single catch, never below zero. A positive fish on the hook overrides it.
        let mut best = 0.0f64;
        let mut on_hook: Option<i32> = None;
        for (id, pos) in state.fish_positions() {
            let Some(&score) = fish_scores.get(&id) else { continue };
            let d = hook_distance(hook, rival, pos, self.board_width);
            if d == 0 && score > 0 {
                if self.variant == HeuristicVariant::Sentinel { return CATCH_SENTINEL; }
                on_hook = Some(on_hook.map_or(score, |s| s.max(score)));
                continue;
            }
            best = best.max(score as f64 * (-(d as f64)).exp());
        }
        weighted + on_hook.map_or(best, |s| s as f64)
    }
}
