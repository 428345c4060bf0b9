use crate::board::PlayerId;
use crate::search::eval::HeuristicVariant;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("threads must be at least 1")]
    ZeroThreads,
    #[error("forward pruning must keep at least one move")]
    ZeroForwardPrune,
    #[error("board width must be positive, got {0}")]
    BoardWidth(i32),
    #[error("max depth {max} is below the depth floor {floor}")]
    DepthRange { floor: u32, max: u32 },
    #[error("search is unbounded: set a time budget or a max depth")]
    Unbounded,
}

/// Historical tunings of the same engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Fixed depth 5 minimax on the score differential.
    Plain,
    /// Iterative deepening from depth 7 within 60 ms, ordering and cache on.
    #[default]
    Deepening,
    /// Deepening plus lossy top-3 forward pruning.
    Beam,
    /// Deepening with the 1000-point catch sentinel.
    Sentinel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub depth_floor: u32,
    pub max_depth: Option<u32>,
    pub time_budget_ms: Option<u64>,
    pub heuristic: HeuristicVariant,
    pub score_weight: f64,
    pub board_width: i32,
    pub alpha_beta: bool,
    pub use_cache: bool,
    pub order_moves: bool,
    /// Keep only the first this many children at full-width nodes, after ordering when
    /// `order_moves` is on. Unsound: it can change the minimax value.
    pub forward_prune: Option<usize>,
    pub threads: usize,
    pub player: PlayerId,
}

impl Default for SearchParams {
    fn default() -> Self { Self::preset(Preset::Deepening) }
}

impl SearchParams {
    pub fn preset(preset: Preset) -> Self {
        let deepening = Self {
            depth_floor: 7,
            max_depth: None,
            time_budget_ms: Some(60),
            heuristic: HeuristicVariant::Proximity,
            score_weight: 5.0,
            board_width: crate::board::grid::DEFAULT_WIDTH,
            alpha_beta: true,
            use_cache: true,
            order_moves: true,
            forward_prune: None,
            threads: 1,
            player: PlayerId::Zero,
        };
        match preset {
            Preset::Deepening => deepening,
            Preset::Plain => Self {
                depth_floor: 5,
                max_depth: Some(5),
                time_budget_ms: None,
                heuristic: HeuristicVariant::ScoreDifference,
                score_weight: 1.0,
                alpha_beta: false,
                use_cache: false,
                order_moves: false,
                ..deepening
            },
            Preset::Beam => Self { forward_prune: Some(3), ..deepening },
            Preset::Sentinel => Self { heuristic: HeuristicVariant::Sentinel, ..deepening },
        }
    }

    /// Fixed-depth search with no deadline.
    pub fn fixed_depth(depth: u32) -> Self {
        Self { depth_floor: depth, max_depth: Some(depth), time_budget_ms: None, ..Self::default() }
    }

    pub fn time_budget(&self) -> Option<Duration> { self.time_budget_ms.map(Duration::from_millis) }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 { return Err(ConfigError::ZeroThreads); }
        if self.forward_prune == Some(0) { return Err(ConfigError::ZeroForwardPrune); }
        if self.board_width <= 0 { return Err(ConfigError::BoardWidth(self.board_width)); }
        if let Some(max) = self.max_depth {
            if max < self.depth_floor { return Err(ConfigError::DepthRange { floor: self.depth_floor, max }); }
        }
        if self.max_depth.is_none() && self.time_budget_ms.is_none() { return Err(ConfigError::Unbounded); }
        Ok(())
    }
}
