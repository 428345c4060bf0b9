use crate::board::{Action, StateAdapter};
use crate::search::alphabeta::{SearchNode, Searcher};
use crate::search::params::SearchParams;
use log::debug;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Outcome of one decision plus search diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Decision {
    pub action: Action,
    pub value: f64,
    /// Deepest fully completed iteration, 0 if none completed.
    pub depth: u32,
    pub nodes: u64,
    /// Nodes whose children were generated.
    pub expanded: u64,
    pub cache_hits: u64,
    pub cache_stores: u64,
    #[serde(serialize_with = "as_millis")]
    pub elapsed: Duration,
    /// Whether the deadline, rather than a depth bound, ended the deepening.
    pub timed_out: bool,
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() * 1000.0)
}

/// Pick an action for the controlled player within `params.time_budget_ms`.
pub fn decide<S: StateAdapter>(state: S, params: &SearchParams) -> Decision {
    let deadline = params.time_budget().map(|b| Instant::now() + b);
    decide_until(state, params, deadline)
}

/// Iterative deepening against an absolute deadline (`None` never expires).
///
/// Only fully completed iterations count. If none completes the answer is `Stay`.
pub fn decide_until<S: StateAdapter>(state: S, params: &SearchParams, deadline: Option<Instant>) -> Decision {
    let t0 = Instant::now();
    let root = SearchNode::root(state, params.player);
    let mut searcher = Searcher::new(params, deadline);
    let floor = params.depth_floor.max(1);
    // Without a deadline or ceiling, search the floor once.
    let max_depth = match (params.max_depth, deadline) {
        (Some(m), _) => m.max(floor),
        (None, Some(_)) => u32::MAX,
        (None, None) => floor,
    };

    let mut best = Decision {
        action: Action::Stay,
        value: searcher.evaluator().evaluate(&root.state),
        depth: 0,
        nodes: 0,
        expanded: 0,
        cache_hits: 0,
        cache_stores: 0,
        elapsed: Duration::ZERO,
        timed_out: false,
    };
    let mut depth = floor;
    while depth <= max_depth {
        if searcher.deadline_passed() { best.timed_out = true; break; }
        searcher.begin_iteration();
        let r = searcher.search_depth(&root, depth);
        if searcher.timed_out() {
            debug!("depth {} abandoned at deadline after {} nodes", depth, searcher.nodes());
            best.timed_out = true;
            break;
        }
        best.action = r.action;
        best.value = r.value;
        best.depth = depth;
        debug!("depth {} done: {} value={:.3} nodes={} cache={}", depth, r.action, r.value, r.nodes, searcher.cache().len());
        if !searcher.hit_depth_limit() {
            debug!("tree exhausted at depth {}", depth);
            break;
        }
        depth = match depth.checked_add(1) { Some(d) => d, None => break };
    }
    best.nodes = searcher.nodes();
    best.expanded = searcher.expanded();
    best.cache_hits = searcher.cache().hits();
    best.cache_stores = searcher.cache().stores();
    best.elapsed = t0.elapsed();
    best
}
