use crate::board::{Action, PlayerId, StateAdapter};
use crate::search::eval::Evaluator;
use crate::search::order;
use crate::search::params::SearchParams;
use crate::search::tt::{Cache, CacheKey, Entry};
use log::{trace, warn};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::time::Instant;

/// Which bound the side to move is pushing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Max,
    Min,
}

impl Side {
    pub fn flip(self) -> Self {
        match self { Side::Max => Side::Min, Side::Min => Side::Max }
    }
}

/// A state together with the action that produced it and the player who played it.
#[derive(Clone, Debug)]
pub struct SearchNode<S> {
    pub state: S,
    pub action: Action,
    pub player: PlayerId,
}

impl<S: StateAdapter> SearchNode<S> {
    pub fn root(state: S, player: PlayerId) -> Self { Self { state, action: Action::Stay, player } }

    pub fn compute_children(&self, mover: PlayerId) -> Vec<SearchNode<S>> {
        self.state.compute_children(mover).into_iter()
            .map(|(action, state)| SearchNode { state, action, player: mover })
            .collect()
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub value: f64,
    pub action: Action,
    pub nodes: u64,
}

/// One decision's worth of search state. Built fresh per decision and dropped afterwards,
/// so the cache and deadline never leak between decisions.
pub struct Searcher {
    params: SearchParams,
    eval: Evaluator,
    cache: Cache,
    deadline: Option<Instant>,
    // Root-split workers; `None` searches serially.
    pool: Option<ThreadPool>,
    timed_out: bool,
    hit_depth_limit: bool,
    pub(crate) nodes: u64,
    expanded: u64,
}

impl Searcher {
    pub fn new(params: &SearchParams, deadline: Option<Instant>) -> Self {
        let eval = Evaluator::new(params.heuristic, params.score_weight, params.board_width, params.player);
        let pool = if params.threads > 1 {
            match ThreadPoolBuilder::new().num_threads(params.threads).build() {
                Ok(pool) => Some(pool),
                Err(e) => {
                    warn!("could not start {} search threads, searching serially: {}", params.threads, e);
                    None
                }
            }
        } else {
            None
        };
        Self {
            params: params.clone(),
            eval,
            cache: Cache::new(params.use_cache),
            deadline,
            pool,
            timed_out: false,
            hit_depth_limit: false,
            nodes: 0,
            expanded: 0,
        }
    }

    pub fn evaluator(&self) -> &Evaluator { &self.eval }
    pub fn cache(&self) -> &Cache { &self.cache }
    pub fn nodes(&self) -> u64 { self.nodes }
    /// Nodes whose children were generated.
    pub fn expanded(&self) -> u64 { self.expanded }
    pub fn timed_out(&self) -> bool { self.timed_out }
    pub fn hit_depth_limit(&self) -> bool { self.hit_depth_limit }

    /// Threads the root split actually runs on.
    pub fn worker_threads(&self) -> usize {
        self.pool.as_ref().map_or(1, |p| p.current_num_threads())
    }

    pub fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|dl| Instant::now() >= dl)
    }

    /// Clear per-iteration flags; the cache survives across iterations of one decision.
    pub fn begin_iteration(&mut self) {
        self.timed_out = false;
        self.hit_depth_limit = false;
    }

    fn cutoff_test(&mut self, depth: u32) -> bool {
        if depth == 0 { self.hit_depth_limit = true; return true; }
        if self.deadline_passed() { self.timed_out = true; return true; }
        false
    }

    fn mover(&self, side: Side) -> PlayerId {
        match side { Side::Max => self.params.player, Side::Min => self.params.player.other() }
    }

    fn prepare_children<S: StateAdapter>(&self, mut children: Vec<SearchNode<S>>, side: Side) -> Vec<SearchNode<S>> {
        if self.params.order_moves {
            children = order::order_children(children, side, &self.eval);
        }
        // Without ordering this keeps the first `keep` in generation order.
        if let Some(keep) = self.params.forward_prune {
            order::forward_prune(&mut children, keep);
        }
        children
    }

    /// Depth-limited minimax with optional alpha-beta pruning. Returns the node value and
    /// the action of the first child reaching it (`Stay` at leaves).
    pub fn search<S: StateAdapter>(&mut self, node: &SearchNode<S>, side: Side, depth: u32, mut alpha: f64, mut beta: f64) -> (f64, Action) {
        self.nodes += 1;
        if self.cutoff_test(depth) { return (self.eval.evaluate(&node.state), Action::Stay); }

        let key = if self.cache.is_enabled() { Some(CacheKey::new(&node.state, side, depth)) } else { None };
        if let Some(e) = key.as_ref().and_then(|k| self.cache.get(k)) {
            // The stored subtree may have reached the limit; keep deepening.
            self.hit_depth_limit = true;
            return (e.value, e.action);
        }

        let children = node.compute_children(self.mover(side));
        self.expanded += 1;
        if children.is_empty() {
            let v = self.eval.evaluate(&node.state);
            if let Some(k) = key { self.cache.put(k, Entry { value: v, action: Action::Stay }); }
            return (v, Action::Stay);
        }
        let children = self.prepare_children(children, side);

        if !self.params.alpha_beta {
            alpha = f64::NEG_INFINITY;
            beta = f64::INFINITY;
        }
        let (orig_alpha, orig_beta) = (alpha, beta);
        let mut best_value = match side { Side::Max => f64::NEG_INFINITY, Side::Min => f64::INFINITY };
        let mut best_action = Action::Stay;
        for child in &children {
            let (value, _) = if self.params.alpha_beta {
                self.search(child, side.flip(), depth - 1, alpha, beta)
            } else {
                self.search(child, side.flip(), depth - 1, f64::NEG_INFINITY, f64::INFINITY)
            };
            if self.timed_out { break; }
            match side {
                Side::Max => {
                    if value > best_value { best_value = value; best_action = child.action; }
                    alpha = alpha.max(best_value);
                }
                Side::Min => {
                    if value < best_value { best_value = value; best_action = child.action; }
                    beta = beta.min(best_value);
                }
            }
            if self.params.alpha_beta && beta <= alpha {
                trace!("cutoff at depth {} after {}", depth, child.action);
                break;
            }
        }

        // Values on or outside the entry window are bounds, not exact; leave them out.
        if let Some(k) = key {
            if !self.timed_out && orig_alpha < best_value && best_value < orig_beta {
                self.cache.put(k, Entry { value: best_value, action: best_action });
            }
        }
        (best_value, best_action)
    }

    /// Full-window search of `root` for the controlled player at `depth`.
    pub fn search_depth<S: StateAdapter>(&mut self, root: &SearchNode<S>, depth: u32) -> SearchResult {
        if self.pool.is_some() && depth > 1 { return self.search_depth_parallel(root, depth); }
        let (value, action) = self.search(root, Side::Max, depth, f64::NEG_INFINITY, f64::INFINITY);
        SearchResult { value, action, nodes: self.nodes }
    }

    // Root split: every root child gets its own worker, full window and private cache.
    // Alpha-beta bounds stay local to each branch.
    fn search_depth_parallel<S: StateAdapter>(&mut self, root: &SearchNode<S>, depth: u32) -> SearchResult {
        self.nodes += 1;
        if self.cutoff_test(depth) {
            return SearchResult { value: self.eval.evaluate(&root.state), action: Action::Stay, nodes: self.nodes };
        }
        let children = root.compute_children(self.params.player);
        self.expanded += 1;
        if children.is_empty() {
            return SearchResult { value: self.eval.evaluate(&root.state), action: Action::Stay, nodes: self.nodes };
        }
        let children = self.prepare_children(children, Side::Max);

        let mut worker_params = self.params.clone();
        worker_params.threads = 1;
        let deadline = self.deadline;
        let run = |child: &SearchNode<S>| {
            let mut w = Searcher::new(&worker_params, deadline);
            let (v, _) = w.search(child, Side::Min, depth - 1, f64::NEG_INFINITY, f64::INFINITY);
            (child.action, v, w)
        };
        let results: Vec<(Action, f64, Searcher)> = match &self.pool {
            Some(pool) => pool.install(|| children.par_iter().map(run).collect()),
            None => children.iter().map(run).collect(),
        };

        // Reduce in ordered-child order so ties resolve exactly as in the serial search.
        let mut best_value = f64::NEG_INFINITY;
        let mut best_action = Action::Stay;
        for (action, v, w) in results {
            self.nodes += w.nodes;
            self.expanded += w.expanded;
            self.cache.hits += w.cache.hits;
            self.cache.stores += w.cache.stores;
            self.timed_out |= w.timed_out;
            self.hit_depth_limit |= w.hit_depth_limit;
            if v > best_value { best_value = v; best_action = action; }
        }
        SearchResult { value: best_value, action: best_action, nodes: self.nodes }
    }
}
