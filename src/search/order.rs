use crate::board::{Action, StateAdapter};
use crate::search::alphabeta::{SearchNode, Side};
use crate::search::eval::Evaluator;

/// Sort children best-first for the side to move by static value.
///
/// The sort is stable, so equal values keep the adapter's order; the engine takes the
/// first child reaching the best value, which makes this order the tie-break.
pub fn order_children<S: StateAdapter>(children: Vec<SearchNode<S>>, side: Side, eval: &Evaluator) -> Vec<SearchNode<S>> {
    let mut keyed: Vec<(f64, SearchNode<S>)> = children.into_iter().map(|c| (eval.evaluate(&c.state), c)).collect();
    match side {
        Side::Max => keyed.sort_by(|a, b| b.0.total_cmp(&a.0)),
        Side::Min => keyed.sort_by(|a, b| a.0.total_cmp(&b.0)),
    }
    keyed.into_iter().map(|(_, c)| c).collect()
}

/// Lossy beam: at full-width nodes keep only the first `keep` (already ordered) children.
pub fn forward_prune<S>(children: &mut Vec<SearchNode<S>>, keep: usize) {
    if children.len() == Action::ALL.len() { children.truncate(keep.max(1)); }
}
