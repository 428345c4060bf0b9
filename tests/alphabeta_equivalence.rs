use fishbot::board::{PlayerId, Snapshot};
use fishbot::search::{SearchNode, SearchParams, Searcher};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn run(snap: &Snapshot, p: &SearchParams, depth: u32) -> (f64, u64) {
    let mut s = Searcher::new(p, None);
    let r = s.search_depth(&SearchNode::root(snap.clone(), PlayerId::Zero), depth);
    (r.value, r.nodes)
}

fn minimax_only(depth: u32) -> SearchParams {
    let mut p = SearchParams::fixed_depth(depth);
    p.alpha_beta = false;
    p.use_cache = false;
    p.order_moves = false;
    p
}

#[test]
fn pruning_never_changes_value() {
    let mut rng = SmallRng::seed_from_u64(0xF15);
    let (mut pruned_nodes, mut full_nodes) = (0u64, 0u64);
    for _ in 0..12 {
        let snap = Snapshot::random(&mut rng, 6);
        for depth in 1..=4 {
            let full = minimax_only(depth);
            let mut ab = full.clone();
            ab.alpha_beta = true;
            let (v_full, n_full) = run(&snap, &full, depth);
            let (v_ab, n_ab) = run(&snap, &ab, depth);
            assert_eq!(v_ab, v_full, "depth {depth} on {snap:?}");
            assert!(n_ab <= n_full, "alpha-beta visited more nodes: {n_ab} vs {n_full}");
            pruned_nodes += n_ab;
            full_nodes += n_full;
        }
    }
    assert!(pruned_nodes < full_nodes, "pruning never cut anything: {pruned_nodes} vs {full_nodes}");
}

#[test]
fn ordered_cached_search_matches_plain_minimax() {
    let mut rng = SmallRng::seed_from_u64(0xBEEF);
    for _ in 0..8 {
        let snap = Snapshot::random(&mut rng, 5);
        for depth in 1..=4 {
            let (v_full, _) = run(&snap, &minimax_only(depth), depth);
            let (v_all, _) = run(&snap, &SearchParams::fixed_depth(depth), depth);
            assert_eq!(v_all, v_full, "depth {depth} on {snap:?}");
        }
    }
}
