use fishbot::board::{Action, PlayerId, Snapshot};
use fishbot::search::{decide, decide_until, SearchNode, SearchParams, Searcher};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

fn random_board(seed: u64) -> Snapshot {
    let mut rng = SmallRng::seed_from_u64(seed);
    Snapshot::random(&mut rng, 10)
}

#[test]
fn expired_deadline_still_returns_stay() {
    let p = SearchParams::default();
    let t0 = Instant::now();
    let d = decide_until(random_board(1), &p, Some(Instant::now()));
    assert!(t0.elapsed() < Duration::from_millis(50), "blocked for {:?}", t0.elapsed());
    assert_eq!(d.action, Action::Stay);
    assert_eq!(d.depth, 0);
    assert!(d.timed_out);
}

#[test]
fn zero_budget_returns_stay() {
    let mut p = SearchParams::default();
    p.time_budget_ms = Some(0);
    let d = decide(random_board(2), &p);
    assert_eq!(d.action, Action::Stay);
    assert_eq!(d.depth, 0);
}

#[test]
fn budget_bounds_wall_time() {
    let mut p = SearchParams::default();
    p.time_budget_ms = Some(20);
    let t0 = Instant::now();
    let d = decide(random_board(3), &p);
    let elapsed = t0.elapsed();
    assert!(Action::ALL.contains(&d.action));
    assert!(elapsed < Duration::from_millis(500), "search exceeded time: {:?}", elapsed);
}

#[test]
fn abandoned_iteration_keeps_last_completed_result() {
    let board = random_board(4);
    let mut p = SearchParams::default();
    p.depth_floor = 1;
    p.time_budget_ms = Some(30);
    let d = decide(board.clone(), &p);
    assert!(d.timed_out, "unbounded deepening should end at the deadline");
    assert!(d.depth >= 1, "not even depth 1 finished");

    let fixed = SearchParams::fixed_depth(d.depth);
    let r = Searcher::new(&fixed, None).search_depth(&SearchNode::root(board, PlayerId::Zero), d.depth);
    assert_eq!(d.value, r.value);
}

#[test]
fn deadline_is_checked_inside_the_tree() {
    // One deep iteration: the deadline must stop it mid-recursion.
    let mut p = SearchParams::fixed_depth(40);
    p.time_budget_ms = Some(15);
    p.use_cache = false;
    let t0 = Instant::now();
    let d = decide(random_board(5), &p);
    assert!(t0.elapsed() < Duration::from_millis(500), "took {:?}", t0.elapsed());
    assert!(d.timed_out);
    assert_eq!(d.action, Action::Stay);
    assert_eq!(d.depth, 0);
}
