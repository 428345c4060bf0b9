use fishbot::board::{Action, PlayerId, Pos, Snapshot, SnapshotError, StateAdapter};
use pretty_assertions::assert_eq;

#[test]
fn parses_minimal_json_with_defaults() {
    let raw = r#"{
        "hooks": [{"x": 3, "y": 19}, {"x": 12, "y": 19}],
        "fish": {"0": {"pos": {"x": 4, "y": 2}, "score": 11}, "7": {"pos": {"x": 9, "y": 5}, "score": -4}}
    }"#;
    let snap = Snapshot::from_json(raw).expect("valid snapshot");
    let expected = Snapshot::new([Pos::new(3, 19), Pos::new(12, 19)])
        .with_fish(0, Pos::new(4, 2), 11)
        .with_fish(7, Pos::new(9, 5), -4);
    assert_eq!(snap, expected);
    assert_eq!(snap.fish_scores().get(&7), Some(&-4));
    assert_eq!(snap.player_scores(), [0, 0]);
}

#[test]
fn rejects_invalid_boards() {
    let bad_json = Snapshot::from_json("{\"hooks\": 3}");
    assert!(matches!(bad_json, Err(SnapshotError::Json(_))));

    let shared = Snapshot::new([Pos::new(3, 19), Pos::new(3, 10)]);
    assert!(matches!(shared.validate(), Err(SnapshotError::SharedColumn(3))));

    let off = Snapshot::new([Pos::new(3, 19), Pos::new(25, 10)]);
    assert!(matches!(off.validate(), Err(SnapshotError::HookOutOfBounds { player: PlayerId::One, .. })));

    let fish_off = Snapshot::new([Pos::new(3, 19), Pos::new(8, 10)]).with_fish(2, Pos::new(1, -1), 5);
    assert!(matches!(fish_off.validate(), Err(SnapshotError::FishOutOfBounds { id: 2, .. })));

    let mut tiny = Snapshot::new([Pos::new(0, 0), Pos::new(1, 0)]);
    tiny.width = 0;
    assert!(matches!(tiny.validate(), Err(SnapshotError::Dimensions { .. })));
}

#[test]
fn hook_moves_wrap_clamp_and_block() {
    let snap = Snapshot::new([Pos::new(0, 19), Pos::new(1, 5)]).with_fish(0, Pos::new(10, 10), 3);
    assert_eq!(snap.apply(PlayerId::Zero, Action::Left).hooks[0], Pos::new(19, 19));
    assert_eq!(snap.apply(PlayerId::Zero, Action::Up).hooks[0], Pos::new(0, 19));
    assert_eq!(snap.apply(PlayerId::Zero, Action::Down).hooks[0], Pos::new(0, 18));
    // Column 1 belongs to the rival boat.
    assert_eq!(snap.apply(PlayerId::Zero, Action::Right).hooks[0], Pos::new(0, 19));
    assert_eq!(snap.apply(PlayerId::One, Action::Left).hooks[1], Pos::new(1, 5));
}

#[test]
fn landing_on_fish_catches_it() {
    let snap = Snapshot::new([Pos::new(4, 8), Pos::new(12, 19)])
        .with_scores([1, 2])
        .with_fish(0, Pos::new(4, 7), 6)
        .with_fish(1, Pos::new(15, 3), 2);
    let next = snap.apply(PlayerId::Zero, Action::Down);
    assert_eq!(next.scores, [7, 2]);
    assert_eq!(next.fish.keys().copied().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn children_cover_every_action_until_fish_run_out() {
    let snap = Snapshot::new([Pos::new(4, 8), Pos::new(12, 19)]).with_fish(0, Pos::new(4, 7), 6);
    let kids = snap.compute_children(PlayerId::Zero);
    assert_eq!(kids.iter().map(|(a, _)| *a).collect::<Vec<_>>(), Action::ALL.to_vec());
    let (_, caught) = kids.into_iter().find(|(a, _)| *a == Action::Down).expect("down child");
    assert!(caught.compute_children(PlayerId::One).is_empty());
}

#[test]
fn decision_serializes_action_by_name() {
    use fishbot::search::{decide, SearchParams};
    let snap = Snapshot::new([Pos::new(4, 8), Pos::new(12, 19)]).with_fish(0, Pos::new(4, 7), 6);
    let d = decide(snap, &SearchParams::fixed_depth(1));
    let v: serde_json::Value = serde_json::to_value(d).expect("serializable");
    assert_eq!(v["action"], "down");
    assert_eq!(v["depth"], 1);
    assert!(v["elapsed"].is_number());
    for field in ["nodes", "expanded", "cache_hits", "cache_stores"] {
        assert!(v[field].is_u64(), "missing {field}");
    }
}
