use cue_timing_core::{
    parse_stored_timeline_json, resolve, Anchor, Easing, GroupSpec, StaggerSpec, TimelineEntry,
    TimingError,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// it should load and resolve the intro fixture with the expected windows
#[test]
fn intro_fixture_resolves() {
    let json = cue_test_fixtures::timeline_json("intro").expect("fixture present");
    let stored = parse_stored_timeline_json(&json).expect("fixture parses");
    assert_eq!(stored.name, "intro");

    let timeline = resolve(&stored.entries).unwrap();
    let headline = timeline.get("headline").unwrap();
    approx(headline.start, 0.0, 1e-6);
    approx(headline.end, 0.3, 1e-6);

    // "-=0.1" overlaps into the headline; the centered group keeps its
    // origin item on the base instant and spans the full stagger.
    let cards = timeline.get("cards").unwrap();
    approx(cards.start, 0.2, 1e-6);
    approx(cards.end, 0.2 + 0.4 + 0.4, 1e-6);
    assert_eq!(cards.item_offsets.len(), 5);
    approx(cards.item_offsets[2], 0.0, 1e-6);
    approx(cards.item_offsets[0], cards.item_offsets[4], 1e-6);

    let cta = timeline.get("cta").unwrap();
    approx(cta.start, 1.2, 1e-6);
    approx(timeline.total_duration(), 1.45, 1e-6);
}

/// it should parse all four anchor forms from the hero fixture
#[test]
fn hero_fixture_anchor_forms() {
    let json = cue_test_fixtures::timeline_json("hero-overlap").expect("fixture present");
    let stored = parse_stored_timeline_json(&json).unwrap();
    let anchors: Vec<_> = stored.entries.iter().map(|e| e.anchor).collect();
    assert_eq!(anchors[0], Anchor::At(0.2));
    assert_eq!(anchors[1], Anchor::Before(0.25));
    assert_eq!(anchors[2], Anchor::Auto);
    assert_eq!(anchors[3], Anchor::After(0.1));

    let timeline = resolve(&stored.entries).unwrap();
    let e = timeline.entries();
    approx(e[0].start, 0.2, 1e-6);
    approx(e[0].end, 0.7, 1e-6);
    approx(e[1].start, 0.45, 1e-6);
    approx(e[2].start, 0.8, 1e-6);

    // Grouped badges: base 1.2, start lifted by the 0.04 start delay.
    let badges = timeline.get("badges").unwrap();
    approx(badges.start, 1.24, 1e-6);
    approx(badges.end, 1.2 + 0.22 + 0.2, 1e-5);
    // Origin index 1: items 0 and 2 are equidistant.
    approx(badges.item_offsets[0], badges.item_offsets[2], 1e-6);
}

/// it should resolve a stored document identically to hand-built entries
#[test]
fn stored_matches_hand_built() {
    let json = r#"{
        "name": "pair",
        "entries": [
            { "id": "a", "duration": 0.3 },
            { "id": "b", "duration": 0.4, "at": "-=0.1" }
        ]
    }"#;
    let stored = parse_stored_timeline_json(json).unwrap();
    let hand_built = vec![
        TimelineEntry::new("a", 0.3),
        TimelineEntry {
            anchor: Anchor::Before(0.1),
            ..TimelineEntry::new("b", 0.4)
        },
    ];
    assert_eq!(stored.entries, hand_built);
    assert_eq!(
        serde_json::to_string(&resolve(&stored.entries).unwrap()).unwrap(),
        serde_json::to_string(&resolve(&hand_built).unwrap()).unwrap()
    );
}

/// it should map named curves and control arrays onto the easing type
#[test]
fn curves_parse_both_forms() {
    let json = r#"{
        "name": "curves",
        "entries": [
            { "id": "named", "duration": 0.2,
              "group": { "items": 3, "stagger": { "step": 0.1, "curve": "easeInOut" } } },
            { "id": "custom", "duration": 0.2,
              "group": { "items": 3, "stagger": { "step": 0.1, "curve": [0.42, 0.0, 0.58, 1.0] } } }
        ]
    }"#;
    let stored = parse_stored_timeline_json(json).unwrap();
    let curve_of = |entry: &TimelineEntry| entry.group.as_ref().unwrap().stagger.curve;
    assert_eq!(curve_of(&stored.entries[0]), Easing::EaseInOut);
    assert_eq!(
        curve_of(&stored.entries[1]),
        Easing::CubicBezier([0.42, 0.0, 0.58, 1.0])
    );
}

/// it should reject malformed anchors, curves, and origins with parse errors
#[test]
fn malformed_documents_rejected() {
    let bad_anchor = r#"{ "name": "x", "entries": [ { "id": "a", "duration": 0.1, "at": "~0.3" } ] }"#;
    assert!(matches!(
        parse_stored_timeline_json(bad_anchor),
        Err(TimingError::Parse { .. })
    ));

    let bad_magnitude =
        r#"{ "name": "x", "entries": [ { "id": "a", "duration": 0.1 }, { "id": "b", "duration": 0.1, "at": "+=fast" } ] }"#;
    assert!(matches!(
        parse_stored_timeline_json(bad_magnitude),
        Err(TimingError::Parse { .. })
    ));

    let negative_absolute =
        r#"{ "name": "x", "entries": [ { "id": "a", "duration": 0.1, "at": -2.0 } ] }"#;
    assert!(matches!(
        parse_stored_timeline_json(negative_absolute),
        Err(TimingError::Parse { .. })
    ));

    let bad_curve = r#"{ "name": "x", "entries": [ { "id": "a", "duration": 0.1,
        "group": { "items": 2, "stagger": { "step": 0.1, "curve": "bouncy" } } } ] }"#;
    assert!(matches!(
        parse_stored_timeline_json(bad_curve),
        Err(TimingError::Parse { .. })
    ));

    let bad_origin = r#"{ "name": "x", "entries": [ { "id": "a", "duration": 0.1,
        "group": { "items": 2, "stagger": { "step": 0.1, "origin": "middle" } } } ] }"#;
    assert!(matches!(
        parse_stored_timeline_json(bad_origin),
        Err(TimingError::Parse { .. })
    ));
}

/// it should surface placement errors from the validation pass
#[test]
fn bad_first_anchor_fixture_rejected() {
    let json = cue_test_fixtures::timeline_json("bad-first-anchor").expect("fixture present");
    assert_eq!(
        parse_stored_timeline_json(&json).unwrap_err(),
        TimingError::InvalidFirstAnchor { id: "lead".into() }
    );
}

/// it should propagate grouped stagger validation through the loader
#[test]
fn stagger_errors_surface_from_loader() {
    let json = r#"{ "name": "x", "entries": [ { "id": "a", "duration": 0.1,
        "group": { "items": 3, "stagger": { "step": 0.1, "origin": 7 } } } ] }"#;
    assert_eq!(
        parse_stored_timeline_json(json).unwrap_err(),
        TimingError::InvalidOriginIndex { index: 7, count: 3 }
    );
}

/// it should list every fixture named in the manifest
#[test]
fn manifest_names_complete() {
    let names = cue_test_fixtures::timeline_names();
    for expected in ["bad-first-anchor", "hero-overlap", "intro"] {
        assert!(names.iter().any(|n| n == expected), "missing {expected}");
    }
}

/// it should keep GroupSpec data intact through parsing
#[test]
fn group_spec_round_trip() {
    let json = cue_test_fixtures::timeline_json("hero-overlap").unwrap();
    let stored = parse_stored_timeline_json(&json).unwrap();
    let badges = stored.entries.iter().find(|e| e.id == "badges").unwrap();
    assert_eq!(
        badges.group,
        Some(GroupSpec {
            items: 4,
            stagger: StaggerSpec {
                step: 0.06,
                start_delay: 0.04,
                origin: cue_timing_core::StaggerOrigin::Index(1),
                curve: Easing::CubicBezier([0.3, 0.0, 0.7, 1.0]),
            }
        })
    );
}
