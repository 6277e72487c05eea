//! End-to-end scenarios over the public API: parse, build, extract, re-encode.

use cpuprofile_model::{sub_profile, Profile, TimeRange};
use pretty_assertions::assert_eq;
use serde_json::json;

/// Frame table {A: root, B: parent=A, C: parent=B} with samples
/// [(t=0, C), (t=5, B), (t=10, C)]
fn chain_profile() -> Profile {
    Profile::from_json(&json!({
        "samplePeriod": 1000,
        "sampleCount": 3,
        "timeOriginMicros": 0,
        "timeExtentMicros": 10,
        "stackFrames": {
            "140225212960768-1": {"name": "A", "category": "user", "resolvedUrl": "app.js"},
            "140225212960768-2": {"name": "B", "category": "user", "parent": "140225212960768-1", "resolvedUrl": "app.js"},
            "140225212960768-3": {"name": "C", "category": "user", "parent": "140225212960768-2", "resolvedUrl": "lib.js"}
        },
        "traceEvents": [
            {"sf": "140225212960768-3", "ts": 0},
            {"sf": "140225212960768-2", "ts": 5},
            {"sf": "140225212960768-3", "ts": 10}
        ]
    }))
    .unwrap()
}

#[test]
fn builds_expected_tree_shape_and_counts() {
    let profile = chain_profile();
    let tree = profile.build_call_tree().unwrap();

    // Path super-root -> A -> B -> C
    let root = tree.root();
    assert_eq!(tree.node(root).children.len(), 1);
    let a = tree.node(root).children[0];
    assert_eq!(tree.node(a).name, "A");
    let b = tree.node(a).children[0];
    assert_eq!(tree.node(b).name, "B");
    let c = tree.node(b).children[0];
    assert_eq!(tree.node(c).name, "C");
    assert!(tree.node(c).children.is_empty());

    assert_eq!(tree.node(c).exclusive_samples, 2);
    assert_eq!(tree.node(b).exclusive_samples, 1);
    assert_eq!(tree.node(a).exclusive_samples, 0);

    assert_eq!(tree.inclusive_samples(c), 2);
    assert_eq!(tree.inclusive_samples(b), 3);
    assert_eq!(tree.inclusive_samples(a), 3);
}

#[test]
fn root_inclusive_count_conserves_samples() {
    let profile = chain_profile();
    let tree = profile.build_call_tree().unwrap();
    assert_eq!(
        tree.inclusive_samples(tree.root()),
        profile.samples().len() as u64
    );
}

#[test]
fn extracting_window_keeps_boundary_samples_and_ancestors() {
    let profile = chain_profile();
    let sub = sub_profile(&profile, TimeRange::new(3, 10)).unwrap();

    let picked: Vec<(u64, &str)> = sub
        .samples()
        .iter()
        .map(|s| (s.ts, s.sf.as_str()))
        .collect();
    assert_eq!(
        picked,
        vec![(5, "140225212960768-2"), (10, "140225212960768-3")]
    );
    assert_eq!(sub.sample_count(), 2);

    // A, B, C all retained: C's chain requires B and A
    assert_eq!(sub.frames().len(), 3);
    for frame in sub.frames().values() {
        if let Some(parent) = &frame.parent {
            assert!(sub.frames().contains_key(parent));
        }
    }
}

#[test]
fn extraction_is_a_projection_of_the_parent() {
    let profile = chain_profile();
    let window = TimeRange::new(0, 5);
    let sub = sub_profile(&profile, window).unwrap();

    let expected: Vec<_> = profile
        .samples()
        .iter()
        .filter(|s| window.contains(s.ts))
        .cloned()
        .collect();
    assert_eq!(sub.samples(), expected.as_slice());
}

#[test]
fn window_outside_parent_range_yields_empty_profile() {
    let profile = chain_profile();
    let sub = sub_profile(&profile, TimeRange::new(500, 600)).unwrap();
    assert_eq!(sub.sample_count(), 0);
    assert!(sub.frames().is_empty());
    assert_eq!(sub.time_range(), Some(TimeRange::new(500, 600)));
}

#[test]
fn extracted_profile_builds_its_own_tree() {
    let profile = chain_profile();
    let sub = sub_profile(&profile, TimeRange::new(3, 10)).unwrap();
    let tree = sub.build_call_tree().unwrap();
    assert_eq!(tree.inclusive_samples(tree.root()), 2);
    // The B sample is exclusive to B; the C sample flows through B
    let b = tree.find("140225212960768-2").unwrap();
    assert_eq!(tree.node(b).exclusive_samples, 1);
    assert_eq!(tree.inclusive_samples(b), 2);
}

#[test]
fn serialize_then_parse_round_trips() {
    let profile = chain_profile();
    let value = cpuprofile_model::to_json(&profile).unwrap();
    let reparsed = Profile::from_json(&value).unwrap();
    assert_eq!(reparsed, profile);

    // And the same through an extraction
    let sub = sub_profile(&profile, TimeRange::new(3, 10)).unwrap();
    let sub_value = cpuprofile_model::to_json(&sub).unwrap();
    assert_eq!(Profile::from_json(&sub_value).unwrap(), sub);
}

#[test]
fn cpu_ratios_partition_the_tree() {
    let profile = chain_profile();
    let tree = profile.build_call_tree().unwrap();
    let c = tree.find("140225212960768-3").unwrap();
    let b = tree.find("140225212960768-2").unwrap();

    assert_eq!(tree.cpu_ratio(tree.root()).unwrap(), 1.0);
    assert_eq!(tree.cpu_ratio(b).unwrap(), 1.0);
    let ratio_c = tree.cpu_ratio(c).unwrap();
    assert!(ratio_c > 0.0 && ratio_c <= 1.0);
}
