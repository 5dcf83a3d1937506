use soundbrowser_testing::assertions::{
    assert_controls, assert_entry_labels, assert_page_position,
};
use soundbrowser_testing::fixtures::{mixed_icons, mixed_keys, numbered_keys};
use soundbrowser_testing::TestWorld;

fn numbered_world() -> TestWorld {
    TestWorld::new()
        .with_catalog(&numbered_keys(81))
        .with_icons(&["SOUND".to_string()])
}

#[test]
fn test_middle_page_has_every_control() {
    let world = numbered_world();
    let result = world.run_json(&["page", "--offset", "1"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_page_position(&json, 2, 3).unwrap();
    assert_controls(
        &json,
        &[
            "previous_page",
            "stop_sound",
            "decrease_pitch",
            "increase_pitch",
            "current_page",
            "next_page",
        ],
    )
    .unwrap();

    let entries: Vec<String> = (36..72).map(|i| format!("{}: SOUND_{:03}", i, i)).collect();
    let expected: Vec<&str> = entries.iter().map(String::as_str).collect();
    assert_entry_labels(&json, &expected).unwrap();

    assert_eq!(json["content"]["slots"][36]["slot"], 36);
    assert_eq!(json["content"]["slots"][36]["kind"], "previous_page");
}

#[test]
fn test_last_page_is_partial_and_has_no_next() {
    let world = numbered_world();
    let json = world
        .run_json(&["page", "--offset", "2"])
        .unwrap()
        .json()
        .unwrap();

    assert_page_position(&json, 3, 3).unwrap();
    assert_entry_labels(
        &json,
        &[
            "72: SOUND_072",
            "73: SOUND_073",
            "74: SOUND_074",
            "75: SOUND_075",
            "76: SOUND_076",
            "77: SOUND_077",
            "78: SOUND_078",
            "79: SOUND_079",
            "80: SOUND_080",
        ],
    )
    .unwrap();
    assert_controls(
        &json,
        &[
            "previous_page",
            "stop_sound",
            "decrease_pitch",
            "increase_pitch",
            "current_page",
        ],
    )
    .unwrap();
}

#[test]
fn test_filter_is_case_insensitive() {
    let world = numbered_world();
    let lower = world.run_json(&["page", "sound_00"]).unwrap().json().unwrap();
    let upper = world.run_json(&["page", "SOUND_00"]).unwrap().json().unwrap();

    assert_eq!(lower["content"]["filtered_count"], 10);
    assert_eq!(upper["content"]["filtered_count"], 10);
    assert_entry_labels(
        &upper,
        &[
            "0: SOUND_000",
            "1: SOUND_001",
            "2: SOUND_002",
            "3: SOUND_003",
            "4: SOUND_004",
            "5: SOUND_005",
            "6: SOUND_006",
            "7: SOUND_007",
            "8: SOUND_008",
            "9: SOUND_009",
        ],
    )
    .unwrap();
    assert_eq!(
        lower["content"]["slots"][0]["carrier"],
        upper["content"]["slots"][0]["carrier"]
    );
    assert_page_position(&lower, 1, 1).unwrap();
}

#[test]
fn test_pitch_bounds_hide_controls() {
    let world = numbered_world();

    let low = world
        .run_json(&["page", "--pitch", "0"])
        .unwrap()
        .json()
        .unwrap();
    assert_controls(
        &low,
        &["stop_sound", "increase_pitch", "current_page", "next_page"],
    )
    .unwrap();

    let high = world
        .run_json(&["page", "--pitch", "10"])
        .unwrap()
        .json()
        .unwrap();
    assert_controls(
        &high,
        &["stop_sound", "decrease_pitch", "current_page", "next_page"],
    )
    .unwrap();
}

#[test]
fn test_default_pitch_comes_from_config() {
    let world = numbered_world().with_default_pitch(4);
    let json = world.run_json(&["page"]).unwrap().json().unwrap();
    assert_eq!(json["content"]["pitch"], 4);
}

#[test]
fn test_entry_carrier_holds_play_state() {
    let world = numbered_world();
    let json = world.run_json(&["page"]).unwrap().json().unwrap();

    let carrier = &json["content"]["slots"][0]["carrier"];
    assert_eq!(carrier["soundbrowser:data.soundKey"], "SOUND_000");
    assert_eq!(carrier["soundbrowser:data.pitch"], "1");
    assert_eq!(carrier["soundbrowser:data.menu"], "true");
    assert_eq!(
        carrier["soundbrowser:keys"],
        r#"[["menu","boolean"],["pitch","integer"],["soundKey","string"]]"#
    );
}

#[test]
fn test_icons_follow_registry_and_overrides() {
    let world = TestWorld::new()
        .with_catalog(&mixed_keys())
        .with_icons(&mixed_icons());
    let json = world.run_json(&["page"]).unwrap().json().unwrap();

    let icons: Vec<&str> = json["content"]["slots"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|s| s["kind"] == "entry")
        .map(|s| s["icon"].as_str().unwrap())
        .collect();
    assert_eq!(
        icons,
        vec![
            "STICK",
            "WATER_BUCKET",
            "LAVA_BUCKET",
            "LAVA_BUCKET",
            "NOTE_BLOCK",
            "STRING",
            "CAT",
            "CROSSBOW",
            "STICK",
        ]
    );
}

#[test]
fn test_missing_icon_leaves_slot_empty() {
    let keys = vec!["BLOCK_FIRE_AMBIENT".to_string(), "UI_TOAST_IN".to_string()];
    let world = TestWorld::new()
        .with_catalog(&keys)
        .with_icons(&["FIRE".to_string()]);

    let result = world.run_json(&["page"]).unwrap();
    assert!(result.success());
    let json = result.json().unwrap();

    assert_eq!(json["content"]["skipped"], 1);
    assert_entry_labels(&json, &["1: UI_TOAST_IN"]).unwrap();
    assert_eq!(json["content"]["slots"][0]["slot"], 1);
    assert_eq!(json["badge"]["level"], "warning");
}

#[test]
fn test_no_matches_still_renders_controls() {
    let world = numbered_world();
    let result = world.run(&["page", "zzz"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("No sounds match \"zzz\""));
    assert!(result.stdout().contains("(no entries on this page)"));
    assert!(result.stdout().contains("Current Page"));
    assert!(result.stdout().contains("soundbrowser complete"));
}

#[test]
fn test_bundled_catalog_without_config() {
    let world = TestWorld::new();
    let result = world.run_json(&["page"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert!(json["content"]["filtered_count"].as_u64().unwrap() > 36);
    assert!(json["content"].get("skipped").is_none());
}

#[test]
fn test_offset_far_past_the_end_renders_empty_page() {
    let world = numbered_world();
    let result = world
        .run_json(&["page", "--offset", "9223372036854775807"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_entry_labels(&json, &[]).unwrap();
    assert_eq!(json["content"]["page_number"], 9_223_372_036_854_775_808u64);
}

#[test]
fn test_offset_beyond_carrier_range_is_rejected() {
    let world = numbered_world();
    let cases: [&[&str]; 2] = [
        &["page", "--offset", "9223372036854775808"],
        &["click", "0", "--offset", "18446744073709551615"],
    ];
    for args in cases {
        let result = world.run(args).unwrap();
        assert!(!result.success());
        assert!(result.stderr().contains("--offset"), "stderr: {}", result.stderr());
    }
}
