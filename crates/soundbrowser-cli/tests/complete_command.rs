use soundbrowser_testing::fixtures::numbered_keys;
use soundbrowser_testing::TestWorld;

#[test]
fn test_complete_prints_one_key_per_line() {
    let world = TestWorld::new().with_catalog(&numbered_keys(81));
    let result = world.run(&["complete", "sound_07"]).unwrap();
    assert!(result.success());

    let lines: Vec<&str> = result.stdout().lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "SOUND_070");
    assert_eq!(lines[9], "SOUND_079");
}

#[test]
fn test_complete_is_prefix_based() {
    let world = TestWorld::new().with_catalog(&numbered_keys(81));
    let result = world.run(&["complete", "080"]).unwrap();
    assert!(result.success());
    assert_eq!(result.stdout(), "");
}

#[test]
fn test_complete_json() {
    let world = TestWorld::new().with_catalog(&numbered_keys(81));
    let json = world
        .run_json(&["complete", "SOUND_08"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["content"]["partial"], "SOUND_08");
    assert_eq!(json["content"]["suggestions"], serde_json::json!(["SOUND_080"]));
}
