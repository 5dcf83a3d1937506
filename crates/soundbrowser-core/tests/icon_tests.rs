use soundbrowser_core::{DEFAULT_ICON, Error, IconHeuristic, IconId};

fn registry() -> IconHeuristic {
    IconHeuristic::new([
        "ANVIL",
        "BELL",
        "BOW",
        "BUBBLE_COLUMN",
        "CROSSBOW",
        "END_GATEWAY",
        "END_PORTAL",
        "END_PORTAL_FRAME",
        "FIRE",
        "LAVA",
        "LAVA_BUCKET",
        "STRING",
        "SWEET_BERRIES",
        "SWEET_BERRY_BUSH",
        "TRIPWIRE",
        "WATER",
        "WATER_BUCKET",
    ])
}

#[test]
fn test_first_registry_match_wins() {
    let icons = registry();
    assert_eq!(icons.estimate("BLOCK_ANVIL_LAND"), IconId::from("ANVIL"));
    assert_eq!(icons.estimate("BLOCK_BELL_USE"), IconId::from("BELL"));
}

#[test]
fn test_crossbow_beats_bow() {
    let icons = registry();
    assert_eq!(icons.estimate("ITEM_CROSSBOW_SHOOT"), IconId::from("CROSSBOW"));
    assert_eq!(icons.estimate("ENTITY_ARROW_SHOOT_BOW"), IconId::from("BOW"));
}

#[test]
fn test_override_table() {
    let icons = registry();
    let cases = [
        ("BLOCK_BUBBLE_COLUMN_UPWARDS_AMBIENT", "WATER_BUCKET"),
        ("AMBIENT_UNDERWATER_ENTER", "WATER_BUCKET"),
        ("BLOCK_FIRE_AMBIENT", "LAVA_BUCKET"),
        ("BLOCK_LAVA_POP", "LAVA_BUCKET"),
        ("BLOCK_END_PORTAL_SPAWN", "END_PORTAL_FRAME"),
        ("BLOCK_END_GATEWAY_SPAWN", "END_PORTAL_FRAME"),
        ("BLOCK_TRIPWIRE_CLICK_ON", "STRING"),
        ("BLOCK_SWEET_BERRY_BUSH_BREAK", "SWEET_BERRIES"),
    ];

    for (key, expected) in cases {
        assert_eq!(icons.estimate(key), IconId::from(expected), "key {}", key);
    }
}

#[test]
fn test_no_match_falls_back_to_default() {
    let icons = registry();
    assert_eq!(icons.estimate("MUSIC_DISC_CAT"), IconId::from(DEFAULT_ICON));
    assert!(icons.resolve("MUSIC_DISC_CAT").is_ok());
}

#[test]
fn test_resolve_fails_when_override_target_unregistered() {
    let icons = IconHeuristic::new(["WATER"]);

    let err = icons.resolve("AMBIENT_UNDERWATER_LOOP").unwrap_err();
    assert_eq!(
        err,
        Error::UnknownIcon {
            key: "AMBIENT_UNDERWATER_LOOP".to_string(),
            icon: IconId::from("WATER_BUCKET"),
        }
    );
    assert!(err.to_string().contains("WATER_BUCKET"));
}
