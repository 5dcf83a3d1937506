use soundbrowser_types::*;

#[test]
fn test_truncate() {
    let short = "short";
    assert_eq!(truncate(short, 10), "short");

    let long = "ENTITY_EXPERIENCE_ORB_PICKUP";
    let truncated = truncate(long, 10);
    assert_eq!(truncated.chars().count(), 10);
    assert!(truncated.ends_with('…'));
}

#[test]
fn test_contains_ignore_case() {
    assert!(contains_ignore_case("BLOCK_ANVIL_LAND", "anvil"));
    assert!(contains_ignore_case("BLOCK_ANVIL_LAND", ""));
    assert!(!contains_ignore_case("AMBIENT_CAVE", "block"));
}

#[test]
fn test_starts_with_ignore_case() {
    assert!(starts_with_ignore_case("BLOCK_ANVIL_LAND", "block_a"));
    assert!(!starts_with_ignore_case("BLOCK_ANVIL_LAND", "anvil"));
}

#[test]
fn test_memory_carrier_get_set_remove() {
    let mut carrier = MemoryCarrier::new();
    assert!(carrier.get("soundbrowser:keys").is_none());

    carrier.set("soundbrowser:keys", "[]".to_string());
    assert_eq!(carrier.get("soundbrowser:keys").as_deref(), Some("[]"));

    carrier.remove("soundbrowser:keys");
    assert!(carrier.is_empty());
}
