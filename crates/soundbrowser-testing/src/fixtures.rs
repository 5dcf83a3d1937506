//! Sample catalogs written into a test data directory.

use anyhow::Result;
use std::fs;
use std::path::Path;

/// `count` keys named `SOUND_000`, `SOUND_001`, ... in order.
pub fn numbered_keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("SOUND_{:03}", i)).collect()
}

/// A small, mixed catalog whose keys exercise the icon overrides.
pub fn mixed_keys() -> Vec<String> {
    [
        "AMBIENT_UNDERWATER_ENTER",
        "BLOCK_BUBBLE_COLUMN_UPWARDS_AMBIENT",
        "BLOCK_FIRE_AMBIENT",
        "BLOCK_LAVA_POP",
        "BLOCK_NOTE_BLOCK_BELL",
        "BLOCK_TRIPWIRE_CLICK_ON",
        "ENTITY_CAT_PURR",
        "ITEM_CROSSBOW_SHOOT",
        "UI_TOAST_IN",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Registry that covers `mixed_keys` and every override target.
pub fn mixed_icons() -> Vec<String> {
    [
        "BUBBLE_COLUMN",
        "WATER_BUCKET",
        "FIRE",
        "LAVA",
        "LAVA_BUCKET",
        "NOTE_BLOCK",
        "BELL",
        "TRIPWIRE",
        "STRING",
        "CAT",
        "BOW",
        "CROSSBOW",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Write a key list file in the format the CLI reads.
pub fn write_key_list(path: &Path, keys: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut content = String::from("# generated by soundbrowser-testing\n");
    for key in keys {
        content.push_str(key);
        content.push('\n');
    }
    fs::write(path, content)?;
    Ok(())
}
