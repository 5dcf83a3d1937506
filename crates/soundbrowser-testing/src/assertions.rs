//! Assertions over `--format json` output.
//!
//! All of them expect the `{"content": ...}` envelope the CLI prints. Page
//! checks also accept `click` output, reading its `next_page`.

use anyhow::{Context, Result};
use serde_json::Value;

fn slots(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["slots"]
        .as_array()
        .or_else(|| json["content"]["next_page"]["slots"].as_array())
        .context("Expected 'content.slots' array in JSON")
}

/// Assert that the page is `number` of `count` (both one-based).
pub fn assert_page_position(json: &Value, number: u64, count: u64) -> Result<()> {
    let page = if json["content"]["next_page"].is_object() {
        &json["content"]["next_page"]
    } else {
        &json["content"]
    };
    let actual = (
        page["page_number"].as_u64().context("missing page_number")?,
        page["page_count"].as_u64().context("missing page_count")?,
    );
    if actual != (number, count) {
        anyhow::bail!(
            "Expected page {}/{}, got {}/{}",
            number,
            count,
            actual.0,
            actual.1
        );
    }
    Ok(())
}

/// Assert the labels of the entry slots, in grid order.
pub fn assert_entry_labels(json: &Value, expected: &[&str]) -> Result<()> {
    let labels: Vec<&str> = slots(json)?
        .iter()
        .filter(|s| s["kind"] == "entry")
        .filter_map(|s| s["label"].as_str())
        .collect();
    if labels != expected {
        anyhow::bail!("Expected entries {:?}, got {:?}", expected, labels);
    }
    Ok(())
}

/// Assert which control kinds are on the page, in grid order.
pub fn assert_controls(json: &Value, expected: &[&str]) -> Result<()> {
    let kinds: Vec<&str> = slots(json)?
        .iter()
        .filter(|s| s["kind"] != "entry")
        .filter_map(|s| s["kind"].as_str())
        .collect();
    if kinds != expected {
        anyhow::bail!("Expected controls {:?}, got {:?}", expected, kinds);
    }
    Ok(())
}

/// Find the slot index holding a given kind.
pub fn slot_of_kind(json: &Value, kind: &str) -> Result<u64> {
    slots(json)?
        .iter()
        .find(|s| s["kind"] == kind)
        .and_then(|s| s["slot"].as_u64())
        .with_context(|| format!("No '{}' slot on the page", kind))
}

/// Assert the effect reported by `click`.
pub fn assert_effect(json: &Value, effect: &str) -> Result<()> {
    let actual = json["content"]["effect"]
        .as_str()
        .context("Expected 'content.effect' in JSON")?;
    if actual != effect {
        anyhow::bail!("Expected effect '{}', got '{}'", effect, actual);
    }
    Ok(())
}
