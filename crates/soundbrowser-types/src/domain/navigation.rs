use serde::Serialize;
use std::fmt;

use crate::record::TypedRecord;

pub const FIELD_MENU: &str = "menu";
pub const FIELD_SOUND_KEY: &str = "soundKey";
pub const FIELD_OFFSET: &str = "offset";
pub const FIELD_ACTION: &str = "action";
pub const FIELD_FILTER_STRING: &str = "filterString";
pub const FIELD_PITCH: &str = "pitch";

/// Closed set of non-navigation actions an affordance can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BrowserAction {
    StopSound,
}

impl BrowserAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserAction::StopSound => "StopSound",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "StopSound" => Some(BrowserAction::StopSound),
            _ => None,
        }
    }
}

impl fmt::Display for BrowserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed view over the record stamped on every affordance carrier.
///
/// `menu = true` marks the carrier as one of ours. At most one of
/// `sound_key`, `offset` and `action` is meaningful per affordance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub menu: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<BrowserAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<i64>,
}

impl NavigationState {
    /// Plays `sound_key` at `pitch` when selected.
    pub fn play(sound_key: impl Into<String>, pitch: i64) -> Self {
        Self {
            menu: true,
            sound_key: Some(sound_key.into()),
            pitch: Some(pitch),
            ..Self::default()
        }
    }

    /// Re-renders the page at `offset` when selected.
    pub fn navigate(offset: i64, filter: impl Into<String>, pitch: i64) -> Self {
        Self {
            menu: true,
            offset: Some(offset),
            filter_string: Some(filter.into()),
            pitch: Some(pitch),
            ..Self::default()
        }
    }

    pub fn action(action: BrowserAction) -> Self {
        Self {
            menu: true,
            action: Some(action),
            ..Self::default()
        }
    }

    /// Ours, but nothing happens when selected.
    pub fn display_only() -> Self {
        Self {
            menu: true,
            ..Self::default()
        }
    }

    pub fn to_record(&self) -> TypedRecord {
        let mut record = TypedRecord::new().with(FIELD_MENU, self.menu);
        if let Some(key) = &self.sound_key {
            record.insert(FIELD_SOUND_KEY, key.as_str());
        }
        if let Some(offset) = self.offset {
            record.insert(FIELD_OFFSET, offset);
        }
        if let Some(action) = self.action {
            record.insert(FIELD_ACTION, action.as_str());
        }
        if let Some(filter) = &self.filter_string {
            record.insert(FIELD_FILTER_STRING, filter.as_str());
        }
        if let Some(pitch) = self.pitch {
            record.insert(FIELD_PITCH, pitch);
        }
        record
    }

    /// Fields with the wrong type are treated as absent, as are unknown
    /// action tags.
    pub fn from_record(record: &TypedRecord) -> Self {
        Self {
            menu: record.get_bool(FIELD_MENU).unwrap_or(false),
            sound_key: record.get_str(FIELD_SOUND_KEY).map(str::to_string),
            offset: record.get_i64(FIELD_OFFSET),
            action: record.get_str(FIELD_ACTION).and_then(BrowserAction::parse),
            filter_string: record.get_str(FIELD_FILTER_STRING).map(str::to_string),
            pitch: record.get_i64(FIELD_PITCH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_record_fields() {
        let record = NavigationState::navigate(2, "x", 3).to_record();
        let names: Vec<_> = record.key_listing().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["filterString", "menu", "offset", "pitch"]);
    }

    #[test]
    fn test_record_round_trip() {
        for state in [
            NavigationState::play("BLOCK_ANVIL_LAND", 4),
            NavigationState::navigate(0, "", 1),
            NavigationState::action(BrowserAction::StopSound),
            NavigationState::display_only(),
        ] {
            assert_eq!(NavigationState::from_record(&state.to_record()), state);
        }
    }

    #[test]
    fn test_unknown_action_is_dropped() {
        let record = TypedRecord::new()
            .with(FIELD_MENU, true)
            .with(FIELD_ACTION, "Explode");
        let state = NavigationState::from_record(&record);
        assert!(state.menu);
        assert_eq!(state.action, None);
    }

    #[test]
    fn test_missing_menu_defaults_false() {
        let record = TypedRecord::new().with(FIELD_SOUND_KEY, "AMBIENT_CAVE");
        assert!(!NavigationState::from_record(&record).menu);
    }
}
