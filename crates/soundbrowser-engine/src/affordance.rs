use serde::Serialize;
use soundbrowser_core::IconId;
use soundbrowser_types::NavigationState;

/// What a grid slot is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordanceKind {
    Entry,
    PreviousPage,
    StopSound,
    DecreasePitch,
    IncreasePitch,
    CurrentPage,
    NextPage,
}

impl AffordanceKind {
    /// Column inside the navigation row, `None` for catalog entries.
    pub fn action_column(&self) -> Option<usize> {
        match self {
            AffordanceKind::Entry => None,
            AffordanceKind::PreviousPage => Some(0),
            AffordanceKind::StopSound => Some(1),
            AffordanceKind::DecreasePitch => Some(3),
            AffordanceKind::IncreasePitch => Some(4),
            AffordanceKind::CurrentPage => Some(7),
            AffordanceKind::NextPage => Some(8),
        }
    }

    /// Fixed icon for navigation controls.
    pub fn control_icon(&self) -> Option<&'static str> {
        match self {
            AffordanceKind::Entry => None,
            AffordanceKind::PreviousPage => Some("OAK_BUTTON"),
            AffordanceKind::StopSound => Some("BARRIER"),
            AffordanceKind::DecreasePitch => Some("RED_WOOL"),
            AffordanceKind::IncreasePitch => Some("GREEN_WOOL"),
            AffordanceKind::CurrentPage => Some("RED_STAINED_GLASS"),
            AffordanceKind::NextPage => Some("ARROW"),
        }
    }

    pub fn control_label(&self) -> Option<&'static str> {
        match self {
            AffordanceKind::Entry => None,
            AffordanceKind::PreviousPage => Some("Previous Page"),
            AffordanceKind::StopSound => Some("Stop Sound"),
            AffordanceKind::DecreasePitch => Some("-Pitch"),
            AffordanceKind::IncreasePitch => Some("+Pitch"),
            AffordanceKind::CurrentPage => Some("Current Page"),
            AffordanceKind::NextPage => Some("Next Page"),
        }
    }
}

/// A selectable unit on a page: label, icon and the state its carrier gets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Affordance {
    pub kind: AffordanceKind,
    pub label: String,
    pub icon: IconId,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,
    pub state: NavigationState,
}

impl Affordance {
    /// Navigation control with its fixed label and icon.
    pub fn control(kind: AffordanceKind, state: NavigationState) -> Self {
        Self {
            kind,
            label: kind.control_label().unwrap_or_default().to_string(),
            icon: IconId::new(kind.control_icon().unwrap_or_default()),
            lore: Vec::new(),
            state,
        }
    }

    pub fn with_lore(mut self, line: impl Into<String>) -> Self {
        self.lore.push(line.into());
        self
    }
}
