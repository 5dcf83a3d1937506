//! Dispatch resolver.
//!
//! Interprets exactly one decoded record per interaction and names the effect
//! it asks for. It keeps no state of its own.

use serde::Serialize;
use soundbrowser_core::StateCodec;
use soundbrowser_types::{
    BrowserAction, Carrier, DEFAULT_PITCH, FIELD_ACTION, NavigationState, Page, TypedRecord,
};
use tracing::debug;

/// Effect requested by a returned carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Dispatch {
    /// No record, or not marked as ours: let the host handle the event.
    Ignored,
    /// Ours, but asks for nothing we know (e.g. the page indicator).
    Unroutable,
    /// Play the indicated entry.
    Play { sound_key: String, pitch: i64 },
    /// Replace the current page with a freshly rendered one.
    Navigate { page: Page },
    /// Stop every effect currently playing for the actor.
    StopAll,
}

impl Dispatch {
    /// Whether the host should cancel its own handling of the event.
    pub fn is_consumed(&self) -> bool {
        !matches!(self, Dispatch::Ignored)
    }
}

/// Route a decoded record.
///
/// Only one effect fires per record. When a record carries more than one of
/// `soundKey`, `offset` and `action`, the first in that order wins.
pub fn resolve(record: Option<&TypedRecord>) -> Dispatch {
    let Some(record) = record else {
        return Dispatch::Ignored;
    };

    let mut state = NavigationState::from_record(record);
    if !state.menu {
        return Dispatch::Ignored;
    }

    // An empty key counts as unset.
    let sound_key = state.sound_key.take().filter(|key| !key.is_empty());

    let requested = [
        sound_key.is_some(),
        state.offset.is_some(),
        state.action.is_some(),
    ]
    .into_iter()
    .filter(|set| *set)
    .count();
    if requested > 1 {
        debug!(?sound_key, ?state, "record requests several effects; using the first");
    }

    if let Some(sound_key) = sound_key {
        return Dispatch::Play {
            sound_key,
            pitch: state.pitch.unwrap_or(DEFAULT_PITCH),
        };
    }

    if let Some(offset) = state.offset {
        return match usize::try_from(offset) {
            Ok(offset) => Dispatch::Navigate {
                page: Page::new(
                    offset,
                    state.filter_string.unwrap_or_default(),
                    state.pitch.unwrap_or(DEFAULT_PITCH),
                ),
            },
            Err(_) => {
                debug!(offset, "unroutable event: negative page offset");
                Dispatch::Unroutable
            }
        };
    }

    if let Some(BrowserAction::StopSound) = state.action {
        return Dispatch::StopAll;
    }

    match record.get_str(FIELD_ACTION) {
        Some(tag) => debug!(action = tag, "unroutable event: unknown action"),
        None => debug!("unroutable event: record requests nothing"),
    }
    Dispatch::Unroutable
}

/// Decode `carrier` and route it.
pub fn resolve_carrier<C: Carrier + ?Sized>(codec: &StateCodec, carrier: &C) -> Dispatch {
    resolve(codec.decode(carrier).as_ref())
}
