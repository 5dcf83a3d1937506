use serde::Serialize;
use tracing::info;

/// Host side of playback. Implemented by whatever actually makes noise.
pub trait SoundSink {
    fn play(&mut self, sound_key: &str, pitch: i64, volume: u32);
    fn stop_all(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SinkEvent {
    Played {
        sound_key: String,
        pitch: i64,
        volume: u32,
    },
    StoppedAll,
}

/// Sink that logs and remembers every request.
///
/// The CLI has no audio backend, so this is what `click` and `browse` play
/// into; the recorded events drive their output.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&SinkEvent> {
        self.events.last()
    }

    pub fn take(&mut self) -> Vec<SinkEvent> {
        std::mem::take(&mut self.events)
    }
}

impl SoundSink for RecordingSink {
    fn play(&mut self, sound_key: &str, pitch: i64, volume: u32) {
        info!(sound_key, pitch, volume, "play sound");
        self.events.push(SinkEvent::Played {
            sound_key: sound_key.to_string(),
            pitch,
            volume,
        });
    }

    fn stop_all(&mut self) {
        info!("stop all sounds");
        self.events.push(SinkEvent::StoppedAll);
    }
}
