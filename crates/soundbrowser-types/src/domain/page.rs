use serde::Serialize;

pub const MIN_PITCH: i64 = 0;
pub const MAX_PITCH: i64 = 10;
pub const DEFAULT_PITCH: i64 = 1;

/// The three values that fully determine a rendered page.
///
/// Pages have no identity and are rebuilt on every render and navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    offset: usize,
    filter: String,
    pitch: i64,
}

impl Page {
    /// Pitch is clamped into `[MIN_PITCH, MAX_PITCH]`.
    pub fn new(offset: usize, filter: impl Into<String>, pitch: i64) -> Self {
        Self {
            offset,
            filter: filter.into(),
            pitch: pitch.clamp(MIN_PITCH, MAX_PITCH),
        }
    }

    /// Page 0 with the given filter, as opened by the entry-point command.
    pub fn first(filter: impl Into<String>, pitch: i64) -> Self {
        Self::new(0, filter, pitch)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn pitch(&self) -> i64 {
        self.pitch
    }
}
