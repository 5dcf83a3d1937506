use serde::Serialize;
use soundbrowser_engine::AffordanceKind;
use soundbrowser_types::MemoryCarrier;

#[derive(Debug, Clone, Serialize)]
pub struct PageViewModel {
    pub offset: usize,
    pub filter: String,
    pub pitch: i64,
    /// One-based, as shown on the Current Page control.
    pub page_number: usize,
    pub page_count: usize,
    pub filtered_count: usize,
    pub rows: usize,
    pub columns: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub skipped: usize,
    pub slots: Vec<SlotViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotViewModel {
    pub slot: usize,
    pub row: usize,
    pub column: usize,
    pub kind: AffordanceKind,
    pub label: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,
    pub carrier: MemoryCarrier,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl PageViewModel {
    pub fn entries(&self) -> impl Iterator<Item = &SlotViewModel> {
        self.slots.iter().filter(|s| s.kind == AffordanceKind::Entry)
    }

    pub fn controls(&self) -> impl Iterator<Item = &SlotViewModel> {
        self.slots.iter().filter(|s| s.kind != AffordanceKind::Entry)
    }

    pub fn slot(&self, index: usize) -> Option<&SlotViewModel> {
        self.slots.iter().find(|s| s.slot == index)
    }
}
