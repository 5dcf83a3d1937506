//! Catalog page engine.
//!
//! Pages are pure functions of `(offset, filter, pitch)` over a read-only
//! catalog. Every affordance on a page carries, on its own carrier, the full
//! state needed to act on it, so nothing about the page is kept after it is
//! rendered.

use serde::Serialize;
use soundbrowser_core::{IconHeuristic, StateCodec};
use soundbrowser_types::{
    BrowserAction, Carrier, Catalog, CatalogEntry, GridLayout, MAX_PITCH, MIN_PITCH,
    MemoryCarrier, NavigationState, Page,
};
use tracing::{debug, warn};

use crate::affordance::{Affordance, AffordanceKind};
use crate::{Error, Result};

/// A catalog entry together with its index in the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleEntry<'a> {
    pub index: usize,
    pub entry: &'a CatalogEntry,
}

/// Entries shown on page `offset`: the window
/// `[offset * page_capacity, offset * page_capacity + page_capacity)` of the
/// filtered catalog, clipped to its length.
pub fn compute_visible_slice<'a>(
    catalog: &'a Catalog,
    filter: &str,
    offset: usize,
    page_capacity: usize,
) -> Vec<VisibleEntry<'a>> {
    let start = offset.saturating_mul(page_capacity);
    catalog
        .filtered(filter)
        .enumerate()
        .skip(start)
        .take(page_capacity)
        .map(|(index, entry)| VisibleEntry { index, entry })
        .collect()
}

/// `round(filtered_count / page_capacity)`, halves rounded up.
///
/// Not `ceil`: 81 entries at 40 per page give a max page
/// of 2, while 20 entries give 1 even though page 1 is empty.
pub fn compute_max_page(filtered_count: usize, page_capacity: usize) -> usize {
    if page_capacity == 0 {
        return 0;
    }
    (filtered_count.saturating_mul(2).saturating_add(page_capacity)) / (page_capacity * 2)
}

/// Navigation row controls for a page.
///
/// Stop and Current Page are always present. The pitch range is enforced by
/// leaving out -Pitch at the lower bound and +Pitch at the upper bound.
pub fn build_navigation_affordances(
    offset: usize,
    max_page: usize,
    filter: &str,
    pitch: i64,
) -> Vec<Affordance> {
    let mut controls = Vec::with_capacity(6);
    let offset_value = i64::try_from(offset).unwrap_or(i64::MAX);

    if offset > 0 {
        controls.push(Affordance::control(
            AffordanceKind::PreviousPage,
            NavigationState::navigate(offset_value - 1, filter, pitch),
        ));
    }

    controls.push(Affordance::control(
        AffordanceKind::StopSound,
        NavigationState::action(BrowserAction::StopSound),
    ));

    if pitch > MIN_PITCH {
        controls.push(
            Affordance::control(
                AffordanceKind::DecreasePitch,
                NavigationState::navigate(offset_value, filter, pitch - 1),
            )
            .with_lore(pitch.to_string()),
        );
    }

    if pitch < MAX_PITCH {
        controls.push(
            Affordance::control(
                AffordanceKind::IncreasePitch,
                NavigationState::navigate(offset_value, filter, pitch + 1),
            )
            .with_lore(pitch.to_string()),
        );
    }

    controls.push(
        Affordance::control(AffordanceKind::CurrentPage, NavigationState::display_only())
            .with_lore(format!(
                "{}/{}",
                offset.saturating_add(1),
                max_page.saturating_add(1)
            )),
    );

    if offset < max_page {
        controls.push(Affordance::control(
            AffordanceKind::NextPage,
            NavigationState::navigate(offset_value.saturating_add(1), filter, pitch),
        ));
    }

    controls
}

/// Affordance that plays `entry` at `pitch`.
pub fn build_entry_affordance(
    entry: &CatalogEntry,
    index: usize,
    pitch: i64,
    icons: &IconHeuristic,
) -> Result<Affordance> {
    let icon = icons
        .resolve(entry.key())
        .map_err(|source| Error::AffordanceConstruction {
            key: entry.key().to_string(),
            source,
        })?;

    Ok(Affordance {
        kind: AffordanceKind::Entry,
        label: format!("{}: {}", index, entry.key()),
        icon,
        lore: Vec::new(),
        state: NavigationState::play(entry.key(), pitch),
    })
}

/// An occupied slot: the affordance and the carrier stamped with its state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSlot {
    pub slot: usize,
    #[serde(flatten)]
    pub affordance: Affordance,
    pub carrier: MemoryCarrier,
}

/// A fully rendered page grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub page: Page,
    pub max_page: usize,
    pub filtered_count: usize,
    pub rows: usize,
    pub columns: usize,
    /// Entry slots left empty because their affordance failed to build.
    pub skipped: usize,
    slots: Vec<Option<GridSlot>>,
}

impl PageView {
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, index: usize) -> Option<&GridSlot> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn carrier(&self, index: usize) -> Option<&MemoryCarrier> {
        self.slot(index).map(|s| &s.carrier)
    }

    /// Occupied slots in grid order.
    pub fn occupied(&self) -> impl Iterator<Item = &GridSlot> {
        self.slots.iter().flatten()
    }

    pub fn find(&self, kind: AffordanceKind) -> Option<&GridSlot> {
        self.occupied().find(|s| s.affordance.kind == kind)
    }

    pub fn entries(&self) -> impl Iterator<Item = &GridSlot> {
        self.occupied()
            .filter(|s| s.affordance.kind == AffordanceKind::Entry)
    }
}

/// Stamp `menu = true` plus the affordance state onto `carrier`.
pub fn place_affordance<C: Carrier + ?Sized>(
    affordance: &Affordance,
    codec: &StateCodec,
    carrier: &mut C,
) {
    let mut state = affordance.state.clone();
    state.menu = true;
    codec.encode(&state.to_record(), carrier);
}

/// Build the whole grid for `page`.
///
/// Entries whose affordance cannot be built leave an empty slot and a warning;
/// the rest of the page is still produced.
pub fn render_page(
    page: &Page,
    catalog: &Catalog,
    icons: &IconHeuristic,
    layout: GridLayout,
    codec: &StateCodec,
) -> PageView {
    let page_capacity = layout.page_capacity();
    let filtered_count = catalog.filtered(page.filter()).count();
    let max_page = compute_max_page(filtered_count, page_capacity);

    let mut slots: Vec<Option<GridSlot>> = vec![None; layout.capacity()];
    let mut skipped = 0;

    let visible = compute_visible_slice(catalog, page.filter(), page.offset(), page_capacity);
    for (slot, visible_entry) in visible.into_iter().enumerate() {
        match build_entry_affordance(visible_entry.entry, visible_entry.index, page.pitch(), icons)
        {
            Ok(affordance) => slots[slot] = Some(grid_slot(slot, affordance, codec)),
            Err(err) => {
                skipped += 1;
                warn!(slot, error = %err, "skipping catalog slot");
            }
        }
    }

    for control in
        build_navigation_affordances(page.offset(), max_page, page.filter(), page.pitch())
    {
        if let Some(column) = control.kind.action_column() {
            let slot = layout.action_row() + column;
            slots[slot] = Some(grid_slot(slot, control, codec));
        }
    }

    debug!(
        offset = page.offset(),
        filter = page.filter(),
        pitch = page.pitch(),
        filtered_count,
        max_page,
        skipped,
        "rendered page"
    );

    PageView {
        page: page.clone(),
        max_page,
        filtered_count,
        rows: layout.rows(),
        columns: layout.columns(),
        skipped,
        slots,
    }
}

fn grid_slot(slot: usize, affordance: Affordance, codec: &StateCodec) -> GridSlot {
    let mut carrier = MemoryCarrier::new();
    place_affordance(&affordance, codec, &mut carrier);
    GridSlot {
        slot,
        affordance,
        carrier,
    }
}
