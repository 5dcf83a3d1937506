//! Runtime values to view models.

use soundbrowser_engine::{Dispatch, PageView};
use soundbrowser_runtime::{ClickOutcome, Config, SinkEvent};

use super::view_models::{
    ClickViewModel, CommandResultViewModel, CompletionViewModel, ConfigInitViewModel,
    ConfigViewModel, Guidance, PageViewModel, SlotViewModel, StatusBadge, StatusBarViewModel,
    StatusLevel,
};

pub fn present_page_view(view: &PageView) -> PageViewModel {
    let columns = view.columns;
    let slots = view
        .occupied()
        .map(|slot| SlotViewModel {
            slot: slot.slot,
            row: slot.slot / columns,
            column: slot.slot % columns,
            kind: slot.affordance.kind,
            label: slot.affordance.label.clone(),
            icon: slot.affordance.icon.to_string(),
            lore: slot.affordance.lore.clone(),
            carrier: slot.carrier.clone(),
        })
        .collect();

    PageViewModel {
        offset: view.page.offset(),
        filter: view.page.filter().to_string(),
        pitch: view.page.pitch(),
        page_number: view.page.offset().saturating_add(1),
        page_count: view.max_page.saturating_add(1),
        filtered_count: view.filtered_count,
        rows: view.rows,
        columns,
        skipped: view.skipped,
        slots,
    }
}

pub fn present_page(view: &PageView) -> CommandResultViewModel<PageViewModel> {
    let content = present_page_view(view);
    let mut result = CommandResultViewModel::new(content);

    if view.filtered_count == 0 {
        result = result
            .with_badge(StatusBadge::warning(format!(
                "No sounds match \"{}\"",
                view.page.filter()
            )))
            .with_suggestion(
                Guidance::new("Find keys by prefix").with_command("soundbrowser complete <PARTIAL>"),
            );
    } else if view.skipped > 0 {
        result = result.with_badge(StatusBadge::warning(format!(
            "{} slot(s) left empty: icon missing from the registry",
            view.skipped
        )));
    }

    result
}

pub fn present_click(
    outcome: ClickOutcome,
    events: Vec<SinkEvent>,
    view: Option<&PageView>,
) -> CommandResultViewModel<ClickViewModel> {
    let badge = match &outcome.dispatch {
        Dispatch::Play { sound_key, pitch } => {
            StatusBadge::success(format!("Playing {} at pitch {}", sound_key, pitch))
        }
        Dispatch::Navigate { page } => StatusBadge::success(format!(
            "Moved to page {} (pitch {})",
            page.offset().saturating_add(1),
            page.pitch()
        )),
        Dispatch::StopAll => StatusBadge::success("Stopped all sounds"),
        Dispatch::Unroutable => StatusBadge::info("Nothing to do for this slot"),
        Dispatch::Ignored => StatusBadge::warning(format!("Slot {} is empty", outcome.slot)),
    };

    let content = ClickViewModel {
        outcome,
        events,
        next_page: view.map(present_page_view),
    };

    CommandResultViewModel::new(content).with_badge(badge)
}

pub fn present_completion(
    partial: &str,
    suggestions: Vec<&str>,
) -> CommandResultViewModel<CompletionViewModel> {
    CommandResultViewModel::new(CompletionViewModel {
        partial: partial.to_string(),
        suggestions: suggestions.into_iter().map(str::to_string).collect(),
    })
}

pub fn present_config(
    path: String,
    exists: bool,
    config: Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let mut result = CommandResultViewModel::new(ConfigViewModel {
        path,
        exists,
        config,
    });
    if !exists {
        result = result.with_suggestion(
            Guidance::new("Write these defaults to disk").with_command("soundbrowser config init"),
        );
    }
    result
}

pub fn present_config_init(path: String, created: bool) -> CommandResultViewModel<ConfigInitViewModel> {
    let badge = if created {
        StatusBadge::success(format!("Wrote {}", path))
    } else {
        StatusBadge::info(format!("{} already exists", path))
    };
    let mut result = CommandResultViewModel::new(ConfigInitViewModel { path, created }).with_badge(badge);
    if !created {
        result = result.with_suggestion(
            Guidance::new("Overwrite it with the defaults").with_command("soundbrowser config init --force"),
        );
    }
    result
}

pub fn present_status_bar(
    view: &PageView,
    now_playing: Option<String>,
    status_message: String,
    status_level: StatusLevel,
) -> StatusBarViewModel {
    StatusBarViewModel {
        page_label: format!(
            "{}/{}",
            view.page.offset().saturating_add(1),
            view.max_page.saturating_add(1)
        ),
        pitch: view.page.pitch(),
        now_playing,
        status_message,
        status_level,
    }
}
