use anyhow::Result;
use is_terminal::IsTerminal;
use soundbrowser_engine::Dispatch;
use soundbrowser_runtime::{ClickOutcome, RecordingSink, SinkEvent, ViewerSession};

use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_page, present_page_view, present_status_bar};
use crate::presentation::view_models::{BrowseScreenViewModel, StatusLevel};
use crate::presentation::{ConsoleRenderer, Renderer, TuiRenderer};

pub fn handle(ctx: ExecutionContext, filter: String) -> Result<()> {
    // Without a terminal there is nothing to interact with; show page 1.
    if !std::io::stdout().is_terminal() {
        let browser = ctx.browser()?;
        let session = browser.open(&filter);
        return ConsoleRenderer::new(ctx.format).render(present_page(session.view()));
    }

    let mut browser = ctx.into_browser()?;
    let mut session = browser.open(&filter);
    let mut sink = RecordingSink::new();

    let initial = screen(&session, "Ready".to_string(), StatusLevel::Info);
    let result = TuiRenderer::new(initial).run(|slot| {
        let outcome = browser.handle_click(&mut session, slot, &mut sink);
        let (message, level) = describe(&outcome, sink.last());
        screen(&session, message, level)
    });

    browser.shutdown();
    result
}

fn screen(session: &ViewerSession, message: String, level: StatusLevel) -> BrowseScreenViewModel {
    BrowseScreenViewModel {
        page: present_page_view(session.view()),
        status_bar: present_status_bar(
            session.view(),
            session.playing().last().cloned(),
            message,
            level,
        ),
    }
}

fn describe(outcome: &ClickOutcome, last: Option<&SinkEvent>) -> (String, StatusLevel) {
    match (&outcome.dispatch, last) {
        (Dispatch::Play { .. }, Some(SinkEvent::Played { sound_key, pitch, volume })) => (
            format!("Played {} (pitch {}, volume {})", sound_key, pitch, volume),
            StatusLevel::Success,
        ),
        (Dispatch::Navigate { page }, _) => (
            format!("Page {}", page.offset().saturating_add(1)),
            StatusLevel::Info,
        ),
        (Dispatch::StopAll, _) => ("Stopped all sounds".to_string(), StatusLevel::Success),
        (Dispatch::Unroutable, _) => ("Nothing to do here".to_string(), StatusLevel::Info),
        _ => (format!("Slot {} is empty", outcome.slot), StatusLevel::Warning),
    }
}
