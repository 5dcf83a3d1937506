use anyhow::Result;
use soundbrowser_engine::Dispatch;
use soundbrowser_runtime::RecordingSink;

use super::page::resolve_page;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_click;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(
    ctx: &ExecutionContext,
    slot: usize,
    filter: String,
    offset: usize,
    pitch: Option<i64>,
) -> Result<()> {
    let page = resolve_page(ctx, filter, offset, pitch)?;
    let browser = ctx.browser()?;

    let mut session = browser.open_at(&page);
    let mut sink = RecordingSink::new();
    let outcome = browser.handle_click(&mut session, slot, &mut sink);

    let next_view = matches!(outcome.dispatch, Dispatch::Navigate { .. }).then(|| session.view());

    ConsoleRenderer::new(ctx.format).render(present_click(outcome, sink.take(), next_view))
}
