use anyhow::Result;
use soundbrowser_types::Page;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_page;
use crate::presentation::{ConsoleRenderer, Renderer};

/// Flags name a page; `None` pitch means the configured default.
pub fn resolve_page(
    ctx: &ExecutionContext,
    filter: String,
    offset: usize,
    pitch: Option<i64>,
) -> Result<Page> {
    let pitch = match pitch {
        Some(pitch) => pitch,
        None => ctx.config()?.playback.default_pitch,
    };
    Ok(Page::new(offset, filter, pitch))
}

pub fn handle(
    ctx: &ExecutionContext,
    filter: String,
    offset: usize,
    pitch: Option<i64>,
) -> Result<()> {
    let page = resolve_page(ctx, filter, offset, pitch)?;
    let view = ctx.browser()?.render(&page);

    ConsoleRenderer::new(ctx.format).render(present_page(&view))
}
