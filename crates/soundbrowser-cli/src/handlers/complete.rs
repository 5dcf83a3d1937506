use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_completion;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext, partial: String) -> Result<()> {
    let suggestions = ctx.browser()?.suggest(&partial);
    ConsoleRenderer::new(ctx.format).render(present_completion(&partial, suggestions))
}
