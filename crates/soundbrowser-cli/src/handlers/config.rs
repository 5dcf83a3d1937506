use anyhow::Result;
use soundbrowser_runtime::Config;

use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_config, present_config_init};
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle_show(ctx: &ExecutionContext) -> Result<()> {
    let path = ctx.config_path();
    let exists = path.exists();
    let config = ctx.config()?.clone();

    ConsoleRenderer::new(ctx.format).render(present_config(
        path.display().to_string(),
        exists,
        config,
    ))
}

pub fn handle_init(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    let created = force || !path.exists();
    if created {
        Config::default().save_to(&path)?;
        tracing::info!(path = %path.display(), "wrote default config");
    }

    ConsoleRenderer::new(ctx.format).render(present_config_init(path.display().to_string(), created))
}
