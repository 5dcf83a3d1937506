use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::Result;
use soundbrowser_runtime::resolve_workspace_path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    if matches!(command, Commands::Browse { .. }) {
        let log_path = logging::init_file(cli.log_level, &data_dir)?;
        tracing::debug!(path = %log_path.display(), "logging to file");
    } else {
        logging::init_stderr(cli.log_level);
    }

    let ctx = ExecutionContext::new(data_dir, cli.format);

    match command {
        Commands::Browse { filter } => handlers::browse::handle(ctx, filter),

        Commands::Page {
            filter,
            offset,
            pitch,
        } => handlers::page::handle(&ctx, filter, offset, pitch),

        Commands::Click {
            slot,
            filter,
            offset,
            pitch,
        } => handlers::click::handle(&ctx, slot, filter, offset, pitch),

        Commands::Complete { partial } => handlers::complete::handle(&ctx, partial),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::handle_show(&ctx),
            ConfigCommand::Init { force } => handlers::config::handle_init(&ctx, force),
        },
    }
}

fn show_guidance() {
    println!("soundbrowser: browse a sound catalog one grid page at a time\n");
    println!("Common commands:");
    println!("  soundbrowser browse [FILTER]        Open the interactive grid");
    println!("  soundbrowser page [FILTER]          Print a page");
    println!("  soundbrowser click <SLOT>           Click a slot and print the result");
    println!("  soundbrowser complete <PARTIAL>     Complete a sound key");
    println!("  soundbrowser config init            Write a default config.toml");
    println!("\nRun 'soundbrowser --help' for all options.");
}
