use std::path::Path;

use colored::Colorize;
use roster_server::{RosterServer, ServerConfig};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Config(args) => cmd_config(args),
    }
}

/// Defaults, then the config file, then command-line overrides.
fn resolve_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    let config = match path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    Ok(config)
}

fn apply_overrides(mut config: ServerConfig, args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(id_space) = args.id_space {
        config.id_space = id_space;
    }
    config.validate()?;
    Ok(config)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let config = apply_overrides(config, &args)?;
    println!(
        "{} Roster server on {} (id space 1..={})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.id_space
    );
    RosterServer::new(config)?.serve().await?;
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}
