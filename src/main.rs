//! userview — fetch users from a REST resource and render them.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use userview::config::Config;
use userview::constants;
use userview::controller::{UserResource, ViewController};
use userview::env::Env;
use userview::logging;
use userview::resource;

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let detail_id = match cli.command {
        Command::Version => return run_version(),
        Command::List => None,
        Command::Demo(ref args) => Some(args.id),
    };

    let work_dir = std::env::current_dir().context("failed to resolve working directory")?;
    let mut config =
        Config::load(Some(&work_dir), &Env::real()).context("failed to load configuration")?;
    cli::apply_overrides(&mut config, &cli);

    logging::init(&config.log.level, config.log.format).context("failed to set up logging")?;
    tracing::debug!(?config, "configuration loaded");

    let http = resource::http_client()?;
    let users: UserResource = Arc::new(
        resource::user_resource(http, &config.api.base_url, &config.api.template)
            .context("failed to build user resource")?,
    );

    let mut controller = match detail_id {
        Some(id) => ViewController::list_and_detail(users, id),
        None => ViewController::list(users),
    };

    let state = controller.settled().await;
    print!("{}", cli.format.render(&state));
    Ok(())
}

/// Print version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}
