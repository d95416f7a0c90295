//! Clap argument types.

use clap::{Parser, ValueEnum};

use userview::constants::DEMO_USER_ID;
use userview::controller::ViewState;
use userview::logging::LogFormat;

/// Fetch users from a REST resource and render them.
#[derive(Parser, Debug)]
#[command(name = "userview", version = userview::constants::VERSION)]
pub struct Cli {
    /// Server the resource template is resolved against.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Resource path template, e.g. `rest/user/:id`.
    #[arg(long, global = true)]
    pub template: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "terminal")]
    pub format: OutputFormat,

    /// Log filter directive (e.g. `debug`, `userview=trace`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log line format.
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// List all users.
    List,

    /// List all users and show one of them in full.
    Demo(DemoArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `demo` subcommand.
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Id of the user to fetch alongside the list.
    #[arg(long, default_value_t = DEMO_USER_ID)]
    pub id: i64,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render the view state using the renderer for this format.
    pub fn render(&self, state: &ViewState) -> String {
        use userview::output::ViewRenderer;
        match self {
            OutputFormat::Terminal => userview::output::terminal::TerminalRenderer.render(state),
            OutputFormat::Json => userview::output::json::JsonRenderer.render(state),
        }
    }
}
