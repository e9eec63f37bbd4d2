//! `devicehub`: fleet dashboard in the terminal.
//!
//! Loads the fixture store (built-in sample or a data directory) and
//! renders the dashboard views as tables or JSON.

mod commands;
mod config;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::debug;

use devicehub_core::ServiceConfig;
use devicehub_inventory::{Inventory, InventoryService};

use crate::commands::Context;
use crate::config::ClientConfig;
use crate::render::OutputFormat;

/// DeviceHub CLI.
#[derive(Parser, Debug)]
#[command(name = "devicehub", about = "Device fleet dashboard")]
struct Cli {
    /// Path to client config file (default: ~/.devicehub/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Fixture directory (default: built-in sample fleet).
    #[arg(long = "data-dir", global = true)]
    data_dir: Option<String>,

    /// Output format.
    #[arg(long = "output", short = 'o', global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Metric cards, distributions and recent activity.
    Dashboard {
        /// Number of activity events to show.
        #[arg(long, default_value_t = 5)]
        activity: usize,
    },

    /// Fleet metric cards.
    Stats,

    /// Device count per operating system.
    Os,

    /// Device count per compliance state.
    Compliance,

    /// List devices.
    Devices {
        /// Match name, user or location (case-insensitive).
        #[arg(short = 'q', long = "query", default_value = "")]
        query: String,
        /// Status filter, or "all".
        #[arg(long, default_value = "all")]
        status: String,
        /// OS filter, or "all".
        #[arg(long, default_value = "all")]
        os: String,
        /// Limit results.
        #[arg(long)]
        limit: Option<usize>,
        /// Offset for pagination.
        #[arg(long)]
        offset: Option<usize>,
    },

    /// Show one device with its compliance issues and activity.
    Device {
        /// Device ID.
        id: String,
    },

    /// List support tickets.
    Tickets {
        /// Status filter, or "all".
        #[arg(long, default_value = "all")]
        status: String,
        /// Priority filter, or "all".
        #[arg(long, default_value = "all")]
        priority: String,
        /// Only unresolved tickets.
        #[arg(long)]
        open: bool,
    },

    /// Show one ticket.
    Ticket {
        /// Ticket ID.
        id: String,
    },

    /// Recent activity feed.
    Activity {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Security posture, policies and non-compliant devices.
    Security,

    /// List automation scripts.
    Scripts {
        /// Platform filter, or "all". Windows/macOS include "Both".
        #[arg(long, default_value = "all")]
        platform: String,
    },

    /// Show one script.
    Script {
        /// Script ID.
        id: String,
        /// Print the script body.
        #[arg(long)]
        code: bool,
    },

    /// Script execution history.
    Executions,

    /// Client configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective configuration.
    Show,
    /// Write a starter config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(PathBuf::from)
        .unwrap_or_else(ClientConfig::default_path);
    let client_config = ClientConfig::load(&config_path)?;

    init_tracing(client_config.log_filter());
    debug!(path = %config_path.display(), "client config loaded");

    let output = cli.output.or(client_config.output).unwrap_or_default();
    let data_dir = cli.data_dir.or_else(|| client_config.data_dir.clone());

    let result = match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&client_config, &config_path, output),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
        },
        Commands::Version => {
            println!("devicehub v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        command => load_context(data_dir, client_config.page_size, output)
            .and_then(|ctx| run(&ctx, command)),
    };

    if let Err(err) = result {
        if output == OutputFormat::Json {
            if let Some(body) = render::error_json(&err) {
                render::print_json(&body)?;
                std::process::exit(1);
            }
        }
        return Err(err);
    }
    Ok(())
}

fn load_context(
    data_dir: Option<String>,
    page_size: Option<usize>,
    output: OutputFormat,
) -> anyhow::Result<Context> {
    let service_config = ServiceConfig {
        data_dir: data_dir.map(PathBuf::from),
        page_size,
    };
    let inventory = Inventory::load(&service_config)?;
    Ok(Context {
        service: InventoryService::new(Arc::new(inventory)),
        output,
        page_size: service_config.page_size,
    })
}

/// Dispatch a command that reads the fixture store.
fn run(ctx: &Context, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard { activity } => commands::dashboard::dashboard(ctx, activity),
        Commands::Stats => commands::dashboard::stats(ctx),
        Commands::Os => commands::dashboard::os(ctx),
        Commands::Compliance => commands::dashboard::compliance(ctx),
        Commands::Devices {
            query,
            status,
            os,
            limit,
            offset,
        } => commands::devices::list(ctx, &query, &status, &os, limit, offset),
        Commands::Device { id } => commands::devices::show(ctx, &id),
        Commands::Tickets {
            status,
            priority,
            open,
        } => commands::tickets::list(ctx, &status, &priority, open),
        Commands::Ticket { id } => commands::tickets::show(ctx, &id),
        Commands::Activity { limit } => commands::dashboard::activity(ctx, limit),
        Commands::Security => commands::security::overview(ctx),
        Commands::Scripts { platform } => commands::scripts::list(ctx, &platform),
        Commands::Script { id, code } => commands::scripts::show(ctx, &id, code),
        Commands::Executions => commands::scripts::executions(ctx),
        // Handled in main without loading fixtures.
        Commands::Config { .. } | Commands::Version => Ok(()),
    }
}

/// Logs go to stderr so `-o json` output stays parseable.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
