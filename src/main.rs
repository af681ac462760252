//! ctxlog command line.
//!
//! # Commands
//! - `emit`: log one message through the configured dispatcher
//! - `check`: validate a config file and print it as JSON
//! - `watch`: install a config and hot-reload it until Ctrl-C

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ctxlog::config::{load_config, ConfigWatcher, LoggerConfig};
use ctxlog::dispatch::{install, Dispatcher, Registry};
use ctxlog::observability::init_logging;
use ctxlog::{Context, Level};

#[derive(Parser)]
#[command(name = "ctxlog")]
#[command(about = "Context-aware structured logging", long_about = None)]
struct Cli {
    /// Logger configuration file (TOML). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a single message
    Emit {
        /// Level to log at (debug, info, error)
        #[arg(short, long, default_value = "info")]
        level: Level,

        /// User id attached to the context
        #[arg(long)]
        user_id: Option<String>,

        /// Request id attached to the context
        #[arg(long, conflicts_with = "new_request_id")]
        request_id: Option<String>,

        /// Attach a freshly generated request id
        #[arg(long)]
        new_request_id: bool,

        /// Message text
        message: String,
    },
    /// Validate the configuration and print it
    Check,
    /// Apply the configuration and reload it on change until interrupted
    Watch,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::default(),
    };

    match cli.command {
        Commands::Check => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Emit {
            level,
            user_id,
            request_id,
            new_request_id,
            message,
        } => {
            init_logging(&config)?;
            let dispatcher = Dispatcher::from_config(&config)?;

            let mut ctx = Context::background();
            if let Some(id) = user_id {
                ctx = ctx.with_user_id(id);
            }
            if let Some(id) = request_id {
                ctx = ctx.with_request_id(id);
            } else if new_request_id {
                ctx = ctx.with_new_request_id();
            }

            match level {
                Level::Debug => dispatcher.debugc(&ctx, &message),
                Level::Info => dispatcher.infoc(&ctx, &message),
                Level::Error => {
                    dispatcher.errorc(&ctx, &message);
                }
            }
        }
        Commands::Watch => {
            let path = cli.config.ok_or("watch requires --config")?;
            init_logging(&config)?;
            install(Dispatcher::from_config(&config)?);

            let (watcher, updates) = ConfigWatcher::new(&path);
            let _watcher = watcher.run()?;

            tokio::select! {
                _ = Registry::global().apply_updates(updates) => {}
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Received Ctrl-C, stopping watcher");
                }
            }
        }
    }

    Ok(())
}
