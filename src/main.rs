//! ctx-demo — per-request context versus global state
//!
//! Serves the context demos over HTTP, or runs the plain call-chain demos
//! straight from the command line.
//!
//! Usage:
//!   ctx-demo serve                          # Default port 7070
//!   ctx-demo serve --port 8080 --cors       # Custom port, permissive CORS
//!   ctx-demo demo global                    # Global namespace call chain
//!   ctx-demo demo interleave                # Two requests sharing global state
//!   ctx-demo demo global --verbose --log-file  # Debug logs to ~/.ctx-demo/logs/

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use ctx_protocol::User;
use ctx_server::{HttpServer, ServerConfig};
use ctx_services::{controller::Controller, explicit, global_chain, interleave};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ctx-demo", about = "Per-request context versus global state")]
struct Cli {
    /// Enable verbose logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Write logs to a file (defaults to ~/.ctx-demo/logs/ctx-demo.log if no path given)
    #[arg(long, global = true, default_missing_value = "DEFAULT", num_args = 0..=1)]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the demos over HTTP
    Serve {
        /// Port to listen on (0 for OS-assigned)
        #[arg(long, default_value = "7070")]
        port: u16,

        /// Hostname to bind to
        #[arg(long, default_value = "127.0.0.1")]
        hostname: String,

        /// Allow cross-origin requests from any origin
        #[arg(long)]
        cors: bool,
    },

    /// Run one call-chain demo and print what it produced
    Demo {
        #[arg(value_enum)]
        which: Demo,

        /// User name to put in context (global and explicit demos)
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Demo {
    Global,
    Explicit,
    Controller,
    Interleave,
}

fn init_tracing(verbose: bool, log_file: Option<&str>) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let Some(log_file_arg) = log_file else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
        return Ok(());
    };

    let log_path = if log_file_arg == "DEFAULT" {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".ctx-demo/logs/ctx-demo.log")
    } else {
        PathBuf::from(log_file_arg)
    };

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    eprintln!("Logging to {}", log_path.display());
    Ok(())
}

fn run_demo(which: Demo, name: Option<String>) -> anyhow::Result<()> {
    match which {
        Demo::Global => {
            let greeting = match name {
                Some(name) => global_chain::handler_with(User::new(name))?,
                None => global_chain::handler()?,
            };
            println!("{greeting}");
        }
        Demo::Explicit => {
            let name = name.as_deref().unwrap_or(global_chain::GLOBAL_USER);
            println!("{}", explicit::handler(name));
        }
        Demo::Controller => {
            for greeting in Controller::new().index() {
                println!("{greeting}");
            }
        }
        Demo::Interleave => {
            let shared = interleave::global_interleaved("Alice", "Bob");
            let threaded = interleave::explicit_interleaved("Alice", "Bob");
            for (label, outcome) in [("global", shared), ("explicit", threaded)] {
                println!("{label}:");
                for observation in [&outcome.first, &outcome.second] {
                    println!(
                        "  expected {:<14} got {}",
                        observation.expected,
                        observation.saw.as_deref().unwrap_or("(nothing)"),
                    );
                }
                println!("  isolated: {}", outcome.is_isolated());
            }
        }
    }
    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let mut server = HttpServer::start(config).await?;

    println!();
    println!("  Server running at {}", server.base_url());
    println!();
    println!("    GET /Alice            path-bound dependency");
    println!("    GET /memo/anything    memoized request scope");
    println!("    GET /global           global namespace call chain");
    println!("    GET /explicit/Alice   explicit context call chain");
    println!("    GET /health");
    println!();
    println!("  Press Ctrl+C to stop.");
    println!();

    tokio::signal::ctrl_c()
        .await
        .context("waiting for Ctrl+C")?;

    info!(requests = server.requests_served(), "shutting down");
    server.stop().await;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Command::Serve {
            port,
            hostname,
            cors,
        } => {
            serve(ServerConfig {
                port,
                hostname,
                enable_cors: cors,
            })
            .await
        }
        Command::Demo { which, name } => run_demo(which, name),
    }
}
