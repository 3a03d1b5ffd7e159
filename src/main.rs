use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use notemaker::logging::{LogTarget, init_logging};
use notemaker::model::ClientConfig;
use notemaker::remote::NotesClient;

mod cli_commands;
mod cli_exec;

use self::cli_commands::{CreateArgs, DeleteArgs, ListArgs, UpdateArgs};

#[derive(Parser)]
#[command(name = "notemaker")]
#[command(about = "Create, edit and delete notes on a remote notes API", long_about = None)]
struct Cli {
    /// Notes API base URL (default: http://localhost:8080)
    #[arg(long, global = true)]
    url: Option<String>,

    /// JSON config file with `base_url` and `timeout_secs`
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List all notes
    List(ListArgs),
    /// Create a note
    Create(CreateArgs),
    /// Replace a note's title and content
    Update(UpdateArgs),
    /// Delete a note
    Delete(DeleteArgs),
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let target = match (&cli.log_file, &cli.command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Some(_)) => LogTarget::Stderr,
        (None, None) => LogTarget::Off,
    };
    init_logging(&cli.log_level, target)?;

    let config = ClientConfig::resolve(cli.config.as_deref(), cli.url)?;
    let client = NotesClient::new(config)?;

    match cli.command {
        Some(command) => cli_exec::handle_command(&client, command),
        None => notemaker::tui::run(client),
    }
}
