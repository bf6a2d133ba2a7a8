//! Quill CLI - Command-line interface for the blog archive
//!
//! Usage:
//!   quill init [dir]               - Write a config and sample content
//!   quill list [filters]           - Show archived posts, newest first
//!   quill show <id>                - Show one post with all properties
//!   quill unarchive <id>           - Move a post back out of the archive
//!   quill delete <id>              - Delete a post and its content
//!   quill categories               - Category options for the editor

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::commands::{
    CategoriesCommand, DeleteCommand, InitCommand, ListCommand, ShowCommand, UnarchiveCommand,
};
use cli::context::AppContext;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Quill - Blog archive listing and management")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (JSON or YAML)
    #[arg(short, long, global = true, env = "QUILL_CONFIG")]
    config: Option<PathBuf>,

    /// Content fixture file or directory
    #[arg(long, global = true, env = "QUILL_CONTENT")]
    content: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file and sample content
    Init(InitCommand),
    /// List archived posts
    List(ListCommand),
    /// Show one post
    Show(ShowCommand),
    /// Move a post out of the archive
    Unarchive(UnarchiveCommand),
    /// Delete a post and everything below it
    Delete(DeleteCommand),
    /// Category options of the editor data source
    Categories(CategoriesCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Init(cmd) = &cli.command {
        return cmd.run();
    }

    let mut ctx = AppContext::load(cli.config.as_deref(), cli.content.as_deref())?;

    match cli.command {
        Commands::Init(_) => Ok(()),
        Commands::List(cmd) => cmd.run(&ctx),
        Commands::Show(cmd) => cmd.run(&ctx),
        Commands::Unarchive(cmd) => cmd.run(&mut ctx),
        Commands::Delete(cmd) => cmd.run(&mut ctx),
        Commands::Categories(cmd) => cmd.run(&ctx),
    }
}
