//! kguide CLI
//!
//! Command-line interface for kguide - multilingual travel guide content.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kguide_core::{Config, ContentStore, Session};

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "kguide")]
#[command(about = "kguide - multilingual travel guide content")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use a specific config file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List categories with translated content
    #[command(alias = "ls")]
    Categories {
        /// Content language (en, ko, zh, ja)
        #[arg(short, long, default_value = "en")]
        language: String,
    },
    /// Show one category's translated content
    Show {
        /// Category id (e.g. "wifi")
        category: String,
        /// Content language (en, ko, zh, ja)
        #[arg(short, long, default_value = "en")]
        language: String,
    },
    /// List advertisements
    Ads {
        #[command(subcommand)]
        command: AdCommands,
    },
    /// Load content files and seed ads into the store
    Load {
        /// Content directory (defaults to the configured content_dir)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Record a signed-in user
    Login {
        /// OAuth identifier
        open_id: String,
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Show the currently signed-in user
    Whoami,
    /// Terminate the current session
    Logout,
    /// Show store status
    Status,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum AdCommands {
    /// Top carousel slots
    Top {
        /// Audience language (en, ko, zh, ja)
        #[arg(short, long, default_value = "en")]
        language: String,
    },
    /// Bottom grid boxes
    Bottom {
        /// Audience language (en, ko, zh, ja)
        #[arg(short, long, default_value = "en")]
        language: String,
    },
    /// In-content placements for one category
    InContent {
        /// Category id (e.g. "wifi")
        category: String,
        /// Audience language (en, ko, zh, ja)
        #[arg(short, long, default_value = "en")]
        language: String,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, content_dir)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need the store
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), cli.config.as_ref(), &output);
    }

    let config = Config::load_with_cli_override(cli.config.as_ref())?;
    let mut store = ContentStore::open(&config)?;
    let session = Session::new(&config);

    match cli.command {
        Commands::Categories { language } => {
            commands::content::categories(&store, &session, &language, &output)
        }
        Commands::Show { category, language } => {
            commands::content::show(&store, &session, &category, &language, &output)
        }
        Commands::Ads { command } => handle_ad_command(command, &store, &session, &output),
        Commands::Load { dir } => commands::load::load(&mut store, &config, dir, &output),
        Commands::Login {
            open_id,
            name,
            email,
        } => commands::auth::login(&mut store, &session, &open_id, name, email, &output),
        Commands::Whoami => commands::auth::whoami(&store, &session, &output),
        Commands::Logout => commands::auth::logout(&store, &session, &output),
        Commands::Status => commands::status::show(&store, &config, &session, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_ad_command(
    command: AdCommands,
    store: &ContentStore,
    session: &Session,
    output: &Output,
) -> Result<()> {
    match command {
        AdCommands::Top { language } => {
            commands::content::top_ads(store, session, &language, output)
        }
        AdCommands::Bottom { language } => {
            commands::content::bottom_ads(store, session, &language, output)
        }
        AdCommands::InContent { category, language } => {
            commands::content::in_content_ads(store, session, &category, &language, output)
        }
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}

/// Install the tracing subscriber; logs go to stderr, filtered by RUST_LOG
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
