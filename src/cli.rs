//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{self, Context};
use cosmic_truth::output::OutputMode;

/// cosmic - Cosmic claim verification
#[derive(Parser, Debug)]
#[command(
    name = "cosmic",
    version,
    about = "Submit cosmic claims and get a verdict",
    long_about = "Classify claims about the universe as verified, debunked or a cosmic mystery.\n\n\
                  Each stored claim comes with a witty remark and a bonus fact.\n\
                  Run `cosmic serve` to expose the same operations over HTTP."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: <config dir>/cosmic-truth/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the claim ledger (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a claim without storing it
    Classify {
        /// Claim text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Manage stored claims (submit, list, recent, show, remove)
    Claim {
        #[command(subcommand)]
        action: ClaimAction,
    },

    /// Browse cosmic facts
    Facts {
        /// Only show facts in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Show a single random fact
        #[arg(short, long, conflicts_with = "category")]
        random: bool,
    },

    /// Show example claims
    Examples,

    /// Run the HTTP API server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ClaimAction {
    /// Classify and store a claim
    Submit {
        /// Claim text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Acting user
        #[arg(short, long)]
        user: Option<String>,
    },

    /// List your most recent claims
    List {
        /// Acting user
        #[arg(short, long)]
        user: Option<String>,
    },

    /// List the newest claims across all users
    Recent,

    /// Show one of your claims
    Show {
        /// Claim ID (e.g. CLM-3)
        id: String,

        /// Acting user
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Delete one of your claims
    Remove {
        /// Claim ID (e.g. CLM-3)
        id: String,

        /// Acting user
        #[arg(short, long)]
        user: Option<String>,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let ctx = || Context::load(cli.config.as_deref(), cli.data_dir.clone(), output_mode);

    match cli.command {
        Some(Command::Classify { text }) => commands::classify(&text.join(" "), output_mode),
        Some(Command::Claim { action }) => commands::claim_cmd(action, &ctx()?),
        Some(Command::Facts { category, random }) => {
            commands::facts(category.as_deref(), random, output_mode)
        },
        Some(Command::Examples) => commands::examples(output_mode),
        Some(Command::Serve { host, port }) => commands::serve(ctx()?, host, port),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("cosmic v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("cosmic v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'cosmic --help' for usage");
                println!("Run 'cosmic classify \"The Earth is flat\"' to try it out");
            }
            Ok(())
        },
    }
}
