//! Dynkin CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "dynkin")]
#[command(about = "Dynkin diagrams of affine type C root systems", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML file with display options
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Where to mark the special node: none, printing, latex or both
    #[arg(long, global = true)]
    mark_special_node: Option<String>,

    /// Glyph drawn for the special node in ASCII art
    #[arg(long, global = true)]
    special_node_str: Option<String>,
}

/// Node labels shared by the rendering subcommands.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct LabelArgs {
    /// Shift every node index by this amount
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    offset: i64,

    /// Comma separated labels, one per node in index order
    #[arg(long, value_delimiter = ',')]
    labels: Option<Vec<String>>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ASCII art of a Dynkin diagram
    Ascii {
        /// Cartan type, e.g. C4~ or "['C', 4, 1]"
        cartan_type: String,

        /// Render the dual diagram
        #[arg(long)]
        dual: bool,

        #[command(flatten)]
        labels: LabelArgs,
    },
    /// Print TikZ directives drawing a Dynkin diagram
    Latex {
        /// Cartan type, e.g. C4~
        cartan_type: String,

        /// Distance between nodes in cm
        #[arg(long, default_value = "2")]
        node_dist: f64,

        /// Flip every arrow
        #[arg(long)]
        dual: bool,

        #[command(flatten)]
        labels: LabelArgs,
    },
    /// List the labeled edges of a Dynkin diagram
    Edges {
        /// Cartan type, e.g. C4~
        cartan_type: String,

        /// Print JSON instead of one edge per line
        #[arg(long)]
        json: bool,
    },
    /// Show properties of a Cartan type
    Info {
        /// Cartan type, e.g. C4~
        cartan_type: String,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!("dynkin={}", log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Dynkin v{}", env!("CARGO_PKG_VERSION"));

    let options = commands::display_options(
        cli.config.as_deref(),
        cli.mark_special_node.as_deref(),
        cli.special_node_str.as_deref(),
    )?;

    match cli.command {
        Commands::Ascii { cartan_type, dual, labels } => {
            commands::ascii(&cartan_type, dual, &labels, &options)
        }
        Commands::Latex { cartan_type, node_dist, dual, labels } => {
            commands::latex(&cartan_type, node_dist, dual, &labels, &options)
        }
        Commands::Edges { cartan_type, json } => {
            commands::edges(&cartan_type, json)
        }
        Commands::Info { cartan_type } => {
            commands::info(&cartan_type, &options)
        }
        Commands::Version => {
            println!("Dynkin v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
