//! pagesmith CLI - export page designs as runnable source projects.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "pagesmith")]
#[command(about = "Export page designs as runnable React or static HTML projects")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to pagesmith.toml config file
    #[arg(short, long, default_value = "pagesmith.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create pagesmith.toml and a sample design
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Export a design file or a directory of designs
    Export(commands::export::ExportArgs),

    /// List the supported section kinds
    Kinds,

    /// Preview an unpacked static-html export (React exports need npm run dev)
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve
        #[arg(short, long, default_value = "dist")]
        dir: PathBuf,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Export(args) => {
            commands::export::run(&cli.config, args).await?;
        }
        Commands::Kinds => {
            commands::kinds::run();
        }
        Commands::Serve { port, dir, no_open } => {
            commands::serve::run(port, dir, !no_open).await?;
        }
    }

    Ok(())
}
