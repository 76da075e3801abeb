//! Stowage cargo placement CLI

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use stowage_cli::{report, Manifest, PackingSession};

#[derive(Parser)]
#[command(name = "stowage")]
#[command(about = "Greedy 3D cargo placement for containers and vans")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack the items of a load manifest
    Pack {
        /// Path to the JSON manifest
        manifest: PathBuf,

        /// Output file for the packing session (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable the stacking fallback
        #[arg(long)]
        no_stacking: bool,

        /// Reject positions that overlap loaded items
        #[arg(long)]
        verify_overlap: bool,

        /// Heaviest item that may be stacked
        #[arg(long)]
        stack_weight_limit: Option<f64>,
    },

    /// Write a sample manifest
    Sample {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the report of a saved session
    Show {
        /// Path to the session JSON
        session: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Pack {
            manifest,
            output,
            no_stacking,
            verify_overlap,
            stack_weight_limit,
        } => {
            let manifest = Manifest::parse_file(&manifest)?;

            let mut config = manifest.config();
            if no_stacking {
                config.allow_stacking = false;
            }
            if verify_overlap {
                config.verify_overlap = true;
            }
            if let Some(limit) = stack_weight_limit {
                config.stack_weight_limit = limit;
            }
            config.validate()?;

            let session = PackingSession::run(manifest, config);
            report::print_summary(&session);

            if let Some(path) = output {
                session.save_json(&path)?;
                println!("Session saved to: {}", path.display());
            }
        }

        Commands::Sample { output } => {
            let json = Manifest::sample().to_json()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("Sample manifest saved to: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Show { session } => {
            let session = PackingSession::load_json(&session)?;
            report::print_summary(&session);
        }
    }

    Ok(())
}
