use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linediff::{Algorithm, DiffConfiguration, Differ, Granularity};
use tracing_subscriber::EnvFilter;

use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Compare texts with Myers, Patience or Histogram diff")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Diff two files
    Diff {
        /// The original file
        source: PathBuf,

        /// The modified file
        target: PathBuf,

        /// Diff algorithm: myers, patience or histogram
        #[arg(short, long, default_value = "myers")]
        algorithm: Algorithm,

        /// Comparison unit: line or character
        #[arg(short, long, default_value = "line")]
        granularity: Granularity,

        /// Number of context lines to include
        #[arg(short, long, default_value_t = 3)]
        context: usize,

        /// Ignore spaces and tabs when comparing
        #[arg(short = 'w', long, default_value_t = false)]
        ignore_spaces: bool,

        /// Compare case-insensitively
        #[arg(short = 'i', long, default_value_t = false)]
        ignore_case: bool,

        /// Fail if the edit distance exceeds this value
        #[arg(short, long)]
        max_distance: Option<usize>,
    },

    /// Print the character-level edit distance between two strings
    Distance { a: String, b: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Diff {
            source,
            target,
            algorithm,
            granularity,
            context,
            ignore_spaces,
            ignore_case,
            max_distance,
        } => {
            let source_content = fs::read_to_string(&source)
                .with_context(|| format!("failed to read {}", source.display()))?;
            let target_content = fs::read_to_string(&target)
                .with_context(|| format!("failed to read {}", target.display()))?;

            let config = DiffConfiguration::default()
                .algorithm(algorithm)
                .granularity(granularity)
                .context_lines(context)
                .ignore_spaces(ignore_spaces)
                .case_sensitive(!ignore_case)
                .max_distance(max_distance);
            let differ = Differ::new(config);
            let result = differ.diff(&source_content, &target_content)?;

            println!("--- {}", source.display());
            println!("+++ {}", target.display());
            for hunk in result.hunks(differ.config().context_lines) {
                print!("{}", hunk);
            }

            println!("\n{}", result.summary());
            println!(
                "distance: {}{}",
                result.distance,
                if result.is_minimal() { "" } else { " (upper bound)" }
            );
            println!("similarity: {:.4}", result.similarity);
        }

        Commands::Distance { a, b } => {
            println!("{}", linediff::edit_distance(&a, &b));
        }
    }

    Ok(())
}
