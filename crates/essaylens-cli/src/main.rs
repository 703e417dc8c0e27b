//! essaylens CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "essaylens", version, about = "Essay scoring and feedback tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single essay
    Analyze {
        /// Path to the essay text file, or "-" for stdin
        essay: PathBuf,

        /// Writing goal (leadership, resilience, curiosity, or any label)
        #[arg(long, default_value = "general")]
        goal: String,

        /// Essay title
        #[arg(long)]
        title: Option<String>,

        /// Student identifier (omit for anonymous)
        #[arg(long)]
        user: Option<String>,

        /// Output formats: text, json, html, markdown (comma-separated, or "all")
        #[arg(long, default_value = "text")]
        format: String,

        /// Directory for report files
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Score a batch of essays from a TOML manifest or directory
    Batch {
        /// Path to a .toml manifest or a directory of manifests
        #[arg(long)]
        manifest: PathBuf,

        /// Max concurrent essays
        #[arg(long, default_value = "4")]
        parallelism: usize,

        /// Output directory for the report
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, html, all
        #[arg(long, default_value = "json")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compare two batch reports (earlier vs later drafts)
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Minimum overall-score delta that counts as a change
        #[arg(long, default_value = "0")]
        threshold: i32,

        /// Exit code 1 if any essay regressed
        #[arg(long)]
        fail_on_regression: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List stored essay analyses
    History {
        /// Only essays for this student
        #[arg(long)]
        user: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show aggregate analytics
    Stats {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate batch manifest TOML files
    Validate {
        /// Path to a manifest file or directory
        #[arg(long)]
        manifest: PathBuf,
    },

    /// Create starter config and an example manifest
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("essaylens=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            essay,
            goal,
            title,
            user,
            format,
            output,
            config,
        } => commands::analyze::execute(essay, goal, title, user, format, output, config).await,
        Commands::Batch {
            manifest,
            parallelism,
            output,
            format,
            config,
        } => commands::batch::execute(manifest, parallelism, output, format, config).await,
        Commands::Compare {
            baseline,
            current,
            threshold,
            fail_on_regression,
            format,
        } => commands::compare::execute(baseline, current, threshold, fail_on_regression, format),
        Commands::History { user, config } => commands::history::execute(user, config).await,
        Commands::Stats { config } => commands::stats::execute(config).await,
        Commands::Validate { manifest } => commands::validate::execute(manifest),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
