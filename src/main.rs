//! agent-pages main entry point
//!
//! This is the command-line interface for the agent-pages generator.

use agent_pages::config::{load_config_with_hash, starter_config, Config};
use agent_pages::output::print_summary;
use agent_pages::pipeline::run_build;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Default configuration file name
const DEFAULT_CONFIG: &str = "agent-pages.toml";

/// agent-pages: Markdown versions of your site for AI agents
///
/// agent-pages fetches the rendered HTML of configured routes, rewrites
/// them into clean Markdown with a language model, and publishes them
/// together with an `llms.txt` manifest. Unchanged pages are served from
/// a content-addressed cache.
#[derive(Parser, Debug)]
#[command(name = "agent-pages")]
#[command(version = "1.0.0")]
#[command(about = "Generate AI-agent-friendly Markdown pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a starter configuration file
    Init {
        /// Path of the configuration file to create
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },

    /// Fetch, transform and publish every configured page
    Build {
        /// Path to TOML configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Init { config } => handle_init(&config),
        Command::Build { config } => handle_build(&config).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("agent_pages=info,warn"),
            1 => EnvFilter::new("agent_pages=debug,info"),
            2 => EnvFilter::new("agent_pages=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles `init`: writes the starter config unless one already exists
fn handle_init(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        tracing::warn!("{} already exists, leaving it untouched", path.display());
        return Ok(());
    }

    std::fs::write(path, starter_config())
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("✓ Created {}", path.display());
    println!("  Set GEMINI_API_KEY (or api-key under [transformer]) and run `agent-pages build`");

    Ok(())
}

/// Handles `build`: runs the pipeline and prints the robots snippet
async fn handle_build(path: &Path) -> anyhow::Result<()> {
    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    log_config(&config);

    let outcome = match run_build(&config).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Build failed: {}", e);
            return Err(e.into());
        }
    };

    println!(
        "✓ Manifest written to: {}",
        outcome.discovery.manifest_path.display()
    );
    println!("\nAdd this to your robots.txt:\n");
    println!("{}\n", outcome.discovery.robots_snippet);
    print_summary(&outcome.report);

    Ok(())
}

fn log_config(config: &Config) {
    tracing::info!(
        "Site: {}, pages: {}",
        config.site.base_url,
        config.site.pages.len()
    );
    tracing::info!(
        "Output: {} (published at {})",
        config.output.dir,
        config.output.resolved_public_path()
    );
    tracing::debug!(
        "Transformer: {} ({}), cache: {}",
        config.transformer.model,
        config.transformer.language,
        config.cache.dir
    );
}
