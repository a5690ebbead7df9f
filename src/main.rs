// SPDX-License-Identifier: PMPL-1.0-or-later
//! Remediationbot CLI - accessibility remediation plans from audit results

use clap::{Parser, Subcommand, ValueEnum};
use remediationbot::audit::{AuditResult, Impact};
use remediationbot::config::Config;
use remediationbot::report::{generate_report, OutputFormat, RemediationReport};
use remediationbot::tips::MemoryTipStore;
use remediationbot::{calculate_score, patch};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Accessibility remediation engine
#[derive(Parser)]
#[command(name = "remediationbot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a remediation report from an audit result
    Plan {
        /// Audit result JSON file
        audit: PathBuf,

        /// Output format (overrides the configuration file)
        #[arg(long)]
        format: Option<FormatArg>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Tip catalog JSON (overrides the configuration file)
        #[arg(long)]
        tips: Option<PathBuf>,
    },

    /// Compute the health score for a set of severity counts
    Score {
        #[arg(long, default_value_t = 0)]
        critical: usize,

        #[arg(long, default_value_t = 0)]
        serious: usize,

        #[arg(long, default_value_t = 0)]
        moderate: usize,

        #[arg(long, default_value_t = 0)]
        minor: usize,
    },

    /// Print the suggested fix for a single HTML snippet
    Patch {
        /// Offending HTML snippet
        html: String,

        /// Audit rule id (e.g. image-alt)
        #[arg(long)]
        rule: String,

        /// Impact level
        #[arg(long, default_value = "moderate")]
        impact: ImpactArg,
    },

    /// Add the default tips to a tip catalog file, creating it if needed
    Seed {
        /// Tip catalog JSON file
        catalog: PathBuf,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Impact level CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ImpactArg {
    Critical,
    Serious,
    Moderate,
    Minor,
}

impl From<ImpactArg> for Impact {
    fn from(arg: ImpactArg) -> Self {
        match arg {
            ImpactArg::Critical => Impact::Critical,
            ImpactArg::Serious => Impact::Serious,
            ImpactArg::Moderate => Impact::Moderate,
            ImpactArg::Minor => Impact::Minor,
        }
    }
}

fn init_logging(verbose: bool, level: &str) {
    let filter = if verbose {
        EnvFilter::new("remediationbot=debug")
    } else {
        EnvFilter::new(format!("remediationbot={}", level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    init_logging(cli.verbose, &config.log.level);

    match cli.command {
        Commands::Plan { audit, format, output, tips } => {
            if tips.is_some() {
                config.tips.catalog = tips;
            }
            let format = match format {
                Some(f) => f.into(),
                None => config.output_format()?,
            };

            let result = AuditResult::load(&audit)?;
            let store = config.tip_store()?;
            let report = RemediationReport::build(&result, &store);
            write_output(&generate_report(&report, format), output.as_deref())?;
        }

        Commands::Score { critical, serious, moderate, minor } => {
            println!("{}", calculate_score(critical, serious, moderate, minor));
        }

        Commands::Patch { html, rule, impact } => {
            println!("{}", patch(&html, &rule, impact.into()));
        }

        Commands::Seed { catalog } => {
            let mut store = MemoryTipStore::new();
            if catalog.exists() {
                store.load_catalog(&catalog)?;
            }
            let added = store.seed_defaults();
            store.save_catalog(&catalog)?;
            info!("Seeded {}", catalog.display());
            eprintln!(
                "Added {} default tip(s); {} holds {} tip(s)",
                added,
                catalog.display(),
                store.len()
            );
        }
    }

    Ok(())
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
