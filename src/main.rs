//! list-comparer: reconcile two lists of short strings
//!
//! Pairs items across two documents with exact, phonetic or fuzzy matching
//! and reports what matched and what is left over on each side.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use list_comparer::{
    cli,
    config::{
        file::CONFIG_FILE_NAMES, AppConfig, CompareConfig, ComparePaths, ConfigOverrides,
        ConfigPreset, RatesConfig, Validatable,
    },
    matching::Algorithm,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput Formats:",
        "\n  Text:        .txt, .text, .csv, .lst (one item per line)",
        "\n  Spreadsheet: .xlsx, .xls, .xlsm, .ods (every non-empty cell)",
        "\n  Word:        .docx (one item per line)",
        "\n\nAlgorithms:",
        "\n  exact, soundex, levenshtein, damerau-levenshtein, jaro-winkler, token-sort",
        "\n\nOutput Formats:",
        "\n  summary, json, csv, html"
    )
}

#[derive(Parser)]
#[command(name = "list-comparer")]
#[command(version, long_version = build_long_version())]
#[command(about = "Reconcile two lists with exact, phonetic and fuzzy matching", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Items left unmatched (with --fail-on-unmatched)
    3  Error occurred

EXAMPLES:
    # Case-insensitive exact matching
    list-comparer compare customers.xlsx invoices.txt

    # Fuzzy matching with a custom threshold
    list-comparer compare a.txt b.txt -a jaro-winkler -t 90

    # HTML report for sharing
    list-comparer compare a.docx b.xlsx -a token-sort -o html -O report.html

    # Which algorithm pairs up the most items?
    list-comparer rates a.txt b.txt")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Matching and input flags shared by `compare` and `rates`
#[derive(clap::Args)]
struct MatchArgs {
    /// Path to the first list
    first: PathBuf,

    /// Path to the second list
    second: PathBuf,

    /// Similarity threshold in percent for scored algorithms (overrides --preset)
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Threshold preset: strict (90), balanced (80), permissive (65)
    #[arg(long)]
    preset: Option<String>,

    /// Compare items case-sensitively
    #[arg(long)]
    case_sensitive: bool,

    /// Remove repeated items before matching
    #[arg(long)]
    dedupe: bool,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    #[command(flatten)]
    common: MatchArgs,

    /// Matching algorithm
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Do not highlight differences inside matched pairs
    #[arg(long)]
    no_alignment: bool,

    /// Exit with code 1 if any item is left unmatched
    #[arg(long)]
    fail_on_unmatched: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile two lists and report matches and leftovers
    Compare(CompareArgs),

    /// Report how many pairs every algorithm finds
    Rates(MatchArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .list-comparer.yaml in the current directory
    Init {
        /// Start from a preset: default, strict, permissive, ci
        #[arg(long)]
        preset: Option<String>,
    },
}

impl MatchArgs {
    fn overrides(&self, cli: &Cli) -> ConfigOverrides {
        ConfigOverrides {
            threshold: self.threshold,
            preset: self.preset.clone(),
            case_sensitive: self.case_sensitive,
            dedupe: self.dedupe,
            format: self.output,
            output_file: self.output_file.clone(),
            no_color: cli.no_color,
            quiet: cli.quiet,
            ..ConfigOverrides::default()
        }
    }

    fn paths(&self) -> ComparePaths {
        ComparePaths {
            first: self.first.clone(),
            second: self.second.clone(),
        }
    }
}

/// Load the config file, apply command-line overrides and validate the result.
fn resolve_config(cli: &Cli, overrides: &ConfigOverrides) -> Result<AppConfig> {
    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), overrides)?;
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("Invalid configuration:\n  {}", details.join("\n  "));
    }
    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(&cli) {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Compare(args) => {
            let overrides = ConfigOverrides {
                algorithm: args.algorithm,
                no_alignment: args.no_alignment,
                fail_on_unmatched: args.fail_on_unmatched,
                ..args.common.overrides(cli)
            };
            let app = resolve_config(cli, &overrides)?;
            cli::run_compare(CompareConfig::from_app(app, args.common.paths()))
        }

        Commands::Rates(args) => {
            let app = resolve_config(cli, &args.overrides(cli))?;
            cli::run_rates(RatesConfig::from_app(app, args.paths()))
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "list-comparer", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = list_comparer::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => run_config_action(cli, action),
    }
}

fn run_config_action(cli: &Cli, action: &ConfigAction) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) =
                list_comparer::config::load_or_default(cli.config.as_deref());
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("list-comparer").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match list_comparer::config::discover_config_file(cli.config.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init { preset } => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".list-comparer.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = match preset {
                Some(name) => preset_config(name)?,
                None => list_comparer::config::generate_example_config(),
            };
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(exit_codes::SUCCESS)
}

/// Render a config preset as a commented YAML file.
fn preset_config(name: &str) -> Result<String> {
    let Some(preset) = ConfigPreset::from_name(name) else {
        let valid: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
        anyhow::bail!("Unknown preset '{name}'. Valid options: {}", valid.join(", "));
    };
    let yaml = serde_yaml::to_string(&AppConfig::from_preset(preset))
        .context("failed to serialize config")?;
    Ok(format!(
        "# list-comparer configuration ({preset} preset)\n# {}\n\n{yaml}",
        preset.description()
    ))
}
