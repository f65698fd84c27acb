//! Foresight CLI — train a decision trie from recorded event sequences and
//! forecast what happens next.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use foresight_cli::{ingest, pipeline, prompt, report};
use foresight_core::config::ForesightConfig;
use foresight_datagen::{LogGenerator, ScenarioGraph};
use foresight_features::FeatureSelector;

#[derive(Parser)]
#[command(name = "foresight")]
#[command(version)]
#[command(about = "Sequence-trie learning and forecasting engine", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "FORESIGHT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a recorded corpus and forecast continuations
    Analyze {
        /// Path to the semicolon-delimited corpus
        #[arg(short, long)]
        input: PathBuf,

        /// Expected number of relevant features
        #[arg(short, long)]
        features: Option<usize>,

        /// Starting relevance percentage, in (2, 100]
        #[arg(short, long)]
        percentage: Option<u32>,

        /// Completed actions used as the query prefix, comma separated
        #[arg(short, long, value_delimiter = ',')]
        steps: Vec<String>,

        /// Maximum number of ranked paths to report
        #[arg(short, long)]
        max_paths: Option<usize>,

        /// Pick the completed steps interactively from the feature list
        #[arg(long)]
        interactive: bool,

        /// Emit machine-readable JSON instead of the operator report
        #[arg(long)]
        json: bool,
    },

    /// Generate a synthetic corpus from scenario graphs
    Generate {
        /// Scenario graph JSON files
        #[arg(short, long, required = true, num_args = 1..)]
        scenario: Vec<PathBuf>,

        /// Number of traces to generate
        #[arg(short, long)]
        amount: Option<usize>,

        /// Absolute cap on noise entries mixed between two actions
        #[arg(long)]
        max_between: Option<usize>,

        /// Probability (percent) that noise follows an action
        #[arg(long)]
        mix_probability: Option<f64>,

        /// Fixed RNG seed for reproducible corpora
        #[arg(long)]
        seed: Option<u64>,

        /// Output corpus path
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            input,
            features,
            percentage,
            steps,
            max_paths,
            interactive,
            json,
        } => {
            let mut config = config;
            if let Some(features) = features {
                config.selection.expected_features = features;
            }
            if let Some(percentage) = percentage {
                config.selection.start_percentage = percentage;
            }
            if let Some(max_paths) = max_paths {
                config.query.max_paths = max_paths;
            }
            if !steps.is_empty() {
                config.query.completed_actions = steps;
            }
            run_analyze(&input, config, interactive, json)
        }
        Commands::Generate {
            scenario,
            amount,
            max_between,
            mix_probability,
            seed,
            out,
        } => {
            let mut config = config;
            if let Some(amount) = amount {
                config.datagen.amount = amount;
            }
            if max_between.is_some() {
                config.datagen.max_between = max_between;
            }
            if let Some(mix_probability) = mix_probability {
                config.datagen.mix_probability = mix_probability;
            }
            if seed.is_some() {
                config.datagen.seed = seed;
            }
            run_generate(&scenario, config, &out)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ForesightConfig> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ForesightConfig::from_toml(&text)
                .with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(ForesightConfig::default()),
    }
}

fn run_analyze(
    input: &Path,
    mut config: ForesightConfig,
    interactive: bool,
    json: bool,
) -> Result<()> {
    let corpus = ingest::read_corpus(input)?;

    if interactive {
        // Select up front so the operator picks steps from the real
        // feature list; the pipeline re-runs the (cheap) selection after.
        let selection = FeatureSelector::new(config.selection.clone()).select(&corpus)?;
        let stdin = io::stdin();
        config.query.completed_actions = prompt::choose_completed_actions(
            &mut stdin.lock(),
            &mut io::stdout(),
            &selection.report.features,
        )?;
    }

    let outcome = pipeline::run(&corpus, &config.selection, &config.query)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report::to_json(&outcome, config.query.max_paths))?
        );
    } else {
        print!("{}", report::render_features(&outcome.feature_report));
        print!("{}", report::render_distribution(&outcome.distribution));
        print!(
            "{}",
            report::render_paths(&outcome.paths, config.query.max_paths)
        );
    }
    Ok(())
}

fn run_generate(scenarios: &[PathBuf], config: ForesightConfig, out: &Path) -> Result<()> {
    let mut graphs = Vec::with_capacity(scenarios.len());
    for path in scenarios {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        graphs.push(
            ScenarioGraph::from_json(&text)
                .with_context(|| format!("parsing scenario {}", path.display()))?,
        );
    }

    let corpus = LogGenerator::new(config.datagen).generate(&graphs)?;
    foresight_datagen::log::write_corpus(out, &corpus)?;
    println!("Wrote {} traces to {}", corpus.len(), out.display());
    Ok(())
}
