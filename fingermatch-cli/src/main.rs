use clap::Parser;
use fingermatch::io::{open_dynamic, owned_from_dynamic_image, save_region};
use fingermatch::{
    find_with_retries_config, Match, MatchConfig, Rect, RetryConfig, SampleConfig,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "FingerMatch CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SampleConfigJson {
    points: usize,
    dedup: bool,
}

impl Default for SampleConfigJson {
    fn default() -> Self {
        let cfg = SampleConfig::default();
        Self {
            points: cfg.points,
            dedup: cfg.dedup,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MatchConfigJson {
    parallel: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    context_path: String,
    template_path: String,
    output_path: Option<String>,
    crop_path: Option<String>,
    attempts: usize,
    sample: SampleConfigJson,
    #[serde(rename = "match")]
    match_cfg: MatchConfigJson,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context_path: String::new(),
            template_path: String::new(),
            output_path: None,
            crop_path: None,
            attempts: RetryConfig::default().attempts,
            sample: SampleConfigJson::default(),
            match_cfg: MatchConfigJson::default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    found: bool,
    rect: Option<Rect>,
    attempts: usize,
    fingerprint_points: usize,
}

impl Output {
    fn new(found: Option<Match>, attempts: usize, fingerprint_points: usize) -> Self {
        Self {
            found: found.is_some(),
            rect: found.map(|m| m.rect),
            attempts,
            fingerprint_points,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("fingermatch=debug".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.context_path.is_empty() || config.template_path.is_empty() {
        return Err("context_path and template_path must be set in the config".into());
    }
    if config.sample.points == 0 {
        return Err("sample.points must be at least 1".into());
    }
    if config.attempts == 0 {
        return Err("attempts must be at least 1".into());
    }

    let context_img = open_dynamic(&config.context_path)?;
    let context = owned_from_dynamic_image(&context_img)?;
    let template = owned_from_dynamic_image(&open_dynamic(&config.template_path)?)?;

    let retry = RetryConfig {
        sample: SampleConfig {
            points: config.sample.points,
            dedup: config.sample.dedup,
        },
        attempts: config.attempts,
        matching: MatchConfig {
            parallel: config.match_cfg.parallel,
        },
    };
    let outcome = find_with_retries_config(&context, &template, &retry);
    tracing::info!(
        found = outcome.is_found(),
        attempts = outcome.attempts,
        "search finished"
    );

    if let (Some(found), Some(path)) = (outcome.found, config.crop_path.as_deref()) {
        save_region(&context_img, found.rect, path)?;
    }

    let sampled = retry
        .sample
        .effective_points(template.width(), template.height());
    let output = Output::new(outcome.found, outcome.attempts, sampled);
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
