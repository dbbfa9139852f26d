// nlpdemo command line interface
// Classify model output, inspect configured models, demos and tasks

mod listing;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use nlpdemo_core::{demo, find_model_info, load_model_info_list, task, SelectedModel};
use nlpdemo_predict::{classify, get_basic_answer, Prediction, PredictionKind};
use std::fs::File;
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nlpdemo")]
#[command(about = "Inspect NLP demo models and classify their predictions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (JSON, TOML or YAML)
    #[arg(long, short, global = true)]
    config: Option<String>,

    /// JSON list of model info records; replaces the configured models
    #[arg(long, global = true)]
    models: Option<String>,

    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a prediction payload and print its primary answer
    Classify {
        /// Payload file; reads stdin when omitted or "-"
        file: Option<String>,

        /// Also deserialize into the typed prediction
        #[arg(long)]
        typed: bool,
    },

    /// Show the info record for a model
    Model {
        /// Model id
        id: String,
    },

    /// List demos in navigation order
    Demos {
        /// Include hidden and deprecated demos
        #[arg(long, short)]
        all: bool,
    },

    /// Show a task card
    Task {
        /// Task id
        id: String,
    },
}

fn init_logging(verbose: bool, log_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("NLPDEMO_LOG").unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Read at most `limit + 1` bytes so an oversized payload is rejected
/// without buffering all of it.
fn read_payload(file: Option<&str>, limit: usize) -> anyhow::Result<String> {
    let cap = (limit as u64).saturating_add(1);
    let mut content = String::new();
    match file {
        None | Some("-") => {
            io::stdin()
                .take(cap)
                .read_to_string(&mut content)
                .context("failed to read payload from stdin")?;
        }
        Some(path) => {
            File::open(path)
                .with_context(|| format!("failed to open payload {}", path))?
                .take(cap)
                .read_to_string(&mut content)
                .with_context(|| format!("failed to read payload from {}", path))?;
        }
    }

    if content.len() > limit {
        bail!("payload exceeds {} bytes", limit);
    }
    Ok(content)
}

fn run_classify(file: Option<&str>, typed: bool, limit: usize) -> anyhow::Result<()> {
    let content = read_payload(file, limit)?;
    let payload: serde_json::Value =
        serde_json::from_str(&content).context("payload is not valid JSON")?;

    let kind = classify(&payload);
    info!("prediction kind: {}", kind);
    println!("kind: {}", kind);

    if kind == PredictionKind::Unknown {
        debug!("is_prediction = {}", nlpdemo_predict::is_prediction(&payload));
    }

    let answer = get_basic_answer(&payload)?;
    println!("answer: {}", answer);

    if typed {
        match Prediction::from_value(&payload)? {
            Prediction::Bidaf(p) => {
                println!("passage tokens: {}", p.passage_tokens.len());
                println!("question tokens: {}", p.question_tokens.len());
                println!("best span: {:?}", p.best_span);
            }
            Prediction::TransformerQa(p) => {
                println!("context tokens: {}", p.context_tokens.len());
                println!("best span: {:?} (score {})", p.best_span, p.best_span_scores);
            }
            Prediction::Naqanet(p) => {
                println!("answer type: {}", p.answer.answer_type().as_str());
                println!("loss: {}", p.loss);
                println!("question id: {}", p.question_id.as_deref().unwrap_or("-"));
            }
            Prediction::Nmn(p) => {
                println!("program: {}", p.program_lisp);
                let modules: Vec<&str> = p
                    .program_nested_expression
                    .programs()
                    .iter()
                    .map(|node| node.name.as_str())
                    .collect();
                println!("modules: {}", modules.join(", "));
                println!("program depth: {}", p.program_nested_expression.depth());
            }
        }
    }

    Ok(())
}

fn run_model(config: &nlpdemo_core::AppConfig, id: &str) -> anyhow::Result<()> {
    let info = find_model_info(&config.models, &SelectedModel::new(id))?;
    println!("{} ({})", info.display_name(), info.id);
    if let Some(url) = &info.url {
        println!("url: {}", url);
    }
    if let Some(card) = &info.model_card_data {
        if !card.description.is_empty() {
            println!("{}", card.description);
        }
    }
    Ok(())
}

fn run_demos(config: &nlpdemo_core::AppConfig, all: bool) {
    let builtin;
    let demos = if config.demos.is_empty() {
        builtin = demo::builtin();
        &builtin
    } else {
        &config.demos
    };

    for d in listing::list_demos(demos, all) {
        println!(
            "{:>3}  {:<24} {:<28} [{}] {}",
            d.order,
            d.group,
            d.title,
            d.status.as_str(),
            d.model_ids.join(", ")
        );
    }
}

fn run_task(id: &str) -> anyhow::Result<()> {
    let tasks = task::builtin();
    let Some(card) = tasks.get(id) else {
        bail!("no task card for task {}", id);
    };
    println!("{}", serde_json::to_string_pretty(card)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = listing::load_config(cli.config.as_deref())?;
    init_logging(cli.verbose, &config.log_level);

    if let Some(path) = cli.models.as_deref() {
        config.models = load_model_info_list(path)
            .with_context(|| format!("failed to load model list from {}", path))?;
    }
    debug!(
        "{} models and {} demos configured",
        config.models.len(),
        config.demos.len()
    );
    config.warn_unknown_demo_models();

    match cli.command {
        Commands::Classify { file, typed } => {
            run_classify(file.as_deref(), typed, config.max_payload_bytes)?;
        }
        Commands::Model { id } => {
            run_model(&config, &id)?;
        }
        Commands::Demos { all } => {
            run_demos(&config, all);
        }
        Commands::Task { id } => {
            run_task(&id)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn payload_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_payload_within_limit() {
        let file = payload_file(r#"{"answer": "2"}"#);
        let path = file.path().to_str().unwrap();
        assert_eq!(read_payload(Some(path), 15).unwrap(), r#"{"answer": "2"}"#);
    }

    #[test]
    fn test_read_payload_over_limit() {
        let file = payload_file(&"x".repeat(64));
        let path = file.path().to_str().unwrap();
        let err = read_payload(Some(path), 16).unwrap_err();
        assert!(err.to_string().contains("exceeds 16 bytes"));
    }

    #[test]
    fn test_read_payload_unbounded_limit() {
        let file = payload_file("{}");
        let path = file.path().to_str().unwrap();
        assert_eq!(read_payload(Some(path), usize::MAX).unwrap(), "{}");
    }

    #[test]
    fn test_read_payload_missing_file() {
        assert!(read_payload(Some("/no/such/payload.json"), 16).is_err());
    }
}
