use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use optsync::config::AppConfig;
use optsync::elements::{AnswerSelect, QuestionSelect};
use optsync::providers::{client_with_timeout, FixedOptionsProvider, HttpOptionsProvider};
use optsync::{OptionSet, OptionSync, QuestionId, SyncController, SyncEvent};
use reqwest::Url;
use std::sync::Arc;
use std::time::Duration;

/// optsync - replay question selections against the answer-option endpoint
#[derive(Parser, Debug, Clone)]
#[command(name = "optsync")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Question ids to select, in order. An empty string selects the blank row.
    #[arg(value_name = "QUESTION_ID")]
    questions: Vec<String>,

    /// Endpoint base URL (overrides the config file)
    #[arg(short = 'u', long = "base-url", value_name = "URL")]
    base_url: Option<String>,

    /// Use a built-in fixture table instead of the HTTP endpoint
    #[arg(short = 'o', long = "offline")]
    offline: bool,

    /// Pause between selections in milliseconds; 0 lets lookups race
    #[arg(long = "pause", value_name = "MS", default_value = "50")]
    pause_ms: u64,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger with verbosity based on -d/--debug flag
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    let provider: Arc<dyn optsync::OptionsProvider> = if cli.offline {
        Arc::new(demo_table())
    } else {
        let base = cli.base_url.as_deref().unwrap_or(&config.api.base_url);
        let base = Url::parse(base).with_context(|| format!("invalid base URL: {}", base))?;
        let client = client_with_timeout(config.api.timeout_ms)?;
        Arc::new(HttpOptionsProvider::with_client(client, base)?)
    };

    let (question_select, changes) = QuestionSelect::new(None);
    let sync = Arc::new(OptionSync::new(provider, AnswerSelect::new()));
    let mut binding = SyncController::attach(sync.clone(), &question_select, changes);

    for raw in &cli.questions {
        question_select.select(QuestionId::new(raw.clone()));
        if cli.pause_ms > 0 {
            tokio::time::sleep(Duration::from_millis(cli.pause_ms)).await;
        }
    }

    // Closing the change stream lets the binding finish once the remaining
    // lookups have resolved.
    drop(question_select);
    binding.task.await.context("sync binding panicked")?;

    while let Some(event) = binding.events.recv().await {
        match event {
            SyncEvent::Applied { question, count } => {
                println!("question {}: {} option(s)", question, count);
            }
            SyncEvent::Failed { question, error } => {
                println!("question {}: lookup failed ({})", question, error);
            }
        }
    }

    let answer_select = sync.target();
    let answer_select = answer_select.lock().await;
    if answer_select.options().is_empty() {
        println!("selected-option list is empty");
    } else {
        println!("selected-option list now shows:");
        for option in answer_select.options() {
            let marker = if answer_select.selected() == Some(option.key.as_str()) {
                "*"
            } else {
                " "
            };
            println!("  {} {} = {}", marker, option.key, option.label);
        }
    }

    Ok(())
}

/// Fixture table for offline runs.
fn demo_table() -> FixedOptionsProvider {
    let mut capitals = OptionSet::new();
    capitals.push("A", "Paris");
    capitals.push("B", "London");
    capitals.push("C", "Berlin");
    capitals.push("D", "Madrid");

    let mut confirm = OptionSet::new();
    confirm.push("1", "Yes");
    confirm.push("2", "No");
    confirm.push("3", "Maybe");

    let capitals_id = QuestionId::new("capitals").expect("non-empty id");
    let confirm_id = QuestionId::new("42").expect("non-empty id");
    FixedOptionsProvider::new()
        .with_question(capitals_id, capitals)
        .with_question(confirm_id, confirm)
}
