use anyhow::Context;
use clap::Parser;
use sonic_core::{EngineConfig, MapSession, SearchResult, ToggleOutcome};
use std::path::PathBuf;

mod script;
mod sink;

use script::ScriptEvent;
use sink::LogSink;

/// Replay hover/click events against a similarity map and print the scene.
#[derive(Debug, Parser)]
#[command(name = "sonic-native", version)]
struct Cli {
    /// SearchResult JSON file
    payload: PathBuf,

    /// Partial engine config (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Events applied in order: hover:ID, out, click:ID, stop
    #[arg(short, long = "event", value_name = "EVENT")]
    events: Vec<ScriptEvent>,

    /// Pretty-print the render description
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            EngineConfig::from_json(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    let text = std::fs::read_to_string(&cli.payload)
        .with_context(|| format!("reading payload {}", cli.payload.display()))?;
    let results = SearchResult::from_json(&text)
        .with_context(|| format!("parsing {}", cli.payload.display()))?;

    let mut session = MapSession::new(LogSink::default(), config)?;
    session.replace_results(results);
    log::info!("[native] {} items normalized", session.normalized().len());

    for event in &cli.events {
        match script::apply(&mut session, event) {
            Some(ToggleOutcome::NoPreview(id)) => {
                log::warn!("[native] {}: {}", id, sonic_core::NO_PREVIEW_NOTICE);
            }
            Some(outcome) => log::debug!("[native] {:?} -> {:?}", event, outcome),
            None => log::debug!("[native] {:?}", event),
        }
    }

    let desc = session.render();
    let out = if cli.pretty {
        serde_json::to_string_pretty(&desc)?
    } else {
        serde_json::to_string(&desc)?
    };
    println!("{out}");
    if let Some(src) = session.playback().sink().source() {
        log::info!(
            "[native] last source {} after {} start request(s)",
            src,
            session.playback().sink().started().len()
        );
    }
    Ok(())
}
