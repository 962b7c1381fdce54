//! Command-line surface. Every flag is optional; no flags runs the default
//! ingestion against the configured knowledge graph.

use clap::Parser;
use kgdrive_core::config::expand_tilde;
use kgdrive_core::KgdriveConfig;
use kgdrive_driver::{Driver, RecordSink, RunReport};
use kgdrive_graph::HttpKnowledgeGraph;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "kgdrive",
    version = env!("CARGO_PKG_VERSION"),
    about = "Feed text to a knowledge graph, cognify it, log the results"
)]
pub struct Cli {
    /// Path to config file (TOML)
    #[arg(long)]
    pub config: Option<String>,

    /// Knowledge graph base URL
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Dataset to add into and cognify
    #[arg(short, long)]
    pub dataset: Option<String>,

    /// Text to ingest instead of the configured sentence
    #[arg(short, long)]
    pub text: Option<String>,

    /// Write logs to a file (in addition to stdout)
    #[arg(long)]
    pub log_file: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, default_value_t = false)]
    pub json_logs: bool,

    /// Print the resolved plan and exit without calling the knowledge graph
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl Cli {
    /// `--config` if given, else the default location.
    pub fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(path) => expand_tilde(path),
            None => KgdriveConfig::default_path(),
        }
    }

    /// Load the config file and apply flags.
    pub fn load_config(&self) -> kgdrive_core::Result<KgdriveConfig> {
        let mut config = KgdriveConfig::load(&self.config_path())?;
        self.apply(&mut config);
        Ok(config)
    }

    /// Flags win over file values.
    pub fn apply(&self, config: &mut KgdriveConfig) {
        if let Some(url) = &self.endpoint {
            config.graph.base_url = url.clone();
        }
        if let Some(dataset) = &self.dataset {
            config.graph.dataset = dataset.clone();
        }
        if let Some(text) = &self.text {
            config.driver.text = text.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(expand_tilde(file));
        }
        if self.json_logs {
            config.logging.json = true;
        }
    }
}

/// Human-readable plan printed by `--dry-run`.
pub fn render_plan(config: &KgdriveConfig) -> String {
    let auth = if config.api_key().is_some() {
        "bearer"
    } else {
        "none"
    };
    format!(
        "=== kgdrive plan ===\n\
         endpoint: {}\n\
         dataset:  {}\n\
         auth:     {}\n\
         text:     {}\n\
         repeat:   {} log call(s) per record\n\
         steps:    add -> cognify -> log",
        config.graph.base_url,
        config.graph.dataset,
        auth,
        config.driver.text,
        config.driver.record_log_repeat,
    )
}

/// What `execute` did.
#[derive(Debug)]
pub enum Execution {
    /// `--dry-run`: the rendered plan, nothing was sent.
    Planned(String),
    Completed(RunReport),
}

/// Run the driver against the configured service, or only render the plan.
pub async fn execute(
    config: &KgdriveConfig,
    dry_run: bool,
    sink: Arc<dyn RecordSink>,
) -> anyhow::Result<Execution> {
    if dry_run {
        return Ok(Execution::Planned(render_plan(config)));
    }

    let graph = Arc::new(HttpKnowledgeGraph::from_config(&config.graph, config.api_key()));
    let mut driver = Driver::with_config(graph, sink, &config.driver)?;
    Ok(Execution::Completed(driver.run().await?))
}
