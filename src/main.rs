use anyhow::Context;
use clap::Parser;
use findit_api::RestApi;
use findit_core::{EngineConfig, MatchEngine};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Lost & found description matching service
#[derive(Parser, Debug)]
#[command(name = "findit-match")]
#[command(about = "Scores similarity between lost and found item descriptions", long_about = None)]
struct Args {
    /// Address to bind the HTTP API to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(short, long, default_value_t = 5001)]
    port: u16,

    /// JSON engine configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stopword list (one word per line) replacing the built-in English list
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Use plain whitespace splitting instead of the word tokenizer
    #[arg(long)]
    disable_tokenizer: bool,

    /// Pass tokens through without lemmatization
    #[arg(long)]
    disable_lemmatizer: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn engine_config(&self) -> anyhow::Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)
                .with_context(|| format!("loading config from {:?}", path))?,
            None => EngineConfig::default(),
        };

        if self.stopwords.is_some() {
            config.resources.stopwords_path = self.stopwords.clone();
        }
        config.resources.disable_tokenizer |= self.disable_tokenizer;
        config.resources.disable_lemmatizer |= self.disable_lemmatizer;

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting FindIt matching service v{}", env!("CARGO_PKG_VERSION"));

    let config = args.engine_config()?;
    let engine = Arc::new(MatchEngine::new(config)?);
    info!("Matching engine initialized: {:?}", engine.capabilities());

    let host = args.host.clone();
    let port = args.port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on {}:{}", host, port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(engine, host, port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://{}:{}/match", args.host, args.port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
