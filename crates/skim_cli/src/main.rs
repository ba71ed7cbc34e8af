use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use skim_core::{Config, Error, Result};
use skim_extract::{AnalysisManager, ChromeRenderer, ContentExtractor, HttpFetcher};
use skim_summarize::{ChatSummarizer, Summarizer};
use skim_web::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about = "Article summarization and sentiment service", long_about = None)]
pub struct Cli {
    /// Model identifier sent to the chat endpoint
    #[arg(long)]
    model: Option<String>,
    /// Chat-completions endpoint URL
    #[arg(long)]
    endpoint: Option<String>,
    /// Bullet glyph the model is asked to use in summaries
    #[arg(long)]
    bullet: Option<String>,
    /// Minimum character count before static extraction is trusted
    #[arg(long)]
    threshold: Option<usize>,
    /// Upper bound in seconds on the wait for rendered content
    #[arg(long)]
    render_wait: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: String,
    },
    /// Analyze one or more URLs and print the results as JSON
    Analyze {
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(model) = &cli.model {
        config.model = model.clone();
    }
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(bullet) = &cli.bullet {
        config.bullet = bullet.clone();
    }
    if let Some(threshold) = cli.threshold {
        config.sufficiency_threshold = threshold;
    }
    if let Some(secs) = cli.render_wait {
        config.render_wait = Duration::from_secs(secs);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = resolve_config(&cli)?;

    let fetcher = Arc::new(HttpFetcher::new());
    let renderer = Arc::new(ChromeRenderer::new(config.render_wait));
    let extractor = ContentExtractor::new(fetcher, renderer, config.sufficiency_threshold);
    let summarizer = Arc::new(ChatSummarizer::new(&config));
    info!("🧠 Summarizer initialized (using {})", summarizer.name());
    let manager = AnalysisManager::new(extractor, summarizer);

    match cli.command {
        Commands::Serve { bind } => {
            let app = skim_web::create_app(AppState { manager }).await;
            let listener = tokio::net::TcpListener::bind(&bind)
                .await
                .map_err(|e| Error::Config(format!("failed to bind {}: {}", bind, e)))?;
            info!("🚀 Listening on {}", bind);
            axum::serve(listener, app)
                .await
                .map_err(|e| Error::Unexpected(e.to_string()))?;
        }
        Commands::Analyze { urls } => {
            info!("Analyzing {} URLs", urls.len());
            let results = manager.analyze_urls(&urls).await;
            let rendered = serde_json::to_string_pretty(&results)
                .map_err(|e| Error::Unexpected(e.to_string()))?;
            println!("{}", rendered);
        }
    }

    Ok(())
}
