use anyhow::{Context, Result};
use clap::Parser;
use podium::{
    create_router, AppState, Config, NatsSpeechTransport, OpenAiGeneration, RecognitionConfig,
    SessionConfig, TextGeneration,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "podium", about = "Live presentation-coaching analysis service")]
struct Cli {
    /// Configuration file (without extension)
    #[arg(long, default_value = "config/podium")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("{} starting", cfg.service.name);

    let api_key = std::env::var(&cfg.generation.api_key_env).with_context(|| {
        format!(
            "Text-generation API key not found in ${}",
            cfg.generation.api_key_env
        )
    })?;

    let generation: Arc<dyn TextGeneration> = Arc::new(OpenAiGeneration::new(
        api_key,
        cfg.generation.base_url.clone(),
        cfg.generation.model.clone(),
    ));

    let transport = Arc::new(NatsSpeechTransport::connect(&cfg.speech.nats_url).await?);

    let session_config = SessionConfig {
        live_feedback_interval: Duration::from_millis(cfg.analysis.live_feedback_interval_ms),
        reconnect_delay: Duration::from_millis(cfg.analysis.reconnect_delay_ms),
        live_question_total: cfg.analysis.live_question_total,
        final_question_total: cfg.analysis.final_question_total,
        recognition: RecognitionConfig {
            sample_rate: cfg.speech.sample_rate,
            encoding: cfg.speech.encoding.clone(),
            language_code: cfg.speech.language_code.clone(),
            ..RecognitionConfig::default()
        },
        ..SessionConfig::default()
    };

    let state = AppState::new(transport, generation, session_config);
    let router = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
