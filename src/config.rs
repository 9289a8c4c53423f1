use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub speech: SpeechConfig,
    pub generation: GenerationConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

/// Speech-recognition transport settings
#[derive(Debug, Deserialize)]
pub struct SpeechConfig {
    pub nats_url: String,
    pub sample_rate: u32,
    pub encoding: String,
    pub language_code: String,
}

/// Text-generation backend settings
#[derive(Debug, Deserialize)]
pub struct GenerationConfig {
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
}

/// Analysis scheduling and follow-up question settings
#[derive(Debug, Deserialize)]
pub struct AnalysisConfig {
    pub live_feedback_interval_ms: u64,
    pub reconnect_delay_ms: u64,
    pub live_question_total: usize,
    pub final_question_total: usize,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
