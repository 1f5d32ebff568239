use std::env;

use anyhow::Context;
use voiceover_tts::errors::constants::{DEFAULT_CACHE_DIR, DEFAULT_CONFIG_PATH};
use voiceover_tts::{trace, ApiKey, AudioCache, Config, ServiceSettings, SpeechService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    trace::init_tracing_subscriber();

    let config = Config::load(DEFAULT_CONFIG_PATH)?;

    let api_key = match config.api_key {
        Some(key) => ApiKey::new(key),
        None => ApiKey::from_env().context(
            "set ELEVEN_API_KEY in the environment or a .env file, or put api_key in voiceover.toml",
        )?,
    };

    let cache = AudioCache::new(
        config
            .cache_dir
            .unwrap_or_else(|| DEFAULT_CACHE_DIR.into()),
    )?;

    let mut settings = ServiceSettings {
        voice_name: config.voice_name,
        voice_id: config.voice_id,
        ..Default::default()
    };
    if let Some(model) = config.model {
        settings.model = model;
    }

    let service = SpeechService::connect(settings, api_key, cache).await?;

    let text = env::args().skip(1).collect::<Vec<_>>().join(" ");
    let text = if text.is_empty() {
        "Hello from the voiceover service.".to_string()
    } else {
        text
    };

    let metadata = service.synthesize(&text).await?;
    println!("{}", service.cache_dir().join(&metadata.original_audio).display());

    Ok(())
}
