use std::process;

use gemgen::{batch, catalog, logger, BatchOptions, Config, GeminiClient};

#[tokio::main]
async fn main() {
    if let Err(e) = logger::init() {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match dotenv::dotenv() {
        Ok(_) => log::debug!("✅ .env file loaded"),
        Err(_) => log::debug!("No .env file found, using system environment variables"),
    }

    let config = Config::from_env();

    if config.gemini.require_api_key().is_err() {
        log::error!("❌ GEMINI_API_KEY environment variable not set");
        log::error!("Get your API key from: https://aistudio.google.com/apikey");
        log::error!("Then run: export GEMINI_API_KEY=\"your-key-here\"");
        process::exit(1);
    }

    let client = match GeminiClient::new(config.gemini.clone()) {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Failed to initialize Gemini client: {}", e);
            process::exit(1);
        }
    };

    log::info!("🚀 Starting IWT image generation...");
    log::info!(
        "Generating {} images in isometric flat-color style",
        catalog::records().len()
    );

    let options = BatchOptions::from(&config);
    match batch::run(client.image(), catalog::records(), &options).await {
        Ok(summary) => {
            log::info!("🎉 Image generation complete!");
            log::info!("   Successful: {}", summary.successful);
            log::info!("   Failed: {}", summary.failed);
            log::info!("   Images saved to: {}", config.output_dir.display());
        }
        Err(e) => {
            // Only an unusable output directory lands here; per-record
            // failures are absorbed by the batch runner.
            log::error!("❌ Batch aborted: {}", e);
            process::exit(1);
        }
    }
}
