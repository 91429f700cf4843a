mod completion;
mod config;
mod explorer;
mod logging;
mod utils;
mod web;

use crate::completion::Gemini;
use crate::config::Config;
use crate::explorer::Explorer;
use anyhow::Result;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    logging::init();

    let config = Config::from_env()?;
    tracing::info!(model = %config.model, api_base = %config.api_base, "starting explorer");

    let provider = Gemini::new(config.api_key.clone(), config.api_base.clone());
    let explorer = Explorer::new(provider, config.model.clone());

    if let Err(e) = web::start_server(explorer, config.port).await {
        tracing::error!(error = %e, "server stopped");
        return Err(e);
    }
    Ok(())
}
