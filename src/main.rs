use anyhow::Result;
use dotenv::dotenv;
use homework_bot_rust::{logging, Config, Watcher};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Credentials are checked before anything touches the network; a missing
    // token aborts here with a non-zero exit code and no notification.
    let cfg = Config::from_env()?;
    logging::init(&cfg.log_file)?;

    info!("Starting homework_bot...");

    let watcher = Watcher::new(cfg);
    watcher.run().await
}
