use clap::Parser;
use nimbus::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(
    name = "nimbus",
    version,
    about = "Look up the current temperature of a city from the terminal"
)]
struct Args {}

/// Starts the file logger at `Trace` so config loading is recorded before the
/// configured level is known.
fn start_logger(log_file: File) -> Result<(), log::SetLoggerError> {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    WriteLogger::init(LevelFilter::Trace, log_config, log_file)
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let _args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to nimbus.log in current directory
    if let Ok(log_file) = File::create("nimbus.log") {
        let _ = start_logger(log_file);
    }

    let file_config = config::load_config().map_err(|e| {
        log::error!("Failed to load config: {}", e);
        eprintln!("nimbus: {e}");
        std::io::Error::other(e)
    })?;
    let resolved = config::resolve(&file_config);
    log::set_max_level(resolved.log_level);

    if let Some(path) = config::config_path() {
        log::info!("Config file: {}", path.display());
    }
    log::info!(
        "Nimbus starting up (endpoint: {}, api key set: {})",
        resolved.base_url,
        resolved.api_key.is_some()
    );

    nimbus::tui::run(resolved)
}
