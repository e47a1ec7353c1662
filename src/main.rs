use clap::Parser;
use postdeck::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(
    name = "postdeck",
    about = "Terminal client for a JSONPlaceholder-style posts service"
)]
struct Args {
    /// Base URL of the posts service
    #[arg(short, long)]
    base_url: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("warning: {e}, using defaults");
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        args.base_url.as_deref(),
        args.log_file.as_deref(),
    );

    // Initialize file logger - stdout belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Postdeck starting up against {}", resolved.base_url);

    postdeck::tui::run(resolved)
}
