use clap::Parser;
use mushaf::core::config;
use mushaf::core::theme::ThemeMode;
use mushaf::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "mushaf", about = "Terminal Quran reader")]
struct Args {
    /// Initial theme, overriding the configured default
    #[arg(short, long, value_enum)]
    theme: Option<ThemeMode>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to mushaf.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("mushaf.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Mushaf starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config unusable, continuing with defaults: {e}");
        config::MushafConfig::default()
    });
    let resolved = config::resolve(&file_config, args.theme);
    log::info!(
        "Resolved config: theme={:?}, start_tab={:?}",
        resolved.theme,
        resolved.start_tab
    );

    tui::run(resolved)
}
