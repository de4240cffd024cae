use std::path::PathBuf;

use archademy::{App, init_logging};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "archademy")]
#[command(about = "A terminal-based interactive course on AI system architectures")]
struct Args {
    /// Path to the data directory (default: ~/.archademy/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Directory of JSON lesson records to teach from instead of the
    /// bundled curriculum
    #[arg(long)]
    lessons_dir: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".archademy")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut app = App::with_dirs(data_dir, args.lessons_dir);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
