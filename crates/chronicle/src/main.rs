use std::path::PathBuf;

use chronicle::data::storage::DataDirectory;
use chronicle::{App, init_logging};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chronicle")]
#[command(about = "A terminal-based fantasy calendar and event chronicle")]
struct Args {
    /// Path to the data directory (default: ~/.chronicle/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let mut app = App::with_data_dir(data_dir);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    Ok(())
}
