//! Gobang GUI
//!
//! Play five in a row against the computer.

use std::path::PathBuf;

use clap::Parser;
use gobang::ui::GobangApp;
use gobang::{FileStore, MemoryStore, Session, SessionStore};
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Keep the score tally in this JSON file instead of in memory
    #[arg(short, long)]
    scores: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn open_store(path: Option<PathBuf>) -> Box<dyn SessionStore> {
    let Some(path) = path else {
        return Box::new(MemoryStore::new());
    };
    match FileStore::open(&path) {
        Ok(store) => {
            info!(path = %path.display(), "loaded score file");
            Box::new(store)
        }
        Err(err) => {
            warn!(%err, "keeping scores in memory");
            Box::new(MemoryStore::new())
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(args.log_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let session = Session::new(open_store(args.scores));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([740.0, 500.0])
            .with_min_inner_size([720.0, 490.0])
            .with_title("Gobang"),
        ..Default::default()
    };

    eframe::run_native(
        "Gobang",
        options,
        Box::new(|cc| Ok(Box::new(GobangApp::new(cc, session)))),
    )
}
