mod app;
mod domain;
mod store;
mod ui;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use app::App;
use store::memory::InMemoryTaskStore;

#[derive(Parser, Debug)]
#[command(author, version, about = "fazer — minimal in-memory todo TUI", long_about = None)]
struct Args {
    /// Tick interval of render loop in milliseconds
    #[arg(long, default_value_t = 120)]
    tick_ms: u64,

    /// Start with demo tasks
    #[arg(long, default_value_t = false)]
    demo: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let store = if args.demo {
        InMemoryTaskStore::with_seed(seed_titles())
    } else {
        InMemoryTaskStore::default()
    };

    let app = App::new(store);
    ui::run(app, Duration::from_millis(args.tick_ms))
}

fn seed_titles() -> Vec<&'static str> {
    vec!["Buy milk", "Write documentation", "Draft release notes"]
}
