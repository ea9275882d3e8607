use anyhow::Result;
use log::info;

use bikeshare_explorer::{run, Console, DatasetRegistry, VERSION};

fn main() {
    // Logs go to stderr; keep them quiet unless RUST_LOG asks for more
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run_explorer() {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run_explorer() -> Result<()> {
    let registry = DatasetRegistry::default();
    info!(
        "bikeshare-explorer v{} reading datasets from {}",
        VERSION,
        registry.base_dir().display()
    );

    let mut console = Console::stdio();
    run(&mut console, &registry)
}
