use anyhow::{Context, Result};
use sidebar_cli::script::{Replay, load_script};
use sidebar_cli::summary::{ReplaySummary, print_sort_keys, print_summary};
use sidebar_store::StoreConfig;
use tracing::{info, info_span};

use crate::cli::ReplayArgs;

pub fn run_replay(args: &ReplayArgs) -> Result<()> {
    let span = info_span!("replay", script = %args.script.display());
    let _guard = span.enter();

    let config = match &args.config {
        Some(path) => StoreConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => StoreConfig::default(),
    };
    let steps = load_script(&args.script)?;
    info!(steps = steps.len(), "loaded script");

    let mut replay = Replay::new(&config);
    replay.run(steps);

    if args.json {
        let json = serde_json::to_string_pretty(replay.store().state())
            .context("serialize final state")?;
        println!("{json}");
    } else {
        print_summary(&ReplaySummary::from_replay(&replay));
    }
    Ok(())
}

pub fn run_sort_keys() {
    print_sort_keys();
}
