use anyhow::Context;
use clap::Parser;
use tea_gathering::cli::Args;
use tea_gathering::config::Config;
use tea_gathering::logging::{default_log_path, init_tracing};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_path = args.log_file.clone().unwrap_or_else(default_log_path);
    init_tracing(&log_path)
        .with_context(|| format!("failed to open log file '{}'", log_path.display()))?;

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    args.apply(&mut config);

    tea_gathering::ui::runtime::run(&config).context("terminal UI failed")?;
    Ok(())
}
