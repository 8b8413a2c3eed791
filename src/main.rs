use anyhow::{Context, Result};
use scenegen_core::GeneratorConfig;
use scenegen_suites::run_all;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    init_logging();

    let config = GeneratorConfig::default();
    info!(root = %config.output_root.display(), seed = config.seed, "generating scenes");

    run_all(&config).context("scene generation failed")?;
    Ok(())
}
