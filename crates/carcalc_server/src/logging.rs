use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `level` applies to this crate and to
/// request tracing while the core library stays at `warn`.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let default_filter = format!("carcalc_server={level},carcalc_core=warn,tower_http={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .try_init()?;

    tracing::debug!("carcalc logging initialized (filter={default_filter})");
    Ok(())
}
