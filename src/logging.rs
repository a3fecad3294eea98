use crate::consts;
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Set up tracing output for a debugging session.  The terminal itself is
/// owned by the game display, so log lines go to a file in the working
/// directory instead of stderr.  When debug logging is off, no subscriber is
/// installed and every tracing macro is a no-op.
pub(crate) fn init(debug_logging: bool) -> anyhow::Result<()> {
    if !debug_logging {
        return Ok(());
    }
    let file = fs_err::File::create(consts::LOG_FILE)
        .with_context(|| format!("failed to create log file {:?}", consts::LOG_FILE))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file.into_parts().0))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;
    Ok(())
}
