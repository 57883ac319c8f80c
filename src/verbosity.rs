// Verbosity levels for clean output control
use tracing::Level;

/// 0 = warnings and errors, 1 = basic info, 2+ = full debug output
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global tracing subscriber. Safe to call more than once.
pub fn init_logging(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    if verbosity > 0 {
        tracing::info!("📢 Verbosity level: {} (0=quiet, 1=basic, 2=full)", verbosity);
    }
}
