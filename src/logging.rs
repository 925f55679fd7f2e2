use tracing::Level;

/// Installs the global fmt subscriber.
///
/// Verbose mode lowers the threshold to DEBUG, which turns on per-request
/// output. Each event is written to stdout in one piece, so lines from
/// concurrent connections do not interleave.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level)
        .init();
}
