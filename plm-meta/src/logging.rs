//! Logging setup for the binaries.
//!
//! Events go to stderr so that stdout only carries the printed response.
use tracing::Level;

/// Installs the global `fmt` subscriber.
///
/// `verbosity` is the number of `-v` flags: none logs warnings, one INFO, two DEBUG,
/// three or more TRACE. `quiet` disables logging altogether.
pub fn init(quiet: bool, verbosity: u8) {
    if quiet {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // Only fails when a subscriber is already installed, in which case that one is kept.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
