//! Logging setup

use std::fmt;
use std::time::SystemTime as StdSystemTime;
use tracing_subscriber::{
    fmt::format::Writer, fmt::layer, fmt::time::FormatTime, layer::SubscriberExt,
    util::SubscriberInitExt, Registry,
};

/// Custom time formatter that shows only seconds
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let now = StdSystemTime::now();
        let duration = now
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();

        // Format as HH:MM:SS (only seconds precision)
        let total_seconds = duration.as_secs();
        let hours = (total_seconds / 3600) % 24;
        let minutes = (total_seconds / 60) % 60;
        let seconds = total_seconds % 60;

        write!(w, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Initialize tracing on stderr. The generated data file is the only thing
/// this tool writes anywhere else, so diagnostics never mix with output.
pub fn setup_logging() {
    let stderr_layer = layer()
        .with_writer(std::io::stderr)
        .with_timer(SecondPrecisionTimer)
        .with_ansi(true);
    Registry::default().with(stderr_layer).init();
}
