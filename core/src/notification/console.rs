use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

use tracing::{debug, warn};

use super::{NotificationSink, deliverable};

const PREFIX: &str = "[NOTIFICATION]";

/// Writes each notification as one line on a terminal stream.
///
/// Defaults to standard output. [`ConsoleSink::with_writer`] redirects the
/// lines anywhere that implements [`Write`].
pub struct ConsoleSink {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for ConsoleSink {
    fn send(&self, message: &str) {
        let line = format!("{PREFIX} {}", deliverable(message));
        debug!(channel = self.channel_name(), "delivering notification");

        // A poisoned lock only means another sender panicked mid-write.
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            warn!("Failed to write notification to console: {}", e);
        }
    }

    fn channel_name(&self) -> &str {
        "Console"
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}

impl fmt::Display for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Channel: {}", self.channel_name())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
