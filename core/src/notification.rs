//! Outbound notification channels.
//!
//! Services only see [`NotificationSink`]; whether a message ends up on the
//! terminal, in memory, or somewhere else is decided by whoever builds the
//! service.
//!
//! Delivery never fails. A blank message is replaced by [`EMPTY_PLACEHOLDER`]
//! instead of being rejected.

mod console;
mod recording;

pub use console::ConsoleSink;
pub use recording::RecordingSink;

/// Text delivered in place of an empty or blank message.
pub const EMPTY_PLACEHOLDER: &str = "(empty message)";

/// A channel accepting single-line, human-readable messages.
pub trait NotificationSink: Send + Sync {
    fn send(&self, message: &str);

    fn channel_name(&self) -> &str;
}

/// Returns the text that should actually be delivered for `message`.
pub(crate) fn deliverable(message: &str) -> &str {
    if message.trim().is_empty() {
        EMPTY_PLACEHOLDER
    } else {
        message
    }
}
