//! Store configuration.
use std::env;

/// Sizing knobs for the store and its reporting channel.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Toasts kept before the oldest is evicted.
    pub toast_capacity: usize,
    /// Errors queued in the reporting channel before senders wait.
    pub channel_buffer: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            toast_capacity: 64,
            channel_buffer: 16,
        }
    }
}

impl StoreConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `STREAMKIT_TOAST_CAPACITY` - Toast log capacity (default: 64)
    /// - `STREAMKIT_ERROR_BUFFER` - Reporting channel buffer (default: 16)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("STREAMKIT_TOAST_CAPACITY") {
            config.toast_capacity = capacity.max(1);
        }
        if let Some(buffer) = read_env::<usize>("STREAMKIT_ERROR_BUFFER") {
            config.channel_buffer = buffer.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
