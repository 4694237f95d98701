use std::time::Duration;

/// Event poll timeout; message expiry and save retries run once per tick
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}
