/// Returns the current timestamp in microseconds since the UNIX epoch
/// (January 1, 1970), or `0` if the system clock reports a time before
/// the epoch.
pub fn now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0)
}
