/// Current firmware version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Delay before startup work begins, in milliseconds
pub const START_WAIT_TIME_MS: u64 = 1000;
/// Delay before a requested reboot is carried out, in milliseconds
pub const REBOOT_WAIT_TIME_MS: u64 = 1000;

/// Timeout while waiting for a Wi-Fi connection to come up, in milliseconds
pub const WIFI_WAIT_TIME_MS: u64 = 20_000;
/// Period of the connectivity check, in milliseconds
pub const WIFI_CHECK_INTERVAL_MS: u64 = 10_000;
/// Backoff before the Wi-Fi stack is reinitialized after repeated failures, in milliseconds
pub const REINITIALIZE_INTERVAL_MS: u64 = 15_000;

/// Serial-port communication speed
pub const SERIAL_BAUDRATE: u32 = 115_200;

/// GPIO number wired to the reset line
pub const RESET_PIN: u8 = 34;
