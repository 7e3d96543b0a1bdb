/// Status endpoint of the device
pub const STATUS_PATH: &str = "/led/stat";
/// Control endpoint of the device
pub const CONTROL_PATH: &str = "/led/control";

/// Address of the device when it runs its own access point
pub const DEFAULT_API_HOST: &str = "192.168.4.1";
pub const DEFAULT_API_PORT: u16 = 80;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;
pub const DEFAULT_SOCKET_TIMEOUT_SECS: u64 = 10;

/// Where the LED device lives and how often to look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    pub host: &'static str,
    pub port: u16,
    pub status_path: &'static str,
    pub control_path: &'static str,
    /// Status refresh period, 0 disables polling
    pub poll_interval_ms: u64,
    pub socket_timeout_secs: u64,
}

impl PanelConfig {
    pub const fn new(host: &'static str, port: u16) -> Self {
        Self {
            host,
            port,
            status_path: STATUS_PATH,
            control_path: CONTROL_PATH,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            socket_timeout_secs: DEFAULT_SOCKET_TIMEOUT_SECS,
        }
    }

    #[must_use]
    pub const fn with_poll_interval_ms(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    pub const fn is_polling(&self) -> bool {
        self.poll_interval_ms > 0
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_HOST, DEFAULT_API_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_disables_polling() {
        assert!(PanelConfig::default().is_polling());
        assert!(!PanelConfig::default().with_poll_interval_ms(0).is_polling());
    }
}
