use led_panel_core::config::{DEFAULT_API_HOST, DEFAULT_POLL_INTERVAL_MS, PanelConfig};

pub(crate) struct WifiConfig {
    pub ssid: &'static str,
    pub password: &'static str,
}

pub(crate) struct DeviceConfig {
    pub hostname: &'static str,
}

pub(crate) const WIFI: WifiConfig = WifiConfig {
    ssid: env!("WIFI_SSID"),
    password: env!("WIFI_PASSWORD"),
};

pub(crate) const DEVICE: DeviceConfig = DeviceConfig {
    hostname: "led-panel",
};

const API_HOST: &str = match option_env!("LED_API_HOST") {
    Some(host) => host,
    None => DEFAULT_API_HOST,
};

const API_PORT: u16 = match option_env!("LED_API_PORT") {
    Some(port) => match u16::from_str_radix(port, 10) {
        Ok(port) => port,
        Err(_) => panic!("LED_API_PORT is not a port number"),
    },
    None => 80,
};

const POLL_INTERVAL_MS: u64 = match option_env!("LED_PANEL_POLL_MS") {
    Some(ms) => match u64::from_str_radix(ms, 10) {
        Ok(ms) => ms,
        Err(_) => panic!("LED_PANEL_POLL_MS is not a number"),
    },
    None => DEFAULT_POLL_INTERVAL_MS,
};

pub(crate) const PANEL: PanelConfig =
    PanelConfig::new(API_HOST, API_PORT).with_poll_interval_ms(POLL_INTERVAL_MS);

#[macro_export]
macro_rules! led1_button_gpio {
    ($p:expr) => {
        $p.GPIO0
    };
}

#[macro_export]
macro_rules! led2_button_gpio {
    ($p:expr) => {
        $p.GPIO4
    };
}

#[macro_export]
macro_rules! led1_indicator_gpio {
    ($p:expr) => {
        $p.GPIO25
    };
}

#[macro_export]
macro_rules! led2_indicator_gpio {
    ($p:expr) => {
        $p.GPIO26
    };
}
