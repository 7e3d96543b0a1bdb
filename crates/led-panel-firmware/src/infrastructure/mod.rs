//! Infrastructure layer - Port implementations
//!
//! ESP32 implementations of the panel ports: TCP sockets over Wi-Fi,
//! indicator LEDs and the serial console.

pub(crate) mod config;
pub(crate) mod drivers;
pub(crate) mod services;
pub(crate) mod tasks;
pub(crate) mod types;
