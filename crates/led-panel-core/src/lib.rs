//! Two-LED remote control panel.
//!
//! Fetches the LED status from a device's embedded HTTP server, keeps a view
//! model in sync with it and sends toggle commands on button clicks.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod config;
pub mod domain;
pub mod net;
pub mod view;

pub use app::{LedPanelController, PanelError};
pub use config::PanelConfig;
pub use domain::{LedId, LedState};
