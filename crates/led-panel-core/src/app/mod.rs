mod controller;

pub use controller::{GENERIC_FAILURE, LedPanelController, PanelError};
