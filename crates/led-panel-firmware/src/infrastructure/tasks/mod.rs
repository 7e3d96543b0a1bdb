pub(crate) mod network;
pub(crate) mod panel;

pub(crate) use network::{network_runner_task, wifi_connection_task};
pub(crate) use panel::panel_task;
