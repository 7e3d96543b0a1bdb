mod indicator;
mod network;

pub(crate) use indicator::IndicatorPanelView;
pub(crate) use network::{init_network_stack, resolve_host, wait_for_connection};
