use led_panel_core::LedPanelController;
use led_panel_core::net::HttpLedPanelApi;

use super::drivers::IndicatorPanelView;
use super::services::{ConsoleNotifier, TcpConnector};

pub(crate) type PanelApi = HttpLedPanelApi<TcpConnector>;

pub(crate) type PanelController = LedPanelController<PanelApi, IndicatorPanelView, ConsoleNotifier>;
