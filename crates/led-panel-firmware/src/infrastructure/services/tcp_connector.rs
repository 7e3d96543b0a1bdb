use embassy_net::{IpEndpoint, Stack, tcp::TcpSocket};
use embassy_time::Duration;
use log::warn;

use led_panel_core::config::PanelConfig;
use led_panel_core::net::http::{Connector, HttpError};

use crate::infrastructure::drivers::resolve_host;

const RX_BUFFER_SIZE: usize = 1024;
const TX_BUFFER_SIZE: usize = 1024;

/// Opens a fresh TCP connection to the LED device for every request.
pub(crate) struct TcpConnector {
    stack: Stack<'static>,
    host: &'static str,
    port: u16,
    timeout: Duration,
    rx_buffer: [u8; RX_BUFFER_SIZE],
    tx_buffer: [u8; TX_BUFFER_SIZE],
}

impl TcpConnector {
    pub(crate) fn new(stack: Stack<'static>, config: &PanelConfig) -> Self {
        Self {
            stack,
            host: config.host,
            port: config.port,
            timeout: Duration::from_secs(config.socket_timeout_secs),
            rx_buffer: [0; RX_BUFFER_SIZE],
            tx_buffer: [0; TX_BUFFER_SIZE],
        }
    }
}

impl Connector for TcpConnector {
    type Connection<'a>
        = TcpSocket<'a>
    where
        Self: 'a;

    async fn connect(&mut self) -> Result<Self::Connection<'_>, HttpError> {
        let address = resolve_host(self.stack, self.host).await.map_err(|()| {
            warn!("tcp: cannot resolve {}", self.host);
            HttpError::Connect
        })?;

        let mut socket = TcpSocket::new(self.stack, &mut self.rx_buffer, &mut self.tx_buffer);
        socket.set_timeout(Some(self.timeout));
        socket
            .connect(IpEndpoint::new(address, self.port))
            .await
            .map_err(|e| {
                warn!("tcp: connect to {}:{} failed: {:?}", self.host, self.port, e);
                HttpError::Connect
            })?;

        Ok(socket)
    }
}
