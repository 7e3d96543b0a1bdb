use embassy_net::Runner;
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{
    AuthMethod, ClientConfig, ModeConfig, WifiController, WifiDevice, WifiEvent, WifiStaState,
};
use log::{info, warn};

use crate::infrastructure::config;

const RECONNECT_DELAY: Duration = Duration::from_millis(2000);
const RETRY_DELAY: Duration = Duration::from_millis(5000);

/// Station config for the LED board's access point.
///
/// An empty password selects an open network.
fn client_config() -> ClientConfig {
    let client = ClientConfig::default().with_ssid(config::WIFI.ssid.into());
    if config::WIFI.password.is_empty() {
        client.with_auth_method(AuthMethod::None)
    } else {
        client.with_password(config::WIFI.password.into())
    }
}

/// Keeps the station associated with the LED board, reconnecting after drops.
#[embassy_executor::task]
pub(crate) async fn wifi_connection_task(mut controller: WifiController<'static>) {
    loop {
        if esp_radio::wifi::sta_state() == WifiStaState::Connected {
            controller.wait_for_event(WifiEvent::StaDisconnected).await;
            warn!("wifi: disconnected from {}", config::WIFI.ssid);
            Timer::after(RECONNECT_DELAY).await;
        }

        if !matches!(controller.is_started(), Ok(true)) {
            let started = match controller.set_config(&ModeConfig::Client(client_config())) {
                Ok(()) => controller.start_async().await,
                Err(e) => Err(e),
            };
            if let Err(e) = started {
                warn!("wifi: cannot start station: {:?}", e);
                Timer::after(RETRY_DELAY).await;
                continue;
            }
        }

        info!("wifi: connecting to {}", config::WIFI.ssid);
        match controller.connect_async().await {
            Ok(()) => info!("wifi: associated"),
            Err(e) => {
                warn!("wifi: connect failed: {:?}", e);
                Timer::after(RETRY_DELAY).await;
            }
        }
    }
}

#[embassy_executor::task]
pub(crate) async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}
