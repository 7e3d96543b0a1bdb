use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Timer};
use log::{debug, info};

use led_panel_core::PanelConfig;

use crate::controllers::ClickReceiver;
use crate::infrastructure::types::PanelController;

/// Drives the panel: button clicks and periodic status refresh.
///
/// Owns the controller, so clicks are handled one after another.
#[embassy_executor::task]
pub(crate) async fn panel_task(
    mut panel: PanelController,
    clicks: ClickReceiver,
    config: PanelConfig,
) {
    info!("panel: started, poll interval {} ms", config.poll_interval_ms);
    if let Err(e) = panel.fetch_status().await {
        debug!("panel: initial status failed: {:?}", e);
    }

    loop {
        let event = if config.is_polling() {
            select(
                clicks.receive(),
                Timer::after(Duration::from_millis(config.poll_interval_ms)),
            )
            .await
        } else {
            Either::First(clicks.receive().await)
        };

        match event {
            Either::First(led) => {
                if let Err(e) = panel.handle_click(led).await {
                    debug!("panel: click LED{} failed: {:?}", led.as_u8(), e);
                }
            }
            Either::Second(()) => {
                if let Err(e) = panel.fetch_status().await {
                    debug!("panel: status refresh failed: {:?}", e);
                }
            }
        }
    }
}
