use core::fmt::Write as _;

use heapless::String;
use log::{debug, error, info, warn};

use crate::domain::dto::{ControlReply, StatusResponse, ToggleRequest};
use crate::domain::entity::{ClientStatusCache, LedId};
use crate::domain::ports::{ApiError, LedPanelApi, Notifier, PanelView};
use crate::view::LedWidget;

/// Shown when the device refuses a command or cannot be reached
pub const GENERIC_FAILURE: &str = "Some problem occurred in the API, please try again";

const ALERT_BUFFER_SIZE: usize = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelError {
    Api(ApiError),
    /// Toggle requested before the LED state was ever fetched
    UnknownState(LedId),
    /// Device answered the command with a non-200 status
    Rejected { status: u16 },
}

impl From<ApiError> for PanelError {
    fn from(err: ApiError) -> Self {
        PanelError::Api(err)
    }
}

/// Keeps the panel view in sync with the remote LEDs.
pub struct LedPanelController<A, V, N> {
    api: A,
    view: V,
    notifier: N,
    cache: ClientStatusCache,
}

impl<A: LedPanelApi, V: PanelView, N: Notifier> LedPanelController<A, V, N> {
    /// Create the controller and draw both LEDs as unknown.
    pub fn new(api: A, view: V, notifier: N) -> Self {
        let mut controller = Self {
            api,
            view,
            notifier,
            cache: ClientStatusCache::new(),
        };
        for led in LedId::ALL {
            controller.render(led);
        }
        controller
    }

    pub fn cache(&self) -> &ClientStatusCache {
        &self.cache
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the device status and redraw both LEDs.
    ///
    /// On error the cache and view are left as they were.
    pub async fn fetch_status(&mut self) -> Result<(), PanelError> {
        let status = self.api.fetch_status().await.map_err(|e| {
            error!("status: fetch failed: {:?}", e);
            PanelError::Api(e)
        })?;
        self.apply_status(&status);
        Ok(())
    }

    /// Ask the device to flip `led` relative to the cached state.
    ///
    /// Nothing is sent while the state is unknown. The cache is never changed here.
    pub async fn toggle_led(&mut self, led: LedId) -> Result<(), PanelError> {
        let Some(request) = ToggleRequest::toggle(led, self.cache.get(led)) else {
            warn!("control: LED{} state unknown, not sending", led.as_u8());
            return Err(PanelError::UnknownState(led));
        };
        info!(
            "control: LED{} -> {}",
            request.led_num,
            if request.led_on { "on" } else { "off" }
        );

        match self.api.send_toggle(&request).await {
            Ok(ControlReply::Message(message)) => {
                self.alert_with("API Message: ", &message);
                Ok(())
            }
            Ok(ControlReply::RawBody(body)) => {
                self.alert_with("Raw response content: ", &body);
                Ok(())
            }
            Ok(ControlReply::Rejected {
                status,
                status_text,
            }) => {
                let mut line = String::<ALERT_BUFFER_SIZE>::new();
                let _ = write!(line, "control: error {} {}", status, status_text);
                self.notifier.diagnostic(&line);
                self.notifier.alert(GENERIC_FAILURE);
                Err(PanelError::Rejected { status })
            }
            Err(e) => {
                error!("control: request failed: {:?}", e);
                self.notifier.alert(GENERIC_FAILURE);
                Err(PanelError::Api(e))
            }
        }
    }

    /// Button click: toggle, then refresh whatever the toggle did.
    ///
    /// Returns the first error of the two steps.
    pub async fn handle_click(&mut self, led: LedId) -> Result<(), PanelError> {
        let toggled = self.toggle_led(led).await;
        let refreshed = self.fetch_status().await;
        debug!("panel: click LED{} handled", led.as_u8());
        toggled.and(refreshed)
    }

    fn apply_status(&mut self, status: &StatusResponse) {
        for led in LedId::ALL {
            let Some(value) = status.value(led) else {
                warn!("status: no value for LED{}", led.as_u8());
                continue;
            };
            let Some(state) = value.state() else {
                warn!("status: unexpected value for LED{}", led.as_u8());
                continue;
            };
            self.cache.set(led, state);
            self.render(led);
        }
    }

    fn render(&mut self, led: LedId) {
        let widget = LedWidget::new(led, self.cache.get(led));
        self.view.render(led, &widget);
    }

    fn alert_with(&mut self, prefix: &str, text: &str) {
        let mut alert = String::<ALERT_BUFFER_SIZE>::new();
        let _ = alert.push_str(prefix);
        let _ = alert.push_str(text);
        self.notifier.alert(&alert);
    }
}
