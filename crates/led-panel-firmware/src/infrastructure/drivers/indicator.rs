use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};
use log::info;

use led_panel_core::domain::{LedId, PanelView};
use led_panel_core::view::{ButtonStyle, LedWidget};

/// Panel view mirroring each remote LED on a local indicator LED.
///
/// The indicator is lit while the remote LED is on, i.e. while the button
/// offers to turn it off. Labels go to the log.
pub(crate) struct IndicatorPanelView {
    indicators: [Output<'static>; 2],
}

impl IndicatorPanelView {
    pub(crate) fn new(
        led1_pin: impl OutputPin + 'static,
        led2_pin: impl OutputPin + 'static,
    ) -> Self {
        Self {
            indicators: [
                Output::new(led1_pin, Level::Low, OutputConfig::default()),
                Output::new(led2_pin, Level::Low, OutputConfig::default()),
            ],
        }
    }
}

impl PanelView for IndicatorPanelView {
    fn render(&mut self, led: LedId, widget: &LedWidget) {
        let indicator = match led {
            LedId::Led1 => &mut self.indicators[0],
            LedId::Led2 => &mut self.indicators[1],
        };
        indicator.set_level(Level::from(widget.style == ButtonStyle::Off));

        info!(
            "panel: {} [{}] ({})",
            widget.label,
            widget.button_text,
            widget.style.class_name()
        );
    }
}
