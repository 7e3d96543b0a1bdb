//! View model of the panel.
//!
//! Each LED is shown as a status label and a button. The button offers the
//! opposite of the current state, so an LED that is on gets an "OFF" button
//! drawn in the off style.

use core::fmt::Write as _;

use heapless::String;

use crate::domain::entity::{LedId, LedState};

pub type LabelText = String<24>;
pub type ButtonText = String<16>;

/// Visual style of a panel button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Button turns the LED on
    On,
    /// Button turns the LED off
    Off,
    /// State unknown, button does nothing
    Disabled,
}

impl ButtonStyle {
    /// CSS class used by the device web page for this style.
    pub const fn class_name(self) -> &'static str {
        match self {
            ButtonStyle::On => "button-on",
            ButtonStyle::Off => "button-off",
            ButtonStyle::Disabled => "button-disabled",
        }
    }
}

/// Everything displayed for one LED.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedWidget {
    pub label: LabelText,
    pub button_text: ButtonText,
    pub style: ButtonStyle,
}

impl LedWidget {
    /// Build the widget for `led` in `state`.
    pub fn new(led: LedId, state: LedState) -> Self {
        let n = led.as_u8();
        let mut label = LabelText::new();
        let mut button_text = ButtonText::new();
        // Both buffers fit the longest text ("LED2 Status: UNKNOWN", "OFF LED2")
        let style = match state {
            LedState::On => {
                let _ = write!(label, "LED{} Status: ON", n);
                let _ = write!(button_text, "OFF LED{}", n);
                ButtonStyle::Off
            }
            LedState::Off => {
                let _ = write!(label, "LED{} Status: OFF", n);
                let _ = write!(button_text, "ON LED{}", n);
                ButtonStyle::On
            }
            LedState::Unknown => {
                let _ = write!(label, "LED{} Status: UNKNOWN", n);
                let _ = write!(button_text, "LED{}", n);
                ButtonStyle::Disabled
            }
        };

        Self {
            label,
            button_text,
            style,
        }
    }

    pub const fn is_enabled(&self) -> bool {
        !matches!(self.style, ButtonStyle::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_led_offers_off_button() {
        let widget = LedWidget::new(LedId::Led1, LedState::On);
        assert_eq!(widget.label.as_str(), "LED1 Status: ON");
        assert_eq!(widget.button_text.as_str(), "OFF LED1");
        assert_eq!(widget.style, ButtonStyle::Off);
        assert_eq!(widget.style.class_name(), "button-off");
    }

    #[test]
    fn off_led_offers_on_button() {
        let widget = LedWidget::new(LedId::Led2, LedState::Off);
        assert_eq!(widget.label.as_str(), "LED2 Status: OFF");
        assert_eq!(widget.button_text.as_str(), "ON LED2");
        assert_eq!(widget.style, ButtonStyle::On);
        assert_eq!(widget.style.class_name(), "button-on");
    }

    #[test]
    fn unknown_led_is_disabled() {
        let widget = LedWidget::new(LedId::Led2, LedState::Unknown);
        assert_eq!(widget.label.as_str(), "LED2 Status: UNKNOWN");
        assert!(!widget.is_enabled());
    }
}
