use esp_println::println;

use led_panel_core::domain::Notifier;

/// Shows user notifications on the serial console.
#[derive(Debug, Default)]
pub(crate) struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&mut self, message: &str) {
        println!("*** {} ***", message);
    }
}
