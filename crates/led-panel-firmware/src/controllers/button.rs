use core::cell::RefCell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};
use embassy_sync::channel::{Channel, Receiver};
use esp_hal::{
    gpio::{Event, Input, InputConfig, InputPin, Io, Pull},
    handler,
    peripherals::IO_MUX,
    ram,
};

use led_panel_core::domain::LedId;

/// Clicks waiting for the panel task, extra clicks are dropped
const CLICK_QUEUE_SIZE: usize = 4;

pub(crate) type ClickReceiver =
    Receiver<'static, CriticalSectionRawMutex, LedId, CLICK_QUEUE_SIZE>;

static CLICKS: Channel<CriticalSectionRawMutex, LedId, CLICK_QUEUE_SIZE> = Channel::new();

static BUTTONS: Mutex<CriticalSectionRawMutex, RefCell<Option<[Input<'static>; 2]>>> =
    Mutex::new(RefCell::new(None));

/// Listen for presses on the two panel buttons.
///
/// Button `n` toggles remote LED `n`.
pub(crate) fn init_button_controller(
    mux: IO_MUX<'static>,
    led1_pin: impl InputPin + 'static,
    led2_pin: impl InputPin + 'static,
) -> ClickReceiver {
    let mut io = Io::new(mux);
    io.set_interrupt_handler(handle_button_click);

    let mut led1_button = Input::new(led1_pin, InputConfig::default().with_pull(Pull::Up));
    let mut led2_button = Input::new(led2_pin, InputConfig::default().with_pull(Pull::Up));
    led1_button.listen(Event::FallingEdge);
    led2_button.listen(Event::FallingEdge);

    BUTTONS.lock(|cell| {
        cell.borrow_mut().replace([led1_button, led2_button]);
    });

    CLICKS.receiver()
}

#[handler]
#[ram]
fn handle_button_click() {
    BUTTONS.lock(|cell| {
        let mut cell = cell.borrow_mut();
        let Some(buttons) = cell.as_mut() else {
            return;
        };
        for (button, led) in buttons.iter_mut().zip(LedId::ALL) {
            if button.is_interrupt_set() {
                button.clear_interrupt();
                let _ = CLICKS.try_send(led);
            }
        }
    });
}
