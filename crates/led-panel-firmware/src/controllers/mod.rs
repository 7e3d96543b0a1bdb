mod button;

pub(crate) use button::{ClickReceiver, init_button_controller};
