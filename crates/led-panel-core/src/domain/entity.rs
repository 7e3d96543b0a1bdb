/// Identifies one of the two remote LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedId {
    Led1,
    Led2,
}

impl LedId {
    /// Both LEDs, in display order.
    pub const ALL: [LedId; 2] = [LedId::Led1, LedId::Led2];

    /// Wire number of the LED (`ledNum` in control requests).
    pub const fn as_u8(self) -> u8 {
        match self {
            LedId::Led1 => 1,
            LedId::Led2 => 2,
        }
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(LedId::Led1),
            2 => Some(LedId::Led2),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            LedId::Led1 => 0,
            LedId::Led2 => 1,
        }
    }
}

/// Last known state of a remote LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedState {
    On,
    Off,
    /// No status fetch has completed yet
    #[default]
    Unknown,
}

impl LedState {
    /// Parse the status value reported by the device.
    ///
    /// Only `"on"` and `"off"` are accepted; `Unknown` is never reported by the device.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "on" => Some(LedState::On),
            "off" => Some(LedState::Off),
            _ => None,
        }
    }
}

/// Client-side copy of the device status.
///
/// Written only by the status fetch, read when building a toggle command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientStatusCache {
    leds: [LedState; 2],
}

impl ClientStatusCache {
    pub const fn new() -> Self {
        Self {
            leds: [LedState::Unknown; 2],
        }
    }

    pub const fn get(&self, led: LedId) -> LedState {
        self.leds[led.index()]
    }

    pub(crate) fn set(&mut self, led: LedId, state: LedState) {
        self.leds[led.index()] = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_starts_unknown() {
        let cache = ClientStatusCache::new();
        assert_eq!(cache.get(LedId::Led1), LedState::Unknown);
        assert_eq!(cache.get(LedId::Led2), LedState::Unknown);
    }

    #[test]
    fn cache_keeps_leds_apart() {
        let mut cache = ClientStatusCache::new();
        cache.set(LedId::Led2, LedState::On);
        assert_eq!(cache.get(LedId::Led1), LedState::Unknown);
        assert_eq!(cache.get(LedId::Led2), LedState::On);
    }

    #[test]
    fn parse_accepts_only_on_and_off() {
        assert_eq!(LedState::parse("on"), Some(LedState::On));
        assert_eq!(LedState::parse("off"), Some(LedState::Off));
        assert_eq!(LedState::parse("ON"), None);
        assert_eq!(LedState::parse("unknown"), None);
        assert_eq!(LedState::parse(""), None);
    }

    #[test]
    fn led_numbers() {
        assert_eq!(LedId::Led1.as_u8(), 1);
        assert_eq!(LedId::Led2.as_u8(), 2);
        assert_eq!(LedId::from_u8(2), Some(LedId::Led2));
        assert_eq!(LedId::from_u8(3), None);
    }
}
