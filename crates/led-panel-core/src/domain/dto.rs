use core::fmt;

use heapless::String;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entity::{LedId, LedState};

/// Maximum length of a message shown to the user
pub const MESSAGE_MAX_LEN: usize = 128;

pub type Message = String<MESSAGE_MAX_LEN>;
pub type StatusText = String<32>;

/// Command to set the state of one LED.
///
/// Serialized as `{"ledNum": 1, "ledOn": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleRequest {
    #[serde(rename = "ledNum")]
    pub led_num: u8,
    #[serde(rename = "ledOn")]
    pub led_on: bool,
}

impl ToggleRequest {
    pub const fn new(led: LedId, on: bool) -> Self {
        Self {
            led_num: led.as_u8(),
            led_on: on,
        }
    }

    /// Build the request that flips `led` away from its cached `state`.
    ///
    /// Returns `None` while the state is unknown.
    pub const fn toggle(led: LedId, state: LedState) -> Option<Self> {
        match state {
            LedState::On => Some(Self::new(led, false)),
            LedState::Off => Some(Self::new(led, true)),
            LedState::Unknown => None,
        }
    }

    pub const fn led(&self) -> Option<LedId> {
        LedId::from_u8(self.led_num)
    }
}

/// Value the status endpoint reported for one LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportedState {
    On,
    Off,
    /// Anything but `"on"` or `"off"`: other strings, numbers, bools, objects
    Unexpected,
}

impl ReportedState {
    pub const fn from_state(state: LedState) -> Self {
        match state {
            LedState::On => ReportedState::On,
            LedState::Off => ReportedState::Off,
            LedState::Unknown => ReportedState::Unexpected,
        }
    }

    pub const fn state(self) -> Option<LedState> {
        match self {
            ReportedState::On => Some(LedState::On),
            ReportedState::Off => Some(LedState::Off),
            ReportedState::Unexpected => None,
        }
    }
}

impl<'de> Deserialize<'de> for ReportedState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // serde-json-core has no `deserialize_any`, ignored_any still reports strings
        deserializer.deserialize_ignored_any(ReportedStateVisitor)
    }
}

struct ReportedStateVisitor;

impl<'de> Visitor<'de> for ReportedStateVisitor {
    type Value = ReportedState;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an LED status value")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(LedState::parse(value).map_or(ReportedState::Unexpected, ReportedState::from_state))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ReportedState::Unexpected)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(ReportedState::Unexpected)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(ReportedState::Unexpected)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(ReportedState::Unexpected)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(ReportedState::Unexpected)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(ReportedState::Unexpected)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(ReportedState::Unexpected)
    }
}

/// Body of `GET /led/stat`.
///
/// A missing or `null` field is `None`, any other odd value is
/// [`ReportedState::Unexpected`]; neither spoils the other LED.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub led1: Option<ReportedState>,
    #[serde(default)]
    pub led2: Option<ReportedState>,
}

impl StatusResponse {
    /// Value reported for `led`, if any.
    pub const fn value(&self, led: LedId) -> Option<ReportedState> {
        match led {
            LedId::Led1 => self.led1,
            LedId::Led2 => self.led2,
        }
    }
}

/// Body of a successful `POST /led/control`.
///
/// Borrows the message from the response so its length is not capped here.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub(crate) struct ControlResponse<'a> {
    #[serde(default, borrow)]
    pub message: Option<&'a str>,
}

/// Outcome of a control request that reached the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlReply {
    /// Device answered 200 with this message
    Message(Message),
    /// Device answered 200 without a readable `message`, holds the raw body
    RawBody(Message),
    /// Device answered with any other status
    Rejected { status: u16, status_text: StatusText },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_cached_state() {
        for led in LedId::ALL {
            let off = ToggleRequest::toggle(led, LedState::On).unwrap();
            assert_eq!(off.led(), Some(led));
            assert!(!off.led_on);

            let on = ToggleRequest::toggle(led, LedState::Off).unwrap();
            assert_eq!(on.led_num, led.as_u8());
            assert!(on.led_on);
        }
    }

    #[test]
    fn toggle_from_unknown_builds_nothing() {
        assert_eq!(ToggleRequest::toggle(LedId::Led1, LedState::Unknown), None);
    }

    #[test]
    fn toggle_request_wire_format() {
        let body: String<64> =
            serde_json_core::to_string(&ToggleRequest::new(LedId::Led2, true)).unwrap();
        assert_eq!(body.as_str(), r#"{"ledNum":2,"ledOn":true}"#);
    }

    fn parse_status(body: &str) -> StatusResponse {
        serde_json_core::from_str::<StatusResponse>(body).unwrap().0
    }

    #[test]
    fn status_response_tolerates_missing_fields() {
        let status = parse_status(r#"{"led2":"off"}"#);
        assert_eq!(status.value(LedId::Led1), None);
        assert_eq!(status.value(LedId::Led2), Some(ReportedState::Off));
    }

    #[test]
    fn status_response_null_is_missing() {
        let status = parse_status(r#"{"led1":null,"led2":"on"}"#);
        assert_eq!(status.value(LedId::Led1), None);
        assert_eq!(status.value(LedId::Led2), Some(ReportedState::On));
    }

    #[test]
    fn odd_status_values_only_affect_their_led() {
        let bodies = [
            r#"{"led1":"temporarily-unavailable","led2":"on"}"#,
            r#"{"led1":"ON","led2":"on"}"#,
            r#"{"led1":1,"led2":"on"}"#,
            r#"{"led1":-2.5,"led2":"on"}"#,
            r#"{"led1":true,"led2":"on"}"#,
            r#"{"led1":[1,"on"],"led2":"on"}"#,
            r#"{"led1":{"state":"on"},"led2":"on"}"#,
        ];
        for body in bodies {
            let status = parse_status(body);
            assert_eq!(status.value(LedId::Led1), Some(ReportedState::Unexpected), "{body}");
            assert_eq!(status.value(LedId::Led2), Some(ReportedState::On), "{body}");
        }
    }

    #[test]
    fn odd_value_in_last_field_keeps_first() {
        let status = parse_status(r#"{"led1":"off","led2":42}"#);
        assert_eq!(status.value(LedId::Led1), Some(ReportedState::Off));
        assert_eq!(status.value(LedId::Led2), Some(ReportedState::Unexpected));
    }

    #[test]
    fn control_response_message_is_not_capped() {
        let body = format!(r#"{{"message":"{}"}}"#, "x".repeat(MESSAGE_MAX_LEN + 40));
        let (reply, _) = serde_json_core::from_str::<ControlResponse>(&body).unwrap();
        assert_eq!(reply.message.map(str::len), Some(MESSAGE_MAX_LEN + 40));
    }
}
