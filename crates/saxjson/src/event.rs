//! Owned events and a consumer that records them.
//!
//! # Examples
//!
//! ```
//! use saxjson::{EventRecorder, ParseEvent, Parser};
//!
//! let mut parser = Parser::new(EventRecorder::new());
//! let events = parser.parse(r#"["foo", 1]"#).unwrap();
//! assert_eq!(
//!     events,
//!     vec![
//!         ParseEvent::BeginArray,
//!         ParseEvent::String { value: "foo".to_string() },
//!         ParseEvent::Integer { value: 1 },
//!         ParseEvent::EndArray,
//!     ]
//! );
//! ```
use alloc::{string::String, vec::Vec};

use crate::consumer::EventConsumer;

/// One call of the [`EventConsumer`] interface, as a value.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(any(test, feature = "serde"), serde(tag = "kind"))]
#[derive(Clone, Debug, PartialEq)]
pub enum ParseEvent {
    /// [`EventConsumer::string_value`]
    String {
        /// The decoded text.
        value: String,
    },
    /// [`EventConsumer::integer_value`]
    Integer {
        /// The integer.
        value: i64,
    },
    /// [`EventConsumer::float_value`]
    Float {
        /// The float.
        value: f64,
    },
    /// [`EventConsumer::boolean_value`]
    Boolean {
        /// The boolean.
        value: bool,
    },
    /// [`EventConsumer::null_value`]
    Null,
    /// [`EventConsumer::begin_array`]
    BeginArray,
    /// [`EventConsumer::end_array`]
    EndArray,
    /// [`EventConsumer::begin_object`]
    BeginObject,
    /// [`EventConsumer::end_object`]
    EndObject,
}

impl ParseEvent {
    /// Replays this event on `consumer`.
    pub fn deliver<C: EventConsumer + ?Sized>(&self, consumer: &mut C) {
        match self {
            Self::String { value } => consumer.string_value(value),
            Self::Integer { value } => consumer.integer_value(*value),
            Self::Float { value } => consumer.float_value(*value),
            Self::Boolean { value } => consumer.boolean_value(*value),
            Self::Null => consumer.null_value(),
            Self::BeginArray => consumer.begin_array(),
            Self::EndArray => consumer.end_array(),
            Self::BeginObject => consumer.begin_object(),
            Self::EndObject => consumer.end_object(),
        }
    }
}

/// An [`EventConsumer`] that records every event it receives.
///
/// [`result`](EventConsumer::result) hands over the recorded events. Events
/// delivered before a failed parse remain available through
/// [`EventRecorder::events`] until the next parse begins.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    events: Vec<ParseEvent>,
}

impl EventRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[ParseEvent] {
        &self.events
    }

    /// Consumes the recorder, returning its events.
    #[must_use]
    pub fn into_events(self) -> Vec<ParseEvent> {
        self.events
    }
}

impl EventConsumer for EventRecorder {
    type Output = Vec<ParseEvent>;

    fn string_value(&mut self, value: &str) {
        self.events.push(ParseEvent::String {
            value: value.into(),
        });
    }

    fn integer_value(&mut self, value: i64) {
        self.events.push(ParseEvent::Integer { value });
    }

    fn float_value(&mut self, value: f64) {
        self.events.push(ParseEvent::Float { value });
    }

    fn boolean_value(&mut self, value: bool) {
        self.events.push(ParseEvent::Boolean { value });
    }

    fn null_value(&mut self) {
        self.events.push(ParseEvent::Null);
    }

    fn begin_array(&mut self) {
        self.events.push(ParseEvent::BeginArray);
    }

    fn end_array(&mut self) {
        self.events.push(ParseEvent::EndArray);
    }

    fn begin_object(&mut self) {
        self.events.push(ParseEvent::BeginObject);
    }

    fn end_object(&mut self) {
        self.events.push(ParseEvent::EndObject);
    }

    fn result(&mut self) -> Self::Output {
        core::mem::take(&mut self.events)
    }

    fn reset(&mut self) {
        self.events.clear();
    }
}
