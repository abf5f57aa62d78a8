//! Rebuilds a [`Value`] tree from the flat event stream.
//!
//! The builder keeps a single stack. Leaf events push finished values;
//! `begin_*` pushes a [`Slot::Marker`]; `end_*` pops everything above the
//! nearest marker and folds it into one container value. By the time an
//! `end_*` fires, every nested container has already collapsed to a single
//! slot, so the enclosing container only ever sees finished values.
use alloc::{string::String, vec::Vec};

use crate::{
    consumer::EventConsumer,
    value::{Map, Value},
};

/// One entry of the builder stack.
#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Value(Value),
    /// Start of the container currently being collected.
    Marker,
}

/// An [`EventConsumer`] that builds a [`Value`] tree.
///
/// # Examples
///
/// ```
/// use saxjson::{DomBuilder, EventConsumer, Value};
///
/// let mut dom = DomBuilder::new();
/// dom.begin_array();
/// dom.integer_value(1);
/// dom.string_value("two");
/// dom.end_array();
/// assert_eq!(
///     dom.finish(),
///     Some(Value::Array(vec![Value::Integer(1), Value::from("two")]))
/// );
/// ```
#[derive(Debug, Default, Clone)]
pub struct DomBuilder {
    stack: Vec<Slot>,
    /// Set when an event arrived that no well-formed document produces.
    poisoned: bool,
}

impl DomBuilder {
    /// Creates a builder with an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots on the stack, markers included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Takes the finished tree.
    ///
    /// Returns `None` unless exactly one completed value is on the stack and
    /// every event so far was well sequenced. The builder is empty afterwards.
    pub fn finish(&mut self) -> Option<Value> {
        let stack = core::mem::take(&mut self.stack);
        let poisoned = core::mem::take(&mut self.poisoned);
        match <[Slot; 1]>::try_from(stack) {
            Ok([Slot::Value(root)]) if !poisoned => Some(root),
            Ok(_) | Err(_) => {
                log::debug!("DomBuilder: no single completed value to finish");
                None
            }
        }
    }

    fn push(&mut self, value: Value) {
        log::trace!("DomBuilder: push {:?}", value.kind());
        self.stack.push(Slot::Value(value));
    }

    fn open(&mut self) {
        self.stack.push(Slot::Marker);
    }

    /// Pops slots down to and including the nearest marker, returning the
    /// popped values top first.
    fn drain_to_marker(&mut self) -> Vec<Value> {
        let mut popped = Vec::new();
        loop {
            match self.stack.pop() {
                Some(Slot::Value(v)) => popped.push(v),
                Some(Slot::Marker) => break,
                None => {
                    self.poisoned = true;
                    break;
                }
            }
        }
        popped
    }
}

impl EventConsumer for DomBuilder {
    type Output = Value;

    fn string_value(&mut self, value: &str) {
        self.push(Value::String(String::from(value)));
    }

    fn integer_value(&mut self, value: i64) {
        self.push(Value::Integer(value));
    }

    fn float_value(&mut self, value: f64) {
        self.push(Value::Float(value));
    }

    fn boolean_value(&mut self, value: bool) {
        self.push(Value::Boolean(value));
    }

    fn null_value(&mut self) {
        self.push(Value::Null);
    }

    fn begin_array(&mut self) {
        self.open();
    }

    fn end_array(&mut self) {
        let mut elements = self.drain_to_marker();
        elements.reverse();
        log::trace!("DomBuilder: close array of {}", elements.len());
        self.push(Value::Array(elements));
    }

    fn begin_object(&mut self) {
        self.open();
    }

    fn end_object(&mut self) {
        let popped = self.drain_to_marker();
        if popped.len() % 2 != 0 {
            self.poisoned = true;
        }
        let mut map = Map::with_capacity(popped.len() / 2);
        // Top first means value before key; walk pairs from the bottom up to
        // insert in source order.
        let mut pairs = popped.into_iter().rev();
        while let (Some(key), Some(value)) = (pairs.next(), pairs.next()) {
            match key {
                Value::String(key) => {
                    map.insert(key, value);
                }
                _ => self.poisoned = true,
            }
        }
        log::trace!("DomBuilder: close object of {}", map.len());
        self.push(Value::Object(map));
    }

    /// Returns the finished tree, or [`Value::Null`] if the events did not
    /// form exactly one value; use [`DomBuilder::finish`] to tell the two
    /// apart.
    fn result(&mut self) -> Value {
        let finished = self.finish();
        debug_assert!(finished.is_some(), "event stream did not form one value");
        finished.unwrap_or_default()
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.poisoned = false;
    }
}
