//! Read-only table mapping events to the alerts they produce.

use std::collections::HashMap;

use helm_types::{Alert, EventType};

use crate::catalog;
use crate::context::ResolveContext;
use crate::error::EventsError;
use crate::name::EventName;

/// Computes an alert from the live context at resolution time.
pub type AlertBuilder = fn(&ResolveContext) -> Result<Alert, EventsError>;

/// What a registry slot holds: either a fixed alert cloned at resolution,
/// or a builder invoked with the live context. Modelled as a variant so
/// resolution is a match, not a runtime type test.
#[derive(Clone, Debug)]
pub enum AlertSource {
    Fixed(Alert),
    Builder(AlertBuilder),
}

/// Per-event registry entry: the event types the event declares and the
/// alert source for each, in declaration order.
///
/// An entry may be empty — the event is then reportable and crosses the
/// wire, but never surfaces an alert.
#[derive(Clone, Debug, Default)]
pub struct EventEntry {
    sources: Vec<(EventType, AlertSource)>,
}

impl EventEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `event_type` with a fixed alert.
    pub fn fixed(mut self, event_type: EventType, alert: Alert) -> Self {
        self.sources.push((event_type, AlertSource::Fixed(alert)));
        self
    }

    /// Declare `event_type` with a context-dependent builder.
    pub fn dynamic(mut self, event_type: EventType, builder: AlertBuilder) -> Self {
        self.sources.push((event_type, AlertSource::Builder(builder)));
        self
    }

    pub fn get(&self, event_type: EventType) -> Option<&AlertSource> {
        self.sources
            .iter()
            .find(|(et, _)| *et == event_type)
            .map(|(_, source)| source)
    }

    pub fn declares(&self, event_type: EventType) -> bool {
        self.sources.iter().any(|(et, _)| *et == event_type)
    }

    /// Declared event types, in declaration order.
    pub fn event_types(&self) -> impl Iterator<Item = EventType> + '_ {
        self.sources.iter().map(|(et, _)| *et)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// The static event-to-alert table.
///
/// Fully constructed before the first resolve and never mutated by the
/// engine afterwards. [`EventRegistry::builtin`] is the shipped catalog;
/// [`EventRegistry::new`] plus [`insert`](EventRegistry::insert) builds a
/// custom table (tests, reduced trims).
#[derive(Clone, Debug, Default)]
pub struct EventRegistry {
    entries: HashMap<EventName, EventEntry>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full shipped catalog.
    pub fn builtin() -> Self {
        catalog::builtin()
    }

    pub fn insert(&mut self, name: EventName, entry: EventEntry) {
        self.entries.insert(name, entry);
    }

    pub fn get(&self, name: EventName) -> Option<&EventEntry> {
        self.entries.get(&name)
    }

    pub fn contains(&self, name: EventName) -> bool {
        self.entries.contains_key(&name)
    }

    pub fn names(&self) -> impl Iterator<Item = EventName> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
