//! Per-cycle event accumulation and alert resolution.

use std::sync::Arc;

use helm_types::{Alert, EventType};
use tracing::{debug, trace};

use crate::context::ResolveContext;
use crate::error::EventsError;
use crate::name::EventName;
use crate::record::EventRecord;
use crate::registry::{AlertSource, EventRegistry};

/// The per-cycle accumulator and state machine.
///
/// Owned and driven by the control-loop thread. Each cycle the caller adds
/// every condition that is currently true, resolves the alert sets it cares
/// about, and calls [`clear`](Events::clear) exactly once at the boundary.
/// Interleaving a cycle's add→resolve→clear sequence across threads is not
/// supported; confine the accumulator or wrap the whole sequence in one
/// mutual-exclusion region.
///
/// Persistence counters live in a fixed arena indexed by `EventName`
/// discriminant, allocated once at construction, so steady-state operation
/// allocates only the resolved alert vector.
#[derive(Clone, Debug)]
pub struct Events {
    registry: Arc<EventRegistry>,
    /// Fixed control-loop period, seconds.
    cycle_dt: f64,
    /// Events reported this cycle, in report order, duplicates preserved.
    active: Vec<EventName>,
    /// Events re-asserted at every cycle boundary without being re-reported.
    persistent: Vec<EventName>,
    /// Consecutive prior cycles each event was active.
    counters: Vec<u32>,
    /// Completed cycle boundaries.
    cycle: u64,
}

impl Events {
    pub fn new(registry: Arc<EventRegistry>, cycle_dt: f64) -> Self {
        debug!(
            events = registry.len(),
            cycle_dt, "event accumulator initialized"
        );
        Self {
            registry,
            cycle_dt,
            active: Vec::new(),
            persistent: Vec::new(),
            counters: vec![0; EventName::COUNT],
            cycle: 0,
        }
    }

    /// Events reported this cycle, in report order.
    pub fn names(&self) -> &[EventName] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn contains(&self, name: EventName) -> bool {
        self.active.contains(&name)
    }

    /// Consecutive prior cycles `name` was active. The current cycle is not
    /// included until [`clear`](Events::clear) folds it in.
    pub fn persistence_count(&self, name: EventName) -> u32 {
        self.counters[name as usize]
    }

    /// Completed cycle boundaries since construction. Lets integration code
    /// assert the one-`clear`-per-cycle discipline.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Report `name` as active this cycle. Duplicate reports are kept:
    /// multiplicity is part of the contract and survives serialization.
    pub fn add(&mut self, name: EventName) {
        self.active.push(name);
    }

    /// Report `name` as active this cycle and every following cycle, without
    /// further reports.
    pub fn add_persistent(&mut self, name: EventName) {
        self.persistent.push(name);
        self.active.push(name);
    }

    /// Cycle boundary. Folds this cycle's activity into the persistence
    /// counters, then resets the active list to the persistent events.
    ///
    /// Must run exactly once per cycle, after the cycle's resolution
    /// queries and before the next cycle's reports.
    pub fn clear(&mut self) {
        for name in EventName::ALL {
            let slot = &mut self.counters[name as usize];
            if self.active.contains(&name) {
                *slot = slot.saturating_add(1);
            } else {
                *slot = 0;
            }
        }
        self.active = self.persistent.clone();
        self.cycle += 1;
        trace!(cycle = self.cycle, carried = self.active.len(), "cycle boundary");
    }

    /// Whether any active event declares `event_type`.
    pub fn any(&self, event_type: EventType) -> bool {
        self.active.iter().any(|&name| {
            self.registry
                .get(name)
                .is_some_and(|entry| entry.declares(event_type))
        })
    }

    /// Resolve the alerts for the requested event types.
    ///
    /// Walks the active list in report order and, per event, the requested
    /// types in request order. Each candidate is materialized (fixed alerts
    /// cloned, builders invoked with `ctx`), then gated: it surfaces only
    /// once the event has been continuously present for its creation delay,
    /// counting the current cycle. Surfaced alerts carry the diagnostic
    /// label and resolved event type.
    ///
    /// Events without a registry entry contribute nothing. A builder error
    /// aborts resolution; an empty result is not an error.
    pub fn resolve(
        &self,
        event_types: &[EventType],
        ctx: &ResolveContext,
    ) -> Result<Vec<Alert>, EventsError> {
        let mut alerts = Vec::new();
        for &name in &self.active {
            let Some(entry) = self.registry.get(name) else {
                continue;
            };
            for &event_type in event_types {
                let Some(source) = entry.get(event_type) else {
                    continue;
                };
                let mut alert = match source {
                    AlertSource::Fixed(alert) => alert.clone(),
                    AlertSource::Builder(build) => build(ctx)?,
                };

                let present_for =
                    self.cycle_dt * f64::from(self.counters[name as usize] + 1);
                if present_for < alert.creation_delay {
                    trace!(
                        event = name.as_str(),
                        event_type = event_type.as_str(),
                        present_for,
                        creation_delay = alert.creation_delay,
                        "alert held back by creation delay"
                    );
                    continue;
                }

                alert.label = format!("{}/{}", name.as_str(), event_type.as_str());
                alert.event_type = Some(event_type);
                alerts.push(alert);
            }
        }
        Ok(alerts)
    }

    /// One record per active occurrence, flags derived from the registry.
    pub fn to_records(&self) -> Vec<EventRecord> {
        self.active
            .iter()
            .map(|&name| {
                let mut record = EventRecord::new(name);
                if let Some(entry) = self.registry.get(name) {
                    for event_type in entry.event_types() {
                        record.set(event_type);
                    }
                }
                record
            })
            .collect()
    }

    /// Ingest records produced by a peer. Only the identifiers matter; the
    /// flags are re-derived from this side's registry at resolution.
    pub fn add_from_records(&mut self, records: &[EventRecord]) {
        for record in records {
            self.active.push(record.name);
        }
    }
}
