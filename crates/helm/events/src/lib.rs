//! # helm-events
//!
//! The alert-arbitration engine of the Helm vehicle-control supervisor.
//!
//! Once per fixed control cycle, upstream subsystems (driver monitoring,
//! vehicle-state checks, planning, hardware health) report the conditions
//! that are currently true. This crate accumulates those reports, debounces
//! them against each alert's creation delay, and resolves them into the
//! notifications and state-transition tags the supervisor acts on.
//!
//! The cycle protocol, driven by the control-loop thread:
//!
//! ```text
//! events.add(...)            // once per condition true this cycle
//! events.resolve(...)        // per relevant set of EventType tags
//! events.clear()             // exactly once, at the cycle boundary
//! ```
//!
//! - [`Events`] — the per-cycle accumulator and state machine.
//! - [`EventName`] — the finite catalog of reportable conditions.
//! - [`EventRegistry`] — read-only table mapping each event to the alerts
//!   it produces per [`EventType`](helm_types::EventType); see
//!   [`EventRegistry::builtin`] for the shipped catalog.
//! - [`ResolveContext`] — the live snapshot dynamic alert builders read.
//! - [`EventRecord`] — the wire format crossing the supervisor's IPC
//!   boundary.

pub mod context;
pub mod error;
pub mod events;
pub mod name;
pub mod record;
pub mod registry;

mod catalog;

pub use context::{LiveSignals, ResolveContext, VehicleParams};
pub use error::EventsError;
pub use events::Events;
pub use name::EventName;
pub use record::EventRecord;
pub use registry::{AlertBuilder, AlertSource, EventEntry, EventRegistry};
