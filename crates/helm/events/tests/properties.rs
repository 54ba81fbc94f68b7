//! Property tests: the debounce gate, counter discipline, and the wire
//! round-trip hold for arbitrary delays, periods, and report sequences.

use std::sync::Arc;

use proptest::prelude::*;

use helm_events::{
    EventName, EventRegistry, Events, EventEntry, LiveSignals, ResolveContext, VehicleParams,
};
use helm_types::{Alert, AlertSize, AlertStatus, AudibleAlert, EventType, Priority, VisualAlert};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn context() -> ResolveContext {
    ResolveContext {
        params: VehicleParams {
            min_steer_speed: 12.5,
            calibration_min_speed: 6.7,
            car_model: "TEST VEHICLE".into(),
            brand: "test".into(),
        },
        signals: LiveSignals {
            calibration_percent: 0.0,
            gps_integrated: false,
            joystick_axes: vec![],
            lane_change_countdown: 0.0,
        },
        metric: true,
    }
}

fn delayed_warning(delay: f64) -> Arc<EventRegistry> {
    let alert = Alert::new(
        "test",
        "",
        AlertStatus::Normal,
        AlertSize::Small,
        Priority::Low,
        VisualAlert::None,
        AudibleAlert::None,
        0.0,
        0.0,
        0.1,
    )
    .with_creation_delay(delay);
    let mut registry = EventRegistry::new();
    registry.insert(
        EventName::SteerSaturated,
        EventEntry::new().fixed(EventType::Warning, alert),
    );
    Arc::new(registry)
}

/// Pick an arbitrary event name.
fn arb_event_name() -> impl Strategy<Value = EventName> {
    (0..EventName::COUNT).prop_map(|i| EventName::ALL[i])
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

proptest! {
    /// With creation delay D = k·T, the alert stays silent for the first
    /// k−1 cycles of continuous presence and surfaces from cycle k on.
    #[test]
    fn debounce_surfaces_exactly_at_threshold(
        gate_cycles in 1u32..120,
        dt in 0.001f64..0.5,
    ) {
        let delay = dt * f64::from(gate_cycles);
        let registry = delayed_warning(delay);
        let mut events = Events::new(registry, dt);
        let ctx = context();

        for cycle in 1..=gate_cycles {
            events.add(EventName::SteerSaturated);
            let alerts = events.resolve(&[EventType::Warning], &ctx).unwrap();
            if cycle < gate_cycles {
                prop_assert!(alerts.is_empty(), "surfaced early at cycle {}", cycle);
            } else {
                prop_assert_eq!(alerts.len(), 1, "missing at cycle {}", cycle);
            }
            events.clear();
        }
    }

    /// However long an event was active, one absent cycle resets its
    /// persistence counter to zero.
    #[test]
    fn one_absent_cycle_resets_the_counter(
        active_cycles in 1u32..200,
        name in arb_event_name(),
    ) {
        let mut events = Events::new(Arc::new(EventRegistry::new()), 0.01);

        for _ in 0..active_cycles {
            events.add(name);
            events.clear();
        }
        prop_assert_eq!(events.persistence_count(name), active_cycles);

        events.clear();
        prop_assert_eq!(events.persistence_count(name), 0);
    }

    /// A persistent event stays active through any number of boundaries.
    #[test]
    fn persistent_events_never_drop(
        boundaries in 1u32..200,
        name in arb_event_name(),
    ) {
        let mut events = Events::new(Arc::new(EventRegistry::builtin()), 0.01);
        events.add_persistent(name);

        for _ in 0..boundaries {
            events.clear();
            prop_assert!(events.contains(name));
        }
        prop_assert_eq!(events.persistence_count(name), boundaries);
    }

    /// Records round-trip the active sequence, order and multiplicity
    /// included, through the serialized wire format.
    #[test]
    fn records_round_trip_any_report_sequence(
        names in proptest::collection::vec(arb_event_name(), 0..24),
    ) {
        let registry = Arc::new(EventRegistry::builtin());
        let mut events = Events::new(registry.clone(), 0.01);
        for &name in &names {
            events.add(name);
        }

        let json = serde_json::to_string(&events.to_records()).unwrap();
        let records: Vec<helm_events::EventRecord> =
            serde_json::from_str(&json).unwrap();

        let mut peer = Events::new(registry, 0.01);
        peer.add_from_records(&records);
        prop_assert_eq!(peer.names(), names.as_slice());
    }
}
