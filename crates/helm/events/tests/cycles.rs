//! Full-cycle scenarios against the shipped catalog: the add → resolve →
//! clear protocol exactly as the control loop drives it.

use std::sync::Arc;

use helm_events::{EventName, EventRecord, EventRegistry, Events, LiveSignals, ResolveContext, VehicleParams};
use helm_types::{highest, AudibleAlert, EventType, Priority};

/// 100 Hz control loop.
const DT: f64 = 0.01;

fn context() -> ResolveContext {
    ResolveContext {
        params: VehicleParams {
            min_steer_speed: 12.5,
            calibration_min_speed: 6.7,
            car_model: "HYUNDAI SONATA 2020".into(),
            brand: "hyundai".into(),
        },
        signals: LiveSignals {
            calibration_percent: 80.0,
            gps_integrated: false,
            joystick_axes: vec![],
            lane_change_countdown: 0.0,
        },
        metric: true,
    }
}

fn engine() -> Events {
    Events::new(Arc::new(EventRegistry::builtin()), DT)
}

#[test]
fn one_cycle_of_a_distracted_driver() {
    let mut events = engine();
    let ctx = context();

    events.add(EventName::PromptDriverDistracted);
    events.add(EventName::SteerSaturated);

    assert!(events.any(EventType::Warning));
    assert!(!events.any(EventType::ImmediateDisable));

    let warnings = events.resolve(&[EventType::Warning], &ctx).unwrap();
    assert_eq!(warnings.len(), 2);

    // Arbitration: the distraction prompt (Mid) wins over the steering
    // saturation warning (Low).
    let winner = highest(&warnings).unwrap();
    assert_eq!(winner.label, "promptDriverDistracted/warning");
    assert_eq!(winner.priority, Priority::Mid);

    events.clear();
    assert!(events.is_empty());
}

#[test]
fn disable_chain_outranks_everything() {
    let mut events = engine();
    let ctx = context();

    events.add(EventName::Overheat);
    events.add(EventName::CanError);

    let alerts = events
        .resolve(
            &[EventType::SoftDisable, EventType::ImmediateDisable],
            &ctx,
        )
        .unwrap();

    let winner = highest(&alerts).unwrap();
    assert_eq!(winner.label, "canError/immediateDisable");
    assert_eq!(winner.priority, Priority::Highest);
}

#[test]
fn engagement_chime_resolves_for_enable() {
    let mut events = engine();
    let ctx = context();

    events.add(EventName::ButtonEnable);
    let alerts = events.resolve(&[EventType::Enable], &ctx).unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].audible, AudibleAlert::ChimeEngage);
    assert!(alerts[0].line1.is_empty());
}

#[test]
fn transient_warning_disappears_next_cycle() {
    let mut events = engine();
    let ctx = context();

    // Cycle 1: the event is reported; zero creation delay surfaces at once.
    events.add(EventName::SteerSaturated);
    let alerts = events.resolve(&[EventType::Warning], &ctx).unwrap();
    assert_eq!(alerts.len(), 1);
    events.clear();

    // Cycle 2: no report, no alert, counter back at zero.
    let alerts = events.resolve(&[EventType::Warning], &ctx).unwrap();
    assert!(alerts.is_empty());
    assert_eq!(events.persistence_count(EventName::SteerSaturated), 0);
}

#[test]
fn startup_banner_sticks_as_persistent() {
    let mut events = engine();
    let ctx = context();

    events.add_persistent(EventName::StartupNoControl);
    for _ in 0..500 {
        let alerts = events.resolve(&[EventType::Permanent], &ctx).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].label, "startupNoControl/permanent");
        events.clear();
    }
}

#[test]
fn gps_outage_surfaces_after_five_minutes() {
    let mut events = engine();
    let ctx = context();

    // 300 s at 100 Hz: cycles 1..=29999 stay silent, cycle 30000 surfaces.
    for cycle in 1..=30_000u32 {
        events.add(EventName::NoGps);
        let alerts = events.resolve(&[EventType::Permanent], &ctx).unwrap();
        if cycle < 30_000 {
            assert!(alerts.is_empty(), "surfaced early at cycle {cycle}");
        } else {
            assert_eq!(alerts.len(), 1, "missing at cycle {cycle}");
            assert_eq!(alerts[0].label, "noGps/permanent");
        }
        events.clear();
    }
}

#[test]
fn door_open_debounce_rides_out_a_flicker() {
    let mut events = engine();
    let ctx = context();

    // 0.5 s delay at 100 Hz: 50 cycles of continuous presence required.
    for _ in 1..50 {
        events.add(EventName::DoorOpen);
        let alerts = events.resolve(&[EventType::Permanent], &ctx).unwrap();
        assert!(alerts.is_empty());
        events.clear();
    }

    // A one-cycle dropout resets the debounce.
    events.clear();
    for cycle in 1..=50u32 {
        events.add(EventName::DoorOpen);
        let alerts = events.resolve(&[EventType::Permanent], &ctx).unwrap();
        if cycle < 50 {
            assert!(alerts.is_empty(), "surfaced early at cycle {cycle}");
        } else {
            assert_eq!(alerts.len(), 1);
        }
        events.clear();
    }
}

#[test]
fn records_cross_the_wire_as_json() {
    let mut events = engine();

    events.add(EventName::Overheat);
    events.add(EventName::ButtonCancel);

    let records = events.to_records();
    let json = serde_json::to_string(&records).unwrap();
    let parsed: Vec<EventRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, records);

    // Flags reflect the registry entry of each event.
    assert!(parsed[0].is_set(EventType::SoftDisable));
    assert!(parsed[0].is_set(EventType::NoEntry));
    assert!(parsed[1].is_set(EventType::UserDisable));
    assert!(!parsed[1].is_set(EventType::Enable));

    // Ingestion reproduces the active list.
    let mut peer = engine();
    peer.add_from_records(&parsed);
    assert_eq!(peer.names(), events.names());
}

#[test]
fn cycle_counter_tracks_boundaries() {
    let mut events = engine();
    assert_eq!(events.cycle(), 0);

    for expected in 1..=5u64 {
        events.add(EventName::Startup);
        events.clear();
        assert_eq!(events.cycle(), expected);
    }
}
