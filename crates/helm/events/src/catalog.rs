//! The shipped event catalog.
//!
//! Inert configuration data: one entry per reportable condition, mapping
//! each declared [`EventType`] to a fixed alert or a builder. Engineered
//! logic lives in the engine, not here.

use helm_types::{Alert, AlertSize, AlertStatus, AudibleAlert, EventType, Priority, VisualAlert};

use crate::context::ResolveContext;
use crate::error::EventsError;
use crate::name::EventName;
use crate::registry::{EventEntry, EventRegistry};

// ---------------------------------------------------------------------------
// Dynamic alert builders
// ---------------------------------------------------------------------------

fn joystick(ctx: &ResolveContext) -> Result<Alert, EventsError> {
    let axes = &ctx.signals.joystick_axes;
    let (gas, steer) = if axes.len() >= 2 {
        (axes[0], axes[1])
    } else {
        (0.0, 0.0)
    };
    Ok(Alert::new(
        "Joystick Mode",
        format!("Gas: {:.0}%, Steer: {:.0}%", gas * 100.0, steer * 100.0),
        AlertStatus::Normal,
        AlertSize::Mid,
        Priority::Low,
        VisualAlert::None,
        AudibleAlert::None,
        0.0,
        0.0,
        0.1,
    ))
}

fn below_steer_speed(ctx: &ResolveContext) -> Result<Alert, EventsError> {
    let speed = ctx.display_speed(ctx.params.min_steer_speed).round();
    Ok(Alert::new(
        "TAKE CONTROL",
        format!("Steer Unavailable Below {} {}", speed, ctx.speed_unit()),
        AlertStatus::UserPrompt,
        AlertSize::Mid,
        Priority::Mid,
        VisualAlert::SteerRequired,
        AudibleAlert::None,
        0.0,
        0.4,
        0.3,
    ))
}

fn calibration_incomplete(ctx: &ResolveContext) -> Result<Alert, EventsError> {
    let speed = ctx.display_speed(ctx.params.calibration_min_speed).round();
    Ok(Alert::new(
        format!(
            "Calibration in Progress: {:.0}%",
            ctx.signals.calibration_percent
        ),
        format!("Drive Above {} {}", speed, ctx.speed_unit()),
        AlertStatus::Normal,
        AlertSize::Mid,
        Priority::Lowest,
        VisualAlert::None,
        AudibleAlert::None,
        0.0,
        0.0,
        0.2,
    ))
}

fn no_gps(ctx: &ResolveContext) -> Result<Alert, EventsError> {
    let detail = if ctx.signals.gps_integrated {
        "If sky is visible, contact support"
    } else {
        "Check GPS antenna placement"
    };
    Ok(Alert::new(
        "Poor GPS reception",
        detail,
        AlertStatus::Normal,
        AlertSize::Mid,
        Priority::Lower,
        VisualAlert::None,
        AudibleAlert::None,
        0.0,
        0.0,
        0.2,
    )
    .with_creation_delay(300.0))
}

fn wrong_car_mode(ctx: &ResolveContext) -> Result<Alert, EventsError> {
    let detail = if ctx.params.brand == "honda" {
        "Main Switch Off"
    } else {
        "Cruise Mode Disabled"
    };
    Ok(Alert::no_entry(detail).with_hud_duration(0.0))
}

fn startup_fuzzy_fingerprint(ctx: &ResolveContext) -> Result<Alert, EventsError> {
    let model: String = ctx.params.car_model.chars().take(40).collect();
    Ok(Alert::new(
        "WARNING: No Exact Match on Car Model",
        format!("Closest Match: {model}"),
        AlertStatus::UserPrompt,
        AlertSize::Mid,
        Priority::Lower,
        VisualAlert::None,
        AudibleAlert::None,
        0.0,
        0.0,
        10.0,
    ))
}

fn auto_lane_change(ctx: &ResolveContext) -> Result<Alert, EventsError> {
    Ok(Alert::new(
        format!(
            "Auto Lane Change Starts in {:.0} Seconds",
            ctx.signals.lane_change_countdown
        ),
        "Monitor Other Vehicles",
        AlertStatus::Normal,
        AlertSize::Mid,
        Priority::Low,
        VisualAlert::None,
        AudibleAlert::ChimeDingRepeat,
        0.1,
        0.1,
        0.1,
    )
    .with_pulse_rate(0.75))
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

pub(crate) fn builtin() -> EventRegistry {
    let mut reg = EventRegistry::new();

    // Events with no alerts: reportable, serialized, never displayed.
    reg.insert(EventName::StockFcw, EventEntry::new());

    // Alerts displayed in all states.

    reg.insert(
        EventName::JoystickDebug,
        EventEntry::new()
            .dynamic(EventType::Warning, joystick)
            .fixed(
                EventType::Permanent,
                Alert::new(
                    "Joystick Mode",
                    "",
                    AlertStatus::Normal,
                    AlertSize::Small,
                    Priority::Lower,
                    VisualAlert::None,
                    AudibleAlert::None,
                    0.0,
                    0.0,
                    0.1,
                ),
            ),
    );

    reg.insert(
        EventName::ControlsInitializing,
        EventEntry::new().fixed(EventType::NoEntry, Alert::no_entry("Controls Initializing")),
    );

    reg.insert(
        EventName::Startup,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::new(
                "Be ready to take over at any time",
                "Always keep hands on wheel and eyes on road",
                AlertStatus::Normal,
                AlertSize::Mid,
                Priority::Lower,
                VisualAlert::None,
                AudibleAlert::ChimeReady,
                1.0,
                0.0,
                10.0,
            ),
        ),
    );

    reg.insert(
        EventName::StartupMaster,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::new(
                "WARNING: This branch is not tested",
                "Always keep hands on wheel and eyes on road",
                AlertStatus::Normal,
                AlertSize::Mid,
                Priority::Lower,
                VisualAlert::None,
                AudibleAlert::ChimeReady,
                1.0,
                0.0,
                10.0,
            ),
        ),
    );

    // Car is recognized, but marked as dashcam only.
    reg.insert(
        EventName::StartupNoControl,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::new(
                "Dashcam mode",
                "Always keep hands on wheel and eyes on road",
                AlertStatus::Normal,
                AlertSize::Mid,
                Priority::Lower,
                VisualAlert::None,
                AudibleAlert::None,
                1.0,
                0.0,
                10.0,
            ),
        ),
    );

    // Car is not recognized.
    reg.insert(
        EventName::StartupNoCar,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::new(
                "Dashcam mode for unsupported car",
                "Always keep hands on wheel and eyes on road",
                AlertStatus::Normal,
                AlertSize::Mid,
                Priority::Lower,
                VisualAlert::None,
                AudibleAlert::None,
                1.0,
                0.0,
                10.0,
            ),
        ),
    );

    // One or two ECUs reported unrecognized firmware versions but the rest
    // matched a single model confidently enough to fingerprint anyway.
    reg.insert(
        EventName::StartupFuzzyFingerprint,
        EventEntry::new().dynamic(EventType::Permanent, startup_fuzzy_fingerprint),
    );

    reg.insert(
        EventName::StartupNoFw,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::new(
                "Car Unrecognized",
                "Check All Connections",
                AlertStatus::UserPrompt,
                AlertSize::Mid,
                Priority::Lower,
                VisualAlert::None,
                AudibleAlert::None,
                0.0,
                0.0,
                10.0,
            ),
        ),
    );

    reg.insert(
        EventName::DashcamMode,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::new(
                "Dashcam Mode",
                "",
                AlertStatus::Normal,
                AlertSize::Small,
                Priority::Lowest,
                VisualAlert::None,
                AudibleAlert::None,
                0.0,
                0.0,
                0.2,
            ),
        ),
    );

    reg.insert(
        EventName::InvalidLkasSetting,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::new(
                "Stock LKAS is turned on",
                "Turn off stock LKAS to engage",
                AlertStatus::Normal,
                AlertSize::Mid,
                Priority::Lower,
                VisualAlert::None,
                AudibleAlert::None,
                0.0,
                0.0,
                0.2,
            ),
        ),
    );

    reg.insert(
        EventName::CommunityFeatureDisallowed,
        // Low, not Lower: must outrank the cruise-fault permanent banners.
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::new(
                "Helm Not Available",
                "Enable Community Features in Settings to Engage",
                AlertStatus::Normal,
                AlertSize::Mid,
                Priority::Low,
                VisualAlert::None,
                AudibleAlert::None,
                0.0,
                0.0,
                0.2,
            ),
        ),
    );

    reg.insert(
        EventName::CarUnrecognized,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::new(
                "Dashcam Mode",
                "Car Unrecognized",
                AlertStatus::Normal,
                AlertSize::Mid,
                Priority::Lowest,
                VisualAlert::None,
                AudibleAlert::None,
                0.0,
                0.0,
                0.2,
            ),
        ),
    );

    reg.insert(
        EventName::StockAeb,
        EventEntry::new()
            .fixed(
                EventType::Permanent,
                Alert::new(
                    "BRAKE!",
                    "Stock AEB: Risk of Collision",
                    AlertStatus::Critical,
                    AlertSize::Full,
                    Priority::Highest,
                    VisualAlert::Fcw,
                    AudibleAlert::None,
                    1.0,
                    2.0,
                    2.0,
                ),
            )
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("Stock AEB: Risk of Collision"),
            ),
    );

    reg.insert(
        EventName::Fcw,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::new(
                "BRAKE!",
                "Risk of Collision",
                AlertStatus::Critical,
                AlertSize::Full,
                Priority::Highest,
                VisualAlert::Fcw,
                AudibleAlert::ChimeWarningRepeat,
                1.0,
                2.0,
                2.0,
            ),
        ),
    );

    reg.insert(
        EventName::Ldw,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::new(
                "TAKE CONTROL",
                "Lane Departure Detected",
                AlertStatus::UserPrompt,
                AlertSize::Mid,
                Priority::Low,
                VisualAlert::Ldw,
                AudibleAlert::ChimeDing,
                0.1,
                2.0,
                3.0,
            ),
        ),
    );

    // Alerts that only display while engaged.

    reg.insert(
        EventName::GasPressed,
        EventEntry::new().fixed(
            EventType::PreEnable,
            Alert::new(
                "Helm will not brake while gas pressed",
                "",
                AlertStatus::Normal,
                AlertSize::Small,
                Priority::Lowest,
                VisualAlert::None,
                AudibleAlert::None,
                0.0,
                0.0,
                0.1,
            )
            .with_creation_delay(1.0),
        ),
    );

    // Learned steer ratio, tire stiffness or angle offset left the sanity
    // range; caused by bad alignment or bad sensor data.
    reg.insert(
        EventName::VehicleModelInvalid,
        EventEntry::new()
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("Vehicle Parameter Identification Failed"),
            )
            .fixed(
                EventType::SoftDisable,
                Alert::soft_disable("Vehicle Parameter Identification Failed"),
            )
            .fixed(
                EventType::Warning,
                Alert::new(
                    "Vehicle Parameter Identification Failed",
                    "",
                    AlertStatus::Normal,
                    AlertSize::Small,
                    Priority::Lowest,
                    VisualAlert::SteerRequired,
                    AudibleAlert::None,
                    0.0,
                    0.0,
                    0.1,
                ),
            ),
    );

    reg.insert(
        EventName::SteerTempUnavailableSilent,
        EventEntry::new().fixed(
            EventType::Warning,
            Alert::new(
                "Steering Temporarily Unavailable",
                "",
                AlertStatus::UserPrompt,
                AlertSize::Small,
                Priority::Low,
                VisualAlert::SteerRequired,
                AudibleAlert::ChimePrompt,
                1.0,
                1.0,
                1.0,
            ),
        ),
    );

    reg.insert(
        EventName::PreDriverDistracted,
        EventEntry::new().fixed(
            EventType::Warning,
            Alert::new(
                "KEEP EYES ON ROAD: Driver Distracted",
                "",
                AlertStatus::Normal,
                AlertSize::Small,
                Priority::Low,
                VisualAlert::None,
                AudibleAlert::ChimeDing,
                0.1,
                0.1,
                0.1,
            ),
        ),
    );

    reg.insert(
        EventName::PromptDriverDistracted,
        EventEntry::new().fixed(
            EventType::Warning,
            Alert::new(
                "KEEP EYES ON ROAD",
                "Driver Distracted",
                AlertStatus::UserPrompt,
                AlertSize::Mid,
                Priority::Mid,
                VisualAlert::SteerRequired,
                AudibleAlert::ChimeDing,
                0.1,
                0.1,
                0.1,
            ),
        ),
    );

    reg.insert(
        EventName::DriverDistracted,
        EventEntry::new().fixed(
            EventType::Warning,
            Alert::new(
                "DISENGAGE IMMEDIATELY",
                "Driver Distracted",
                AlertStatus::Critical,
                AlertSize::Full,
                Priority::High,
                VisualAlert::SteerRequired,
                AudibleAlert::ChimeWarningRepeat,
                0.1,
                0.1,
                0.1,
            ),
        ),
    );

    reg.insert(
        EventName::PreDriverUnresponsive,
        EventEntry::new().fixed(
            EventType::Warning,
            Alert::new(
                "TOUCH STEERING WHEEL: No Face Detected",
                "",
                AlertStatus::Normal,
                AlertSize::Small,
                Priority::Low,
                VisualAlert::SteerRequired,
                AudibleAlert::ChimeDing,
                0.1,
                0.1,
                0.1,
            )
            .with_pulse_rate(0.75),
        ),
    );

    reg.insert(
        EventName::PromptDriverUnresponsive,
        EventEntry::new().fixed(
            EventType::Warning,
            Alert::new(
                "TOUCH STEERING WHEEL",
                "Driver Unresponsive",
                AlertStatus::UserPrompt,
                AlertSize::Mid,
                Priority::Mid,
                VisualAlert::SteerRequired,
                AudibleAlert::ChimeWarning2Repeat,
                0.1,
                0.1,
                0.1,
            ),
        ),
    );

    reg.insert(
        EventName::DriverUnresponsive,
        EventEntry::new().fixed(
            EventType::Warning,
            Alert::new(
                "DISENGAGE IMMEDIATELY",
                "Driver Unresponsive",
                AlertStatus::Critical,
                AlertSize::Full,
                Priority::High,
                VisualAlert::SteerRequired,
                AudibleAlert::ChimeWarningRepeat,
                0.1,
                0.1,
                0.1,
            ),
        ),
    );

    reg.insert(
        EventName::ManualRestart,
        EventEntry::new().fixed(
            EventType::Warning,
            Alert::new(
                "TAKE CONTROL",
                "Resume Driving Manually",
                AlertStatus::UserPrompt,
                AlertSize::Mid,
                Priority::Low,
                VisualAlert::None,
                AudibleAlert::None,
                0.0,
                0.0,
                0.2,
            ),
        ),
    );

    reg.insert(
        EventName::ResumeRequired,
        EventEntry::new().fixed(
            EventType::Warning,
            Alert::new(
                "STOPPED",
                "Press Resume to Move",
                AlertStatus::UserPrompt,
                AlertSize::Mid,
                Priority::Low,
                VisualAlert::None,
                AudibleAlert::None,
                0.0,
                0.0,
                0.2,
            ),
        ),
    );

    reg.insert(
        EventName::BelowSteerSpeed,
        EventEntry::new().dynamic(EventType::Warning, below_steer_speed),
    );

    reg.insert(
        EventName::PreLaneChangeLeft,
        EventEntry::new().fixed(
            EventType::Warning,
            Alert::new(
                "Steer Left to Start Lane Change Once Safe",
                "",
                AlertStatus::Normal,
                AlertSize::Mid,
                Priority::Low,
                VisualAlert::None,
                AudibleAlert::None,
                0.0,
                0.1,
                0.1,
            )
            .with_pulse_rate(0.75),
        ),
    );

    reg.insert(
        EventName::PreLaneChangeRight,
        EventEntry::new().fixed(
            EventType::Warning,
            Alert::new(
                "Steer Right to Start Lane Change Once Safe",
                "",
                AlertStatus::Normal,
                AlertSize::Mid,
                Priority::Low,
                VisualAlert::None,
                AudibleAlert::None,
                0.0,
                0.1,
                0.1,
            )
            .with_pulse_rate(0.75),
        ),
    );

    reg.insert(
        EventName::LaneChangeBlocked,
        EventEntry::new().fixed(
            EventType::Warning,
            Alert::new(
                "Car Detected in Blindspot",
                "",
                AlertStatus::UserPrompt,
                AlertSize::Mid,
                Priority::Low,
                VisualAlert::None,
                AudibleAlert::ChimeDingRepeat,
                0.1,
                0.1,
                0.1,
            ),
        ),
    );

    reg.insert(
        EventName::LaneChange,
        EventEntry::new().fixed(
            EventType::Warning,
            Alert::new(
                "Changing Lanes",
                "",
                AlertStatus::Normal,
                AlertSize::Mid,
                Priority::Low,
                VisualAlert::None,
                AudibleAlert::None,
                0.0,
                0.1,
                0.1,
            ),
        ),
    );

    reg.insert(
        EventName::SteerSaturated,
        EventEntry::new().fixed(
            EventType::Warning,
            Alert::new(
                "TAKE CONTROL",
                "Turn Exceeds Steering Limit",
                AlertStatus::UserPrompt,
                AlertSize::Mid,
                Priority::Low,
                VisualAlert::SteerRequired,
                AudibleAlert::ChimePrompt,
                1.0,
                1.0,
                1.0,
            ),
        ),
    );

    // Fan driven above 50% but not rotating.
    reg.insert(
        EventName::FanMalfunction,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::permanent("Fan Malfunction", "Contact Support", 0.2),
        ),
    );

    // Camera frames arriving at an unstable rate.
    reg.insert(
        EventName::CameraMalfunction,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::permanent("Camera Malfunction", "Contact Support", 0.2),
        ),
    );

    reg.insert(
        EventName::GpsMalfunction,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::permanent("GPS Malfunction", "Contact Support", 0.2),
        ),
    );

    // Localizer resetting to the GPS position more often than expected.
    reg.insert(
        EventName::LocalizerMalfunction,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::permanent("Sensor Malfunction", "Contact Support", 0.2),
        ),
    );

    reg.insert(
        EventName::TurningIndicatorOn,
        EventEntry::new().fixed(
            EventType::Warning,
            Alert::new(
                "Hold Steering Wheel While Turn Signal Is On",
                "",
                AlertStatus::UserPrompt,
                AlertSize::Mid,
                Priority::Mid,
                VisualAlert::None,
                AudibleAlert::None,
                0.0,
                0.1,
                0.2,
            ),
        ),
    );

    reg.insert(
        EventName::LkasButtonOff,
        EventEntry::new().fixed(
            EventType::Warning,
            Alert::new(
                "Check LKAS Button on the Car",
                "",
                AlertStatus::UserPrompt,
                AlertSize::Mid,
                Priority::High,
                VisualAlert::SteerRequired,
                AudibleAlert::None,
                0.0,
                0.1,
                0.2,
            ),
        ),
    );

    reg.insert(
        EventName::AutoLaneChange,
        EventEntry::new().dynamic(EventType::Warning, auto_lane_change),
    );

    // Events that affect control-state transitions.

    reg.insert(
        EventName::PcmEnable,
        EventEntry::new().fixed(
            EventType::Enable,
            Alert::engagement(AudibleAlert::ChimeEngage),
        ),
    );

    reg.insert(
        EventName::ButtonEnable,
        EventEntry::new().fixed(
            EventType::Enable,
            Alert::engagement(AudibleAlert::ChimeEngage),
        ),
    );

    reg.insert(
        EventName::PcmDisable,
        EventEntry::new().fixed(
            EventType::UserDisable,
            Alert::engagement(AudibleAlert::ChimeDisengage),
        ),
    );

    reg.insert(
        EventName::ButtonCancel,
        EventEntry::new().fixed(
            EventType::UserDisable,
            Alert::engagement(AudibleAlert::ChimeDisengage),
        ),
    );

    reg.insert(
        EventName::BrakeHold,
        EventEntry::new()
            .fixed(
                EventType::UserDisable,
                Alert::engagement(AudibleAlert::ChimeDisengage),
            )
            .fixed(EventType::NoEntry, Alert::no_entry("Brake Hold Active")),
    );

    reg.insert(
        EventName::ParkBrake,
        EventEntry::new()
            .fixed(
                EventType::UserDisable,
                Alert::engagement(AudibleAlert::ChimeDisengage),
            )
            .fixed(EventType::NoEntry, Alert::no_entry("Park Brake Engaged")),
    );

    reg.insert(
        EventName::PedalPressed,
        EventEntry::new()
            .fixed(
                EventType::UserDisable,
                Alert::engagement(AudibleAlert::ChimeDisengage),
            )
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("Pedal Pressed During Attempt")
                    .with_visual(VisualAlert::BrakePressed),
            ),
    );

    reg.insert(
        EventName::WrongCarMode,
        EventEntry::new()
            .fixed(
                EventType::UserDisable,
                Alert::engagement(AudibleAlert::ChimeDisengage),
            )
            .dynamic(EventType::NoEntry, wrong_car_mode),
    );

    reg.insert(
        EventName::WrongCruiseMode,
        EventEntry::new()
            .fixed(
                EventType::UserDisable,
                Alert::engagement(AudibleAlert::ChimeDisengage),
            )
            .fixed(EventType::NoEntry, Alert::no_entry("Enable Adaptive Cruise")),
    );

    reg.insert(
        EventName::SteerTempUnavailable,
        EventEntry::new()
            .fixed(
                EventType::Warning,
                Alert::new(
                    "TAKE CONTROL",
                    "Steering Temporarily Unavailable",
                    AlertStatus::UserPrompt,
                    AlertSize::Mid,
                    Priority::Low,
                    VisualAlert::SteerRequired,
                    AudibleAlert::None,
                    0.0,
                    0.0,
                    0.2,
                ),
            )
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("Steering Temporarily Unavailable").with_hud_duration(0.0),
            ),
    );

    reg.insert(
        EventName::OutOfSpace,
        EventEntry::new()
            .fixed(
                EventType::Permanent,
                Alert::new(
                    "Out of Storage",
                    "",
                    AlertStatus::Normal,
                    AlertSize::Small,
                    Priority::Lower,
                    VisualAlert::None,
                    AudibleAlert::None,
                    0.0,
                    0.0,
                    0.2,
                ),
            )
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("Out of Storage Space").with_hud_duration(0.0),
            ),
    );

    reg.insert(
        EventName::BelowEngageSpeed,
        EventEntry::new().fixed(EventType::NoEntry, Alert::no_entry("Speed Too Low")),
    );

    reg.insert(
        EventName::SensorDataInvalid,
        EventEntry::new()
            .fixed(
                EventType::Permanent,
                Alert::new(
                    "No Data from Device Sensors",
                    "Reboot your Device",
                    AlertStatus::Normal,
                    AlertSize::Mid,
                    Priority::Lower,
                    VisualAlert::None,
                    AudibleAlert::None,
                    0.0,
                    0.0,
                    0.2,
                )
                .with_creation_delay(1.0),
            )
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("No Data from Device Sensors"),
            ),
    );

    reg.insert(
        EventName::NoGps,
        EventEntry::new().dynamic(EventType::Permanent, no_gps),
    );

    reg.insert(
        EventName::SoundsUnavailable,
        EventEntry::new()
            .fixed(
                EventType::Permanent,
                Alert::permanent("Speaker not found", "Reboot your Device", 0.2),
            )
            .fixed(EventType::NoEntry, Alert::no_entry("Speaker not found")),
    );

    reg.insert(
        EventName::TooDistracted,
        EventEntry::new().fixed(
            EventType::NoEntry,
            Alert::no_entry("Distraction Level Too High"),
        ),
    );

    reg.insert(
        EventName::Overheat,
        EventEntry::new()
            .fixed(
                EventType::Permanent,
                Alert::new(
                    "System Overheated",
                    "",
                    AlertStatus::Normal,
                    AlertSize::Small,
                    Priority::Lower,
                    VisualAlert::None,
                    AudibleAlert::None,
                    0.0,
                    0.0,
                    0.2,
                ),
            )
            .fixed(EventType::SoftDisable, Alert::soft_disable("System Overheated"))
            .fixed(EventType::NoEntry, Alert::no_entry("System Overheated")),
    );

    reg.insert(
        EventName::WrongGear,
        EventEntry::new()
            .fixed(
                EventType::UserDisable,
                Alert::engagement(AudibleAlert::ChimeDisengage),
            )
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("Shift Gear to Drive")
                    .with_audible(AudibleAlert::ChimeGear)
                    .with_sound_duration(3.0),
            ),
    );

    // Calibration angles outside the acceptable range; usually requires
    // remounting the device pointed straight and level.
    reg.insert(
        EventName::CalibrationInvalid,
        EventEntry::new()
            .fixed(
                EventType::Permanent,
                Alert::permanent("Calibration Invalid", "Remount Device and Recalibrate", 0.2),
            )
            .fixed(
                EventType::SoftDisable,
                Alert::soft_disable("Calibration Invalid: Remount Device & Recalibrate"),
            )
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("Calibration Invalid: Remount Device & Recalibrate"),
            ),
    );

    reg.insert(
        EventName::CalibrationIncomplete,
        EventEntry::new()
            .dynamic(EventType::Permanent, calibration_incomplete)
            .fixed(
                EventType::SoftDisable,
                Alert::soft_disable("Calibration in Progress"),
            )
            .fixed(EventType::NoEntry, Alert::no_entry("Calibration in Progress")),
    );

    reg.insert(
        EventName::DoorOpen,
        EventEntry::new()
            .fixed(
                EventType::Permanent,
                Alert::new(
                    "Door Open",
                    "",
                    AlertStatus::Normal,
                    AlertSize::Full,
                    Priority::Lowest,
                    VisualAlert::None,
                    AudibleAlert::None,
                    0.0,
                    0.0,
                    0.2,
                )
                .with_creation_delay(0.5),
            )
            .fixed(
                EventType::UserDisable,
                Alert::engagement(AudibleAlert::ChimeDisengage),
            )
            .fixed(EventType::NoEntry, Alert::no_entry("Door Open")),
    );

    reg.insert(
        EventName::SeatbeltNotLatched,
        EventEntry::new()
            .fixed(
                EventType::Permanent,
                Alert::new(
                    "Fasten Seatbelt",
                    "",
                    AlertStatus::Normal,
                    AlertSize::Full,
                    Priority::Lowest,
                    VisualAlert::None,
                    AudibleAlert::None,
                    0.0,
                    0.0,
                    0.2,
                )
                .with_creation_delay(0.5),
            )
            .fixed(EventType::SoftDisable, Alert::soft_disable("Seatbelt Unlatched"))
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("Seatbelt Unlatched")
                    .with_audible(AudibleAlert::ChimeSeatbelt)
                    .with_sound_duration(3.0),
            ),
    );

    reg.insert(
        EventName::EspDisabled,
        EventEntry::new()
            .fixed(EventType::SoftDisable, Alert::soft_disable("ESP Off"))
            .fixed(EventType::NoEntry, Alert::no_entry("ESP Off")),
    );

    reg.insert(
        EventName::LowBattery,
        EventEntry::new()
            .fixed(EventType::SoftDisable, Alert::soft_disable("Low Battery"))
            .fixed(EventType::NoEntry, Alert::no_entry("Low Battery")),
    );

    // A supervisor process stopped broadcasting on schedule.
    reg.insert(
        EventName::CommIssue,
        EventEntry::new()
            .fixed(
                EventType::SoftDisable,
                Alert::soft_disable("Communication Issue between Processes"),
            )
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("Communication Issue between Processes")
                    .with_audible(AudibleAlert::ChimeDisengage),
            ),
    );

    reg.insert(
        EventName::ProcessNotRunning,
        EventEntry::new().fixed(
            EventType::NoEntry,
            Alert::no_entry("System Malfunction: Reboot Your Device")
                .with_audible(AudibleAlert::ChimeDisengage),
        ),
    );

    reg.insert(
        EventName::RadarFault,
        EventEntry::new()
            .fixed(
                EventType::SoftDisable,
                Alert::soft_disable("Radar Error: Restart the Car"),
            )
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("Radar Error: Restart the Car"),
            ),
    );

    // Over 20% of camera frames dropped by the model runner.
    reg.insert(
        EventName::ModelLagging,
        EventEntry::new()
            .fixed(EventType::SoftDisable, Alert::soft_disable("Driving model lagging"))
            .fixed(EventType::NoEntry, Alert::no_entry("Driving model lagging")),
    );

    // The model is uncertain about ego velocity while moving; treated as a
    // heuristic for a scene it does not understand.
    reg.insert(
        EventName::PosenetInvalid,
        EventEntry::new()
            .fixed(EventType::SoftDisable, Alert::soft_disable("Model Output Uncertain"))
            .fixed(EventType::NoEntry, Alert::no_entry("Model Output Uncertain")),
    );

    // Acceleration above ~4G: the device likely fell off the windshield.
    reg.insert(
        EventName::DeviceFalling,
        EventEntry::new()
            .fixed(EventType::SoftDisable, Alert::soft_disable("Device Fell Off Mount"))
            .fixed(EventType::NoEntry, Alert::no_entry("Device Fell Off Mount")),
    );

    reg.insert(
        EventName::LowMemory,
        EventEntry::new()
            .fixed(
                EventType::SoftDisable,
                Alert::soft_disable("Low Memory: Reboot Your Device"),
            )
            .fixed(
                EventType::Permanent,
                Alert::permanent("Low Memory", "Reboot your Device", 0.2),
            )
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("Low Memory: Reboot Your Device")
                    .with_audible(AudibleAlert::ChimeDisengage),
            ),
    );

    reg.insert(
        EventName::HighCpuUsage,
        EventEntry::new().fixed(
            EventType::NoEntry,
            Alert::no_entry("System Malfunction: Reboot Your Device")
                .with_audible(AudibleAlert::ChimeDisengage),
        ),
    );

    reg.insert(
        EventName::AccFaulted,
        EventEntry::new()
            .fixed(
                EventType::ImmediateDisable,
                Alert::immediate_disable("Cruise Faulted"),
            )
            .fixed(EventType::Permanent, Alert::permanent("Cruise Faulted", "", 0.2))
            .fixed(EventType::NoEntry, Alert::no_entry("Cruise Faulted")),
    );

    reg.insert(
        EventName::ControlsMismatch,
        EventEntry::new().fixed(
            EventType::ImmediateDisable,
            Alert::immediate_disable("Controls Mismatch"),
        ),
    );

    reg.insert(
        EventName::RoadCameraError,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::permanent("Road Camera Error", "", 10.0),
        ),
    );

    reg.insert(
        EventName::DriverCameraError,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::permanent("Driver Camera Error", "", 10.0),
        ),
    );

    reg.insert(
        EventName::WideRoadCameraError,
        EventEntry::new().fixed(
            EventType::Permanent,
            Alert::permanent("Wide Road Camera Error", "", 10.0),
        ),
    );

    // The USB stack can wedge and drop the interface-board connection.
    reg.insert(
        EventName::UsbError,
        EventEntry::new()
            .fixed(
                EventType::SoftDisable,
                Alert::soft_disable("USB Error: Reboot Your Device"),
            )
            .fixed(
                EventType::Permanent,
                Alert::permanent("USB Error: Reboot Your Device", "", 0.2),
            )
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("USB Error: Reboot Your Device"),
            ),
    );

    // No CAN data at all, or some messages off their expected frequency.
    reg.insert(
        EventName::CanError,
        EventEntry::new()
            .fixed(
                EventType::ImmediateDisable,
                Alert::immediate_disable("CAN Error: Check Connections"),
            )
            .fixed(
                EventType::Permanent,
                Alert::new(
                    "CAN Error: Check Connections",
                    "",
                    AlertStatus::Normal,
                    AlertSize::Small,
                    Priority::Low,
                    VisualAlert::None,
                    AudibleAlert::None,
                    0.0,
                    0.0,
                    0.2,
                )
                .with_creation_delay(1.0),
            )
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("CAN Error: Check Connections"),
            ),
    );

    reg.insert(
        EventName::SteerUnavailable,
        EventEntry::new()
            .fixed(
                EventType::ImmediateDisable,
                Alert::immediate_disable("LKAS Fault: Restart the Car"),
            )
            .fixed(
                EventType::Permanent,
                Alert::new(
                    "LKAS Fault: Restart the car to engage",
                    "",
                    AlertStatus::Normal,
                    AlertSize::Small,
                    Priority::Lower,
                    VisualAlert::None,
                    AudibleAlert::None,
                    0.0,
                    0.0,
                    0.2,
                ),
            )
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("LKAS Fault: Restart the Car"),
            ),
    );

    reg.insert(
        EventName::BrakeUnavailable,
        EventEntry::new()
            .fixed(
                EventType::ImmediateDisable,
                Alert::immediate_disable("Cruise Fault: Restart the Car"),
            )
            .fixed(
                EventType::Permanent,
                Alert::new(
                    "Cruise Fault: Restart the car to engage",
                    "",
                    AlertStatus::Normal,
                    AlertSize::Small,
                    Priority::Lower,
                    VisualAlert::None,
                    AudibleAlert::None,
                    0.0,
                    0.0,
                    0.2,
                ),
            )
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("Cruise Fault: Restart the Car"),
            ),
    );

    reg.insert(
        EventName::ReverseGear,
        EventEntry::new()
            .fixed(
                EventType::Permanent,
                Alert::new(
                    "Reverse\nGear",
                    "",
                    AlertStatus::Normal,
                    AlertSize::Full,
                    Priority::Lowest,
                    VisualAlert::None,
                    AudibleAlert::None,
                    0.0,
                    0.0,
                    0.2,
                )
                .with_creation_delay(0.5),
            )
            .fixed(
                EventType::UserDisable,
                Alert::engagement(AudibleAlert::ChimeDisengage),
            )
            .fixed(EventType::NoEntry, Alert::no_entry("Reverse Gear")),
    );

    // Stock ACC cancelled on its own; the car is no longer being controlled.
    reg.insert(
        EventName::CruiseDisabled,
        EventEntry::new().fixed(
            EventType::ImmediateDisable,
            Alert::immediate_disable("Cruise Is Off"),
        ),
    );

    // The trajectory optimizer found no feasible solution, or one with an
    // unacceptably high cost.
    reg.insert(
        EventName::PlannerError,
        EventEntry::new()
            .fixed(
                EventType::ImmediateDisable,
                Alert::immediate_disable("Planner Solution Error"),
            )
            .fixed(EventType::NoEntry, Alert::no_entry("Planner Solution Error")),
    );

    // Camera-side messages seen while the harness relay should have
    // isolated the bus.
    reg.insert(
        EventName::RelayMalfunction,
        EventEntry::new()
            .fixed(
                EventType::ImmediateDisable,
                Alert::immediate_disable("Harness Malfunction"),
            )
            .fixed(
                EventType::Permanent,
                Alert::permanent("Harness Malfunction", "Check Hardware", 0.2),
            )
            .fixed(EventType::NoEntry, Alert::no_entry("Harness Malfunction")),
    );

    reg.insert(
        EventName::NoTarget,
        EventEntry::new()
            .fixed(
                EventType::ImmediateDisable,
                Alert::new(
                    "Helm Canceled",
                    "No close lead car",
                    AlertStatus::Normal,
                    AlertSize::Mid,
                    Priority::High,
                    VisualAlert::None,
                    AudibleAlert::ChimeDisengage,
                    0.4,
                    2.0,
                    3.0,
                ),
            )
            .fixed(EventType::NoEntry, Alert::no_entry("No Close Lead Car")),
    );

    reg.insert(
        EventName::SpeedTooLow,
        EventEntry::new().fixed(
            EventType::ImmediateDisable,
            Alert::new(
                "Helm Canceled",
                "Speed too low",
                AlertStatus::Normal,
                AlertSize::Mid,
                Priority::High,
                VisualAlert::None,
                AudibleAlert::ChimeDisengage,
                0.4,
                2.0,
                3.0,
            ),
        ),
    );

    // Faster than most of the training data; model outputs may be
    // unpredictable.
    reg.insert(
        EventName::SpeedTooHigh,
        EventEntry::new()
            .fixed(
                EventType::Warning,
                Alert::new(
                    "Speed Too High",
                    "Model uncertain at this speed",
                    AlertStatus::UserPrompt,
                    AlertSize::Mid,
                    Priority::High,
                    VisualAlert::SteerRequired,
                    AudibleAlert::ChimeWarning2Repeat,
                    2.2,
                    3.0,
                    4.0,
                ),
            )
            .fixed(
                EventType::NoEntry,
                Alert::new(
                    "Speed Too High",
                    "Slow down to engage",
                    AlertStatus::Normal,
                    AlertSize::Mid,
                    Priority::Low,
                    VisualAlert::None,
                    AudibleAlert::ChimeError,
                    0.4,
                    2.0,
                    3.0,
                ),
            ),
    );

    reg.insert(
        EventName::LowSpeedLockout,
        EventEntry::new()
            .fixed(
                EventType::Permanent,
                Alert::new(
                    "Cruise Fault: Restart the car to engage",
                    "",
                    AlertStatus::Normal,
                    AlertSize::Small,
                    Priority::Lower,
                    VisualAlert::None,
                    AudibleAlert::None,
                    0.0,
                    0.0,
                    0.2,
                ),
            )
            .fixed(
                EventType::NoEntry,
                Alert::no_entry("Cruise Fault: Restart the Car"),
            ),
    );

    reg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{LiveSignals, VehicleParams};
    use crate::registry::AlertSource;

    fn test_context() -> ResolveContext {
        ResolveContext {
            params: VehicleParams {
                min_steer_speed: 12.5,
                calibration_min_speed: 6.7,
                car_model: "HYUNDAI SONATA 2020".into(),
                brand: "hyundai".into(),
            },
            signals: LiveSignals {
                calibration_percent: 35.0,
                gps_integrated: true,
                joystick_axes: vec![0.5, -0.25],
                lane_change_countdown: 3.0,
            },
            metric: true,
        }
    }

    #[test]
    fn catalog_covers_every_event_name() {
        let reg = builtin();
        for name in EventName::ALL {
            assert!(reg.contains(name), "missing entry for {name}");
        }
        assert_eq!(reg.len(), EventName::COUNT);
    }

    #[test]
    fn every_builder_is_total_over_the_test_context() {
        let reg = builtin();
        let ctx = test_context();
        for name in EventName::ALL {
            let entry = reg.get(name).unwrap();
            for et in entry.event_types() {
                if let Some(AlertSource::Builder(build)) = entry.get(et) {
                    let alert = build(&ctx).unwrap_or_else(|e| {
                        panic!("builder {name}/{et} failed: {e}")
                    });
                    assert!(alert.creation_delay >= 0.0);
                }
            }
        }
    }

    #[test]
    fn no_gps_debounces_for_five_minutes() {
        let reg = builtin();
        let entry = reg.get(EventName::NoGps).unwrap();
        match entry.get(EventType::Permanent) {
            Some(AlertSource::Builder(build)) => {
                let alert = build(&test_context()).unwrap();
                assert_eq!(alert.creation_delay, 300.0);
                assert_eq!(alert.priority, Priority::Lower);
            }
            other => panic!("unexpected source: {other:?}"),
        }
    }

    #[test]
    fn collision_warnings_have_top_priority() {
        let reg = builtin();
        for name in [EventName::Fcw, EventName::StockAeb] {
            let entry = reg.get(name).unwrap();
            match entry.get(EventType::Permanent) {
                Some(AlertSource::Fixed(alert)) => {
                    assert_eq!(alert.priority, Priority::Highest, "{name}");
                    assert_eq!(alert.status, AlertStatus::Critical, "{name}");
                }
                other => panic!("unexpected source for {name}: {other:?}"),
            }
        }
    }

    #[test]
    fn stock_fcw_declares_nothing() {
        let reg = builtin();
        assert!(reg.get(EventName::StockFcw).unwrap().is_empty());
    }

    #[test]
    fn below_steer_speed_formats_display_units() {
        let metric = below_steer_speed(&test_context()).unwrap();
        assert_eq!(metric.line2, "Steer Unavailable Below 45 km/h");

        let mut ctx = test_context();
        ctx.metric = false;
        let imperial = below_steer_speed(&ctx).unwrap();
        assert_eq!(imperial.line2, "Steer Unavailable Below 28 mph");
    }

    #[test]
    fn calibration_alert_reports_progress() {
        let alert = calibration_incomplete(&test_context()).unwrap();
        assert_eq!(alert.line1, "Calibration in Progress: 35%");
        assert_eq!(alert.line2, "Drive Above 24 km/h");
    }

    #[test]
    fn wrong_car_mode_text_depends_on_brand() {
        let mut ctx = test_context();
        assert_eq!(wrong_car_mode(&ctx).unwrap().line2, "Cruise Mode Disabled");
        ctx.params.brand = "honda".into();
        assert_eq!(wrong_car_mode(&ctx).unwrap().line2, "Main Switch Off");
    }

    #[test]
    fn joystick_defaults_to_zero_without_axes() {
        let mut ctx = test_context();
        ctx.signals.joystick_axes.clear();
        let alert = joystick(&ctx).unwrap();
        assert_eq!(alert.line2, "Gas: 0%, Steer: 0%");

        let alert = joystick(&test_context()).unwrap();
        assert_eq!(alert.line2, "Gas: 50%, Steer: -25%");
    }

    #[test]
    fn fuzzy_fingerprint_truncates_long_models() {
        let mut ctx = test_context();
        ctx.params.car_model = "X".repeat(64);
        let alert = startup_fuzzy_fingerprint(&ctx).unwrap();
        assert_eq!(alert.line2, format!("Closest Match: {}", "X".repeat(40)));
    }
}
