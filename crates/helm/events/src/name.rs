use serde::{Deserialize, Serialize};

/// A reportable condition.
///
/// The catalog is finite and closed: detectors report these tokens, the
/// registry maps them to alerts, and the wire format carries them by name.
/// `EventName::ALL` enumerates every variant in discriminant order, which
/// makes the discriminant a stable arena index for per-event counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventName {
    StockFcw,
    JoystickDebug,
    ControlsInitializing,
    Startup,
    StartupMaster,
    StartupNoControl,
    StartupNoCar,
    StartupFuzzyFingerprint,
    StartupNoFw,
    DashcamMode,
    InvalidLkasSetting,
    CommunityFeatureDisallowed,
    CarUnrecognized,
    StockAeb,
    Fcw,
    Ldw,
    GasPressed,
    VehicleModelInvalid,
    SteerTempUnavailableSilent,
    PreDriverDistracted,
    PromptDriverDistracted,
    DriverDistracted,
    PreDriverUnresponsive,
    PromptDriverUnresponsive,
    DriverUnresponsive,
    ManualRestart,
    ResumeRequired,
    BelowSteerSpeed,
    PreLaneChangeLeft,
    PreLaneChangeRight,
    LaneChangeBlocked,
    LaneChange,
    SteerSaturated,
    FanMalfunction,
    CameraMalfunction,
    GpsMalfunction,
    LocalizerMalfunction,
    TurningIndicatorOn,
    LkasButtonOff,
    AutoLaneChange,
    PcmEnable,
    ButtonEnable,
    PcmDisable,
    ButtonCancel,
    BrakeHold,
    ParkBrake,
    PedalPressed,
    WrongCarMode,
    WrongCruiseMode,
    SteerTempUnavailable,
    OutOfSpace,
    BelowEngageSpeed,
    SensorDataInvalid,
    NoGps,
    SoundsUnavailable,
    TooDistracted,
    Overheat,
    WrongGear,
    CalibrationInvalid,
    CalibrationIncomplete,
    DoorOpen,
    SeatbeltNotLatched,
    EspDisabled,
    LowBattery,
    CommIssue,
    ProcessNotRunning,
    RadarFault,
    ModelLagging,
    PosenetInvalid,
    DeviceFalling,
    LowMemory,
    HighCpuUsage,
    AccFaulted,
    ControlsMismatch,
    RoadCameraError,
    DriverCameraError,
    WideRoadCameraError,
    UsbError,
    CanError,
    SteerUnavailable,
    BrakeUnavailable,
    ReverseGear,
    CruiseDisabled,
    PlannerError,
    RelayMalfunction,
    NoTarget,
    SpeedTooLow,
    SpeedTooHigh,
    LowSpeedLockout,
}

impl EventName {
    /// Every variant, in discriminant order.
    pub const ALL: [EventName; 89] = [
        EventName::StockFcw,
        EventName::JoystickDebug,
        EventName::ControlsInitializing,
        EventName::Startup,
        EventName::StartupMaster,
        EventName::StartupNoControl,
        EventName::StartupNoCar,
        EventName::StartupFuzzyFingerprint,
        EventName::StartupNoFw,
        EventName::DashcamMode,
        EventName::InvalidLkasSetting,
        EventName::CommunityFeatureDisallowed,
        EventName::CarUnrecognized,
        EventName::StockAeb,
        EventName::Fcw,
        EventName::Ldw,
        EventName::GasPressed,
        EventName::VehicleModelInvalid,
        EventName::SteerTempUnavailableSilent,
        EventName::PreDriverDistracted,
        EventName::PromptDriverDistracted,
        EventName::DriverDistracted,
        EventName::PreDriverUnresponsive,
        EventName::PromptDriverUnresponsive,
        EventName::DriverUnresponsive,
        EventName::ManualRestart,
        EventName::ResumeRequired,
        EventName::BelowSteerSpeed,
        EventName::PreLaneChangeLeft,
        EventName::PreLaneChangeRight,
        EventName::LaneChangeBlocked,
        EventName::LaneChange,
        EventName::SteerSaturated,
        EventName::FanMalfunction,
        EventName::CameraMalfunction,
        EventName::GpsMalfunction,
        EventName::LocalizerMalfunction,
        EventName::TurningIndicatorOn,
        EventName::LkasButtonOff,
        EventName::AutoLaneChange,
        EventName::PcmEnable,
        EventName::ButtonEnable,
        EventName::PcmDisable,
        EventName::ButtonCancel,
        EventName::BrakeHold,
        EventName::ParkBrake,
        EventName::PedalPressed,
        EventName::WrongCarMode,
        EventName::WrongCruiseMode,
        EventName::SteerTempUnavailable,
        EventName::OutOfSpace,
        EventName::BelowEngageSpeed,
        EventName::SensorDataInvalid,
        EventName::NoGps,
        EventName::SoundsUnavailable,
        EventName::TooDistracted,
        EventName::Overheat,
        EventName::WrongGear,
        EventName::CalibrationInvalid,
        EventName::CalibrationIncomplete,
        EventName::DoorOpen,
        EventName::SeatbeltNotLatched,
        EventName::EspDisabled,
        EventName::LowBattery,
        EventName::CommIssue,
        EventName::ProcessNotRunning,
        EventName::RadarFault,
        EventName::ModelLagging,
        EventName::PosenetInvalid,
        EventName::DeviceFalling,
        EventName::LowMemory,
        EventName::HighCpuUsage,
        EventName::AccFaulted,
        EventName::ControlsMismatch,
        EventName::RoadCameraError,
        EventName::DriverCameraError,
        EventName::WideRoadCameraError,
        EventName::UsbError,
        EventName::CanError,
        EventName::SteerUnavailable,
        EventName::BrakeUnavailable,
        EventName::ReverseGear,
        EventName::CruiseDisabled,
        EventName::PlannerError,
        EventName::RelayMalfunction,
        EventName::NoTarget,
        EventName::SpeedTooLow,
        EventName::SpeedTooHigh,
        EventName::LowSpeedLockout,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Stable camelCase wire name, also used in diagnostic labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::StockFcw => "stockFcw",
            EventName::JoystickDebug => "joystickDebug",
            EventName::ControlsInitializing => "controlsInitializing",
            EventName::Startup => "startup",
            EventName::StartupMaster => "startupMaster",
            EventName::StartupNoControl => "startupNoControl",
            EventName::StartupNoCar => "startupNoCar",
            EventName::StartupFuzzyFingerprint => "startupFuzzyFingerprint",
            EventName::StartupNoFw => "startupNoFw",
            EventName::DashcamMode => "dashcamMode",
            EventName::InvalidLkasSetting => "invalidLkasSetting",
            EventName::CommunityFeatureDisallowed => "communityFeatureDisallowed",
            EventName::CarUnrecognized => "carUnrecognized",
            EventName::StockAeb => "stockAeb",
            EventName::Fcw => "fcw",
            EventName::Ldw => "ldw",
            EventName::GasPressed => "gasPressed",
            EventName::VehicleModelInvalid => "vehicleModelInvalid",
            EventName::SteerTempUnavailableSilent => "steerTempUnavailableSilent",
            EventName::PreDriverDistracted => "preDriverDistracted",
            EventName::PromptDriverDistracted => "promptDriverDistracted",
            EventName::DriverDistracted => "driverDistracted",
            EventName::PreDriverUnresponsive => "preDriverUnresponsive",
            EventName::PromptDriverUnresponsive => "promptDriverUnresponsive",
            EventName::DriverUnresponsive => "driverUnresponsive",
            EventName::ManualRestart => "manualRestart",
            EventName::ResumeRequired => "resumeRequired",
            EventName::BelowSteerSpeed => "belowSteerSpeed",
            EventName::PreLaneChangeLeft => "preLaneChangeLeft",
            EventName::PreLaneChangeRight => "preLaneChangeRight",
            EventName::LaneChangeBlocked => "laneChangeBlocked",
            EventName::LaneChange => "laneChange",
            EventName::SteerSaturated => "steerSaturated",
            EventName::FanMalfunction => "fanMalfunction",
            EventName::CameraMalfunction => "cameraMalfunction",
            EventName::GpsMalfunction => "gpsMalfunction",
            EventName::LocalizerMalfunction => "localizerMalfunction",
            EventName::TurningIndicatorOn => "turningIndicatorOn",
            EventName::LkasButtonOff => "lkasButtonOff",
            EventName::AutoLaneChange => "autoLaneChange",
            EventName::PcmEnable => "pcmEnable",
            EventName::ButtonEnable => "buttonEnable",
            EventName::PcmDisable => "pcmDisable",
            EventName::ButtonCancel => "buttonCancel",
            EventName::BrakeHold => "brakeHold",
            EventName::ParkBrake => "parkBrake",
            EventName::PedalPressed => "pedalPressed",
            EventName::WrongCarMode => "wrongCarMode",
            EventName::WrongCruiseMode => "wrongCruiseMode",
            EventName::SteerTempUnavailable => "steerTempUnavailable",
            EventName::OutOfSpace => "outOfSpace",
            EventName::BelowEngageSpeed => "belowEngageSpeed",
            EventName::SensorDataInvalid => "sensorDataInvalid",
            EventName::NoGps => "noGps",
            EventName::SoundsUnavailable => "soundsUnavailable",
            EventName::TooDistracted => "tooDistracted",
            EventName::Overheat => "overheat",
            EventName::WrongGear => "wrongGear",
            EventName::CalibrationInvalid => "calibrationInvalid",
            EventName::CalibrationIncomplete => "calibrationIncomplete",
            EventName::DoorOpen => "doorOpen",
            EventName::SeatbeltNotLatched => "seatbeltNotLatched",
            EventName::EspDisabled => "espDisabled",
            EventName::LowBattery => "lowBattery",
            EventName::CommIssue => "commIssue",
            EventName::ProcessNotRunning => "processNotRunning",
            EventName::RadarFault => "radarFault",
            EventName::ModelLagging => "modelLagging",
            EventName::PosenetInvalid => "posenetInvalid",
            EventName::DeviceFalling => "deviceFalling",
            EventName::LowMemory => "lowMemory",
            EventName::HighCpuUsage => "highCpuUsage",
            EventName::AccFaulted => "accFaulted",
            EventName::ControlsMismatch => "controlsMismatch",
            EventName::RoadCameraError => "roadCameraError",
            EventName::DriverCameraError => "driverCameraError",
            EventName::WideRoadCameraError => "wideRoadCameraError",
            EventName::UsbError => "usbError",
            EventName::CanError => "canError",
            EventName::SteerUnavailable => "steerUnavailable",
            EventName::BrakeUnavailable => "brakeUnavailable",
            EventName::ReverseGear => "reverseGear",
            EventName::CruiseDisabled => "cruiseDisabled",
            EventName::PlannerError => "plannerError",
            EventName::RelayMalfunction => "relayMalfunction",
            EventName::NoTarget => "noTarget",
            EventName::SpeedTooLow => "speedTooLow",
            EventName::SpeedTooHigh => "speedTooHigh",
            EventName::LowSpeedLockout => "lowSpeedLockout",
        }
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_discriminant_order() {
        // The counter arena indexes by discriminant; ALL must agree.
        for (idx, name) in EventName::ALL.iter().enumerate() {
            assert_eq!(*name as usize, idx);
        }
    }

    #[test]
    fn wire_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for name in EventName::ALL {
            assert!(seen.insert(name.as_str()), "duplicate: {name}");
        }
        assert_eq!(seen.len(), EventName::COUNT);
    }

    #[test]
    fn wire_names_match_serde() {
        for name in EventName::ALL {
            let json = serde_json::to_value(name).unwrap();
            assert_eq!(json, serde_json::Value::String(name.as_str().into()));
            let back: EventName = serde_json::from_value(json).unwrap();
            assert_eq!(back, name);
        }
    }
}
