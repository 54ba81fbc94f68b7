use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{EventType, Priority};

/// Urgency tint the UI applies to an alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertStatus {
    Normal,
    UserPrompt,
    Critical,
}

/// On-screen footprint of an alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertSize {
    None,
    Small,
    Mid,
    Full,
}

/// Visual cue rendered alongside the alert text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisualAlert {
    None,
    Fcw,
    SteerRequired,
    BrakePressed,
    WrongGear,
    SeatbeltUnbuckled,
    SpeedTooHigh,
    Ldw,
}

/// Audio cue played when the alert surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AudibleAlert {
    None,
    ChimeEngage,
    ChimeDisengage,
    ChimeError,
    ChimePrompt,
    ChimeDing,
    ChimeDingRepeat,
    ChimeReady,
    ChimeSeatbelt,
    ChimeGear,
    ChimeWarningRepeat,
    ChimeWarning2Repeat,
}

/// A fully specified user notification.
///
/// Alerts are immutable values produced at resolution time. Two fields are
/// stamped by the resolver rather than the catalog: `label`, the diagnostic
/// `"<eventName>/<eventType>"` pair the alert came from, and `event_type`,
/// the slot it was resolved for.
///
/// Comparison is by [`Priority`] alone. Alerts are never deduplicated by
/// content, so no full equality is defined; `==` on two alerts means equal
/// priority.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Alert {
    /// First (headline) text line.
    pub line1: String,
    /// Second (detail) text line; may be empty.
    pub line2: String,
    pub status: AlertStatus,
    pub size: AlertSize,
    pub priority: Priority,
    pub visual: VisualAlert,
    pub audible: AudibleAlert,
    /// Seconds the audio cue plays.
    pub sound_duration: f64,
    /// Seconds the visual cue stays on the HUD.
    pub hud_duration: f64,
    /// Seconds the text lines stay on screen.
    pub text_duration: f64,
    /// Blink rate in Hz; 0 renders steady.
    pub pulse_rate: f64,
    /// Minimum continuous event presence, in seconds, before the alert may
    /// surface. 0 surfaces on the first active cycle.
    pub creation_delay: f64,
    /// Diagnostic `"<eventName>/<eventType>"` label, stamped at resolution.
    pub label: String,
    /// Slot the alert was resolved for, stamped at resolution.
    pub event_type: Option<EventType>,
}

impl Alert {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        line1: impl Into<String>,
        line2: impl Into<String>,
        status: AlertStatus,
        size: AlertSize,
        priority: Priority,
        visual: VisualAlert,
        audible: AudibleAlert,
        sound_duration: f64,
        hud_duration: f64,
        text_duration: f64,
    ) -> Self {
        Self {
            line1: line1.into(),
            line2: line2.into(),
            status,
            size,
            priority,
            visual,
            audible,
            sound_duration,
            hud_duration,
            text_duration,
            pulse_rate: 0.0,
            creation_delay: 0.0,
            label: String::new(),
            event_type: None,
        }
    }

    pub fn with_pulse_rate(mut self, rate: f64) -> Self {
        self.pulse_rate = rate;
        self
    }

    pub fn with_creation_delay(mut self, delay: f64) -> Self {
        self.creation_delay = delay;
        self
    }

    pub fn with_audible(mut self, audible: AudibleAlert) -> Self {
        self.audible = audible;
        self
    }

    pub fn with_visual(mut self, visual: VisualAlert) -> Self {
        self.visual = visual;
        self
    }

    pub fn with_sound_duration(mut self, seconds: f64) -> Self {
        self.sound_duration = seconds;
        self
    }

    pub fn with_hud_duration(mut self, seconds: f64) -> Self {
        self.hud_duration = seconds;
        self
    }

    pub fn with_text_duration(mut self, seconds: f64) -> Self {
        self.text_duration = seconds;
        self
    }

    /// Entry refusal: shown when engagement is requested while the event
    /// forbids it.
    pub fn no_entry(detail: impl Into<String>) -> Self {
        Alert::new(
            "Helm Unavailable",
            detail,
            AlertStatus::Normal,
            AlertSize::Mid,
            Priority::Low,
            VisualAlert::None,
            AudibleAlert::ChimeError,
            0.4,
            2.0,
            3.0,
        )
    }

    /// Bounded wind-down: the driver must take over within a few seconds.
    pub fn soft_disable(detail: impl Into<String>) -> Self {
        Alert::new(
            "TAKE CONTROL IMMEDIATELY",
            detail,
            AlertStatus::Critical,
            AlertSize::Full,
            Priority::Mid,
            VisualAlert::SteerRequired,
            AudibleAlert::ChimeWarningRepeat,
            0.1,
            2.0,
            2.0,
        )
    }

    /// Actuation stops this cycle; the loudest alert the engine produces.
    pub fn immediate_disable(detail: impl Into<String>) -> Self {
        Alert::new(
            "TAKE CONTROL IMMEDIATELY",
            detail,
            AlertStatus::Critical,
            AlertSize::Full,
            Priority::Highest,
            VisualAlert::SteerRequired,
            AudibleAlert::ChimeWarningRepeat,
            2.2,
            3.0,
            4.0,
        )
    }

    /// Text-free engage/disengage chime.
    pub fn engagement(audible: AudibleAlert) -> Self {
        Alert::new(
            "",
            "",
            AlertStatus::Normal,
            AlertSize::None,
            Priority::Mid,
            VisualAlert::None,
            audible,
            0.2,
            0.0,
            0.0,
        )
    }

    /// Quiet status banner shown in every control state. Sized to its
    /// content: two lines get the mid layout, a lone headline the small one.
    pub fn permanent(
        line1: impl Into<String>,
        line2: impl Into<String>,
        text_duration: f64,
    ) -> Self {
        let line1 = line1.into();
        let line2 = line2.into();
        let size = if line2.is_empty() {
            AlertSize::Small
        } else {
            AlertSize::Mid
        };
        Alert::new(
            line1,
            line2,
            AlertStatus::Normal,
            size,
            Priority::Lower,
            VisualAlert::None,
            AudibleAlert::None,
            0.0,
            0.0,
            text_duration,
        )
    }
}

impl PartialEq for Alert {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl PartialOrd for Alert {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.priority.cmp(&other.priority))
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} {} {:?} {:?}",
            self.line1, self.line2, self.priority, self.visual, self.audible
        )
    }
}

/// First-seen maximum by priority.
///
/// `Iterator::max_by_key` keeps the last maximal element; arbitration must
/// be stable in the other direction so that a tie never flips the displayed
/// alert between cycles.
pub fn highest(alerts: &[Alert]) -> Option<&Alert> {
    let mut best: Option<&Alert> = None;
    for alert in alerts {
        match best {
            Some(current) if alert.priority > current.priority => best = Some(alert),
            None => best = Some(alert),
            _ => {}
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(priority: Priority, line1: &str) -> Alert {
        Alert::new(
            line1,
            "",
            AlertStatus::Normal,
            AlertSize::Small,
            priority,
            VisualAlert::None,
            AudibleAlert::None,
            0.0,
            0.0,
            0.2,
        )
    }

    #[test]
    fn comparison_uses_priority_only() {
        let a = plain(Priority::High, "a");
        let b = plain(Priority::Low, "completely different text");

        assert!(a > b);
        assert!(b < a);
        assert!(plain(Priority::Low, "x") == plain(Priority::Low, "y"));
    }

    #[test]
    fn highest_picks_maximum() {
        let alerts = vec![
            plain(Priority::Low, "low"),
            plain(Priority::Highest, "top"),
            plain(Priority::Mid, "mid"),
        ];
        assert_eq!(highest(&alerts).unwrap().line1, "top");
    }

    #[test]
    fn highest_is_stable_on_ties() {
        let alerts = vec![
            plain(Priority::Mid, "first"),
            plain(Priority::Mid, "second"),
            plain(Priority::Low, "third"),
        ];
        assert_eq!(highest(&alerts).unwrap().line1, "first");
    }

    #[test]
    fn highest_of_empty_is_none() {
        assert!(highest(&[]).is_none());
    }

    #[test]
    fn no_entry_preset() {
        let alert = Alert::no_entry("Low Battery");
        assert_eq!(alert.line1, "Helm Unavailable");
        assert_eq!(alert.line2, "Low Battery");
        assert_eq!(alert.priority, Priority::Low);
        assert_eq!(alert.audible, AudibleAlert::ChimeError);
        assert_eq!(alert.size, AlertSize::Mid);
    }

    #[test]
    fn no_entry_overrides() {
        let alert = Alert::no_entry("Pedal Pressed")
            .with_visual(VisualAlert::BrakePressed)
            .with_hud_duration(0.0);
        assert_eq!(alert.visual, VisualAlert::BrakePressed);
        assert_eq!(alert.hud_duration, 0.0);
        // Untouched preset fields survive the overrides.
        assert_eq!(alert.audible, AudibleAlert::ChimeError);
    }

    #[test]
    fn disable_presets_escalate() {
        let soft = Alert::soft_disable("Overheated");
        let immediate = Alert::immediate_disable("CAN Error");
        assert!(immediate > soft);
        assert_eq!(soft.status, AlertStatus::Critical);
        assert_eq!(immediate.priority, Priority::Highest);
    }

    #[test]
    fn permanent_sizes_to_content() {
        assert_eq!(Alert::permanent("Dashcam Mode", "", 0.2).size, AlertSize::Small);
        assert_eq!(
            Alert::permanent("Fan Malfunction", "Contact Support", 0.2).size,
            AlertSize::Mid
        );
    }

    #[test]
    fn engagement_is_silent_on_screen() {
        let alert = Alert::engagement(AudibleAlert::ChimeEngage);
        assert_eq!(alert.size, AlertSize::None);
        assert!(alert.line1.is_empty());
        assert_eq!(alert.audible, AudibleAlert::ChimeEngage);
    }

    #[test]
    fn builder_defaults() {
        let alert = plain(Priority::Low, "x");
        assert_eq!(alert.pulse_rate, 0.0);
        assert_eq!(alert.creation_delay, 0.0);
        assert!(alert.label.is_empty());
        assert!(alert.event_type.is_none());

        let delayed = plain(Priority::Low, "x").with_creation_delay(300.0);
        assert_eq!(delayed.creation_delay, 300.0);
    }
}
