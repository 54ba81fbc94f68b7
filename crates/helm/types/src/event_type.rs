use serde::{Deserialize, Serialize};

/// State-transition semantics an event can carry.
///
/// Each tag maps to a slot in the control state machine: whether automated
/// control may be entered, must be left, or the event is purely
/// informational. The engine only propagates these tags; acting on them is
/// the supervisor's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    /// Engagement was requested and is granted this cycle.
    Enable,
    /// Control is armed but not yet actuating.
    PreEnable,
    /// The event forbids entering automated control.
    NoEntry,
    /// Informational while engaged; control continues.
    Warning,
    /// The driver asked to disengage.
    UserDisable,
    /// Control must wind down within a bounded window.
    SoftDisable,
    /// Control must stop actuating now.
    ImmediateDisable,
    /// Shown in every state, engaged or not.
    Permanent,
}

impl EventType {
    pub const ALL: [EventType; 8] = [
        EventType::Enable,
        EventType::PreEnable,
        EventType::NoEntry,
        EventType::Warning,
        EventType::UserDisable,
        EventType::SoftDisable,
        EventType::ImmediateDisable,
        EventType::Permanent,
    ];

    /// Stable wire name, also used in diagnostic labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Enable => "enable",
            EventType::PreEnable => "preEnable",
            EventType::NoEntry => "noEntry",
            EventType::Warning => "warning",
            EventType::UserDisable => "userDisable",
            EventType::SoftDisable => "softDisable",
            EventType::ImmediateDisable => "immediateDisable",
            EventType::Permanent => "permanent",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_tag() {
        // ALL is the iteration surface for record flag derivation; a missing
        // member would silently drop a flag from the wire format.
        let mut seen = std::collections::HashSet::new();
        for et in EventType::ALL {
            assert!(seen.insert(et.as_str()));
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn wire_names_match_serde() {
        for et in EventType::ALL {
            let json = serde_json::to_value(et).unwrap();
            assert_eq!(json, serde_json::Value::String(et.as_str().into()));
        }
    }
}
