use thiserror::Error;

/// Errors from the arbitration engine.
///
/// The engine itself is pure bookkeeping and does not fail: unknown events
/// resolve to zero candidates and an empty request yields an empty result.
/// The one fallible seam is a dynamic alert builder signalling that the
/// live context it was handed violates its contract; that must stay
/// distinguishable from "no alert surfaced this cycle".
#[derive(Error, Debug)]
pub enum EventsError {
    #[error("alert builder for {label} failed: {reason}")]
    Builder { label: String, reason: String },
}

impl EventsError {
    pub fn builder(label: impl Into<String>, reason: impl Into<String>) -> Self {
        EventsError::Builder {
            label: label.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_slot() {
        let err = EventsError::builder("noGps/permanent", "antenna state missing");
        assert!(err.to_string().contains("noGps/permanent"));
        assert!(err.to_string().contains("antenna state missing"));
    }
}
