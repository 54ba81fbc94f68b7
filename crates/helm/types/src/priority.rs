use serde::{Deserialize, Serialize};

/// Alert arbitration priority.
///
/// A total order over six levels. When several alerts are eligible in the
/// same cycle the consumer displays the maximum; no other alert field
/// participates in that decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Priority {
    Lowest = 0,
    Lower = 1,
    Low = 2,
    Mid = 3,
    High = 4,
    Highest = 5,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Lowest => "lowest",
            Priority::Lower => "lower",
            Priority::Low => "low",
            Priority::Mid => "mid",
            Priority::High => "high",
            Priority::Highest => "highest",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
