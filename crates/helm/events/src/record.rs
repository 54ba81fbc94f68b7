//! Wire format for the supervisor's IPC and logging boundary.

use helm_types::EventType;
use serde::{Deserialize, Serialize};

use crate::name::EventName;

/// One active event as it crosses the process boundary: the identifier plus
/// one flag per [`EventType`] its registry entry declares.
///
/// The flags are derived data. The producing side sets them from the
/// registry so consumers can act without a registry of their own; the
/// ingesting side trusts only the identifier and re-derives the type set on
/// the next resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub name: EventName,
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub pre_enable: bool,
    #[serde(default)]
    pub no_entry: bool,
    #[serde(default)]
    pub warning: bool,
    #[serde(default)]
    pub user_disable: bool,
    #[serde(default)]
    pub soft_disable: bool,
    #[serde(default)]
    pub immediate_disable: bool,
    #[serde(default)]
    pub permanent: bool,
}

impl EventRecord {
    /// A record with every flag clear.
    pub fn new(name: EventName) -> Self {
        Self {
            name,
            enable: false,
            pre_enable: false,
            no_entry: false,
            warning: false,
            user_disable: false,
            soft_disable: false,
            immediate_disable: false,
            permanent: false,
        }
    }

    pub fn set(&mut self, event_type: EventType) {
        match event_type {
            EventType::Enable => self.enable = true,
            EventType::PreEnable => self.pre_enable = true,
            EventType::NoEntry => self.no_entry = true,
            EventType::Warning => self.warning = true,
            EventType::UserDisable => self.user_disable = true,
            EventType::SoftDisable => self.soft_disable = true,
            EventType::ImmediateDisable => self.immediate_disable = true,
            EventType::Permanent => self.permanent = true,
        }
    }

    pub fn is_set(&self, event_type: EventType) -> bool {
        match event_type {
            EventType::Enable => self.enable,
            EventType::PreEnable => self.pre_enable,
            EventType::NoEntry => self.no_entry,
            EventType::Warning => self.warning,
            EventType::UserDisable => self.user_disable,
            EventType::SoftDisable => self.soft_disable,
            EventType::ImmediateDisable => self.immediate_disable,
            EventType::Permanent => self.permanent,
        }
    }
}
