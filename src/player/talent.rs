//! Talent selections and repeatable upgrade events.

use crate::format::format_timestamp;
use crate::taxonomy::UpgradeEventType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A talent selected once during the match.
///
/// The numeric identifier is the source of truth. The name is resolved from a
/// separate talent table and stays `None` when the identifier is not in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talent {
    /// Talent identifier as recorded in the replay.
    pub talent_id: u32,

    /// Resolved talent name, if the identifier is known.
    pub talent_name: Option<String>,

    /// Time since match start when the talent was picked.
    pub time_span_selected: Duration,
}

impl Talent {
    /// Creates an unresolved talent selection.
    #[must_use]
    pub fn new(talent_id: u32, time_span_selected: Duration) -> Self {
        Self {
            talent_id,
            talent_name: None,
            time_span_selected,
        }
    }

    /// Sets the resolved talent name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.talent_name = Some(name.into());
        self
    }

    /// Returns whether the talent name was resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.talent_name.is_some()
    }
}

impl fmt::Display for Talent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = format_timestamp(self.time_span_selected);
        match &self.talent_name {
            Some(name) => write!(f, "({at}) {name}"),
            None => write!(f, "({at}) Talent #{}", self.talent_id),
        }
    }
}

/// A timestamped change to a repeatable counter, such as a stacking passive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeEvent {
    /// Time since match start.
    pub time_span: Duration,

    /// What was upgraded.
    pub upgrade_event_type: UpgradeEventType,

    /// Counter value after the change.
    pub value: i32,
}

impl UpgradeEvent {
    /// Creates a new upgrade event.
    #[must_use]
    pub fn new(time_span: Duration, upgrade_event_type: UpgradeEventType, value: i32) -> Self {
        Self {
            time_span,
            upgrade_event_type,
            value,
        }
    }
}
