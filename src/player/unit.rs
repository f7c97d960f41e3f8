//! Hero unit instances controlled by a participant.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One in-game hero unit controlled by a participant.
///
/// Most heroes have a single unit. Multi-unit heroes and respawned clones
/// produce several, in the order they were born.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroUnit {
    /// Unit identifier assigned by the game.
    pub unit_id: u32,

    /// Unit type name.
    pub name: String,

    /// Time since match start when the unit was created.
    pub time_span_born: Duration,

    /// Time the unit was removed, if it did not survive to the end.
    pub time_span_died: Option<Duration>,
}

impl HeroUnit {
    /// Returns how long the unit existed, or `None` if it was alive at the end.
    #[must_use]
    pub fn lifetime(&self) -> Option<Duration> {
        self.time_span_died
            .map(|died| died.saturating_sub(self.time_span_born))
    }
}
