//! The participant model.
//!
//! A [`Player`] holds every decoded fact about one match slot: identity,
//! hero and cosmetic choices, the score screen, talent picks and the hero
//! units it controlled.
//!
//! # Defaults
//!
//! The decoder creates a `Player` the first time it sees a slot and fills it
//! in as later event streams are read. Older or partially decoded replays
//! leave many fields untouched, so `Player::default()` is a structurally
//! complete value:
//!
//! - every collection is an empty, per-instance container
//! - the [`ScoreResult`] always exists, zeroed
//! - optional scalars (`character`, cosmetics, the optional score statistics)
//!   are `None`, which consumers must treat differently from an empty or zero
//!   value
//!
//! # Example
//!
//! ```
//! use heroes_replay::player::{Player, Talent};
//! use std::time::Duration;
//!
//! let mut player = Player::new("Alice");
//! player.character = Some("Valla".to_string());
//! player.talents.push(Talent::new(1, Duration::from_secs(95)));
//!
//! assert_eq!(player.character(), Some("Valla"));
//! assert_eq!(player.talents.len(), 1);
//! assert_eq!(player.score_result.takedowns, 0);
//! ```

mod score;
mod talent;
mod unit;

pub use score::ScoreResult;
pub use talent::{Talent, UpgradeEvent};
pub use unit::HeroUnit;

use crate::taxonomy::{Difficulty, MatchAwardType, PlayerType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One match participant.
///
/// All fields are public and assigned directly by the decoder. Collections
/// preserve insertion order where order matters (`talents` in pick order,
/// `hero_units` in birth order, `upgrade_events` in time order).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    /// Battle.net region.
    pub battle_net_region_id: u32,

    /// Battle.net sub-region, part of the profile URI.
    pub battle_net_sub_id: u32,

    /// Battle.net account identifier, part of the profile URI.
    pub battle_net_id: u32,

    /// Toon handle alternative to the numeric tag, when present.
    pub battle_net_tid: Option<String>,

    /// Display name.
    pub name: String,

    /// Numeric part of the BattleTag.
    pub battle_tag: u32,

    /// Human, computer or spectator.
    pub player_type: PlayerType,

    /// Team number.
    pub team: u32,

    /// Whether this participant's team won.
    pub is_winner: bool,

    /// Selected hero. `None` for spectators and when not yet detected.
    pub character: Option<String>,

    /// Account level.
    pub account_level: u32,

    /// Hero level at match start.
    pub character_level: u32,

    /// Slot color components (ARGB).
    pub color: Vec<u8>,

    /// Whether the hero was auto-selected.
    pub is_auto_select: bool,

    /// Whether the silence penalty was active.
    pub is_silenced: bool,

    /// Skin and skin tint, combined.
    pub skin_and_skin_tint: Option<String>,

    /// Mount and mount tint, combined.
    pub mount_and_mount_tint: Option<String>,

    /// Computer difficulty.
    pub difficulty: Difficulty,

    /// Handicap percentage.
    pub handicap: u32,

    /// Party key. Participants sharing the same non-zero key queued together.
    pub party_value: i64,

    /// Talents in the order they were picked.
    pub talents: Vec<Talent>,

    /// Hero units controlled during the match.
    pub hero_units: Vec<HeroUnit>,

    /// Score screen statistics.
    pub score_result: ScoreResult,

    /// Repeatable upgrade events.
    pub upgrade_events: Vec<UpgradeEvent>,

    /// Undocumented upgrade flags by name. Keys are opaque.
    pub miscellaneous_upgrade_events: HashMap<String, bool>,

    /// Undocumented score counters by name. Keys are opaque.
    pub miscellaneous_score_results: HashMap<String, i32>,

    /// Owned collection items by name. Only present in older replays.
    pub player_collection: HashMap<String, bool>,
}

impl Player {
    /// Creates a participant with the given display name and defaults elsewhere.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the selected hero, treating an empty string as absent.
    #[must_use]
    pub fn character(&self) -> Option<&str> {
        self.character.as_deref().filter(|c| !c.is_empty())
    }

    /// Returns the full BattleTag (`Name#1234`), or `None` if no tag was recorded.
    #[must_use]
    pub fn battle_tag_name(&self) -> Option<String> {
        (self.battle_tag != 0).then(|| format!("{}#{}", self.name, self.battle_tag))
    }

    /// Returns whether this participant queued as part of a party.
    #[must_use]
    pub fn is_in_party(&self) -> bool {
        self.party_value != 0
    }

    /// Returns whether this participant shares a party with `other`.
    #[must_use]
    pub fn is_party_member_of(&self, other: &Player) -> bool {
        self.is_in_party() && self.party_value == other.party_value
    }

    /// Returns whether this slot is a spectator.
    #[must_use]
    pub fn is_spectator(&self) -> bool {
        self.player_type == PlayerType::Spectator
    }

    /// Returns an iterator over the awards earned, in score screen order.
    pub fn awards(&self) -> impl Iterator<Item = &MatchAwardType> {
        self.score_result.match_awards.iter()
    }
}
