//! End-of-match score screen statistics.

use crate::taxonomy::MatchAwardType;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Score screen statistics for one participant.
///
/// Plain counters default to zero. Three statistics were never recorded by
/// some historical or map-specific replay versions and are therefore
/// optional: [`time_cc_enemy_heroes`](Self::time_cc_enemy_heroes),
/// [`healing`](Self::healing) and [`damage_taken`](Self::damage_taken).
/// `None` means "not tracked by this replay", `Some(0)` means "tracked, and
/// the value was zero". Both survive JSON export.
///
/// # Example
///
/// ```
/// use heroes_replay::player::ScoreResult;
///
/// let mut score = ScoreResult::default();
/// assert_eq!(score.healing, None);
///
/// score.healing = Some(0);
/// assert_eq!(score.healing, Some(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreResult {
    /// Hero level reached by the end of the match.
    pub level: u32,

    /// Kills plus assists.
    pub takedowns: u32,

    /// Kills where this participant landed the final blow.
    pub solo_kills: u32,

    /// Assists.
    pub assists: u32,

    /// Deaths.
    pub deaths: u32,

    /// Longest streak of takedowns without dying.
    pub highest_kill_streak: u32,

    /// Damage dealt to enemy heroes.
    pub hero_damage: u32,

    /// Damage dealt to minions, structures and summons combined.
    pub siege_damage: u32,

    /// Damage dealt to structures.
    pub structure_damage: u32,

    /// Damage dealt to minions.
    pub minion_damage: u32,

    /// Damage dealt to mercenaries and other creeps.
    pub creep_damage: u32,

    /// Damage dealt to summoned units.
    pub summon_damage: u32,

    /// Time spent crowd-controlling enemy heroes, when tracked.
    pub time_cc_enemy_heroes: Option<Duration>,

    /// Healing done to allies, when tracked.
    pub healing: Option<u32>,

    /// Healing done to self.
    pub self_healing: u32,

    /// Damage taken, when tracked.
    pub damage_taken: Option<u32>,

    /// Experience contributed to the team.
    pub experience_contribution: u32,

    /// Enemy towns destroyed.
    pub town_kills: u32,

    /// Total time spent dead. Always recorded, zero when never killed.
    pub time_spent_dead: Duration,

    /// Mercenary camps captured.
    pub merc_camp_captures: u32,

    /// Watch towers captured.
    pub watch_tower_captures: u32,

    /// Experience added to the account and hero levels after the match.
    pub meta_experience: u32,

    /// Awards earned, in the order the score screen reported them.
    pub match_awards: Vec<MatchAwardType>,
}

impl ScoreResult {
    /// Returns whether the given award was earned.
    #[must_use]
    pub fn has_award(&self, award: MatchAwardType) -> bool {
        self.match_awards.contains(&award)
    }

    /// Returns whether any map-specific award was earned.
    ///
    /// Unknown codes in the map-specific range count.
    #[must_use]
    pub fn has_map_specific_award(&self) -> bool {
        self.match_awards.iter().any(MatchAwardType::is_map_specific)
    }

    /// Returns an iterator over the map-specific awards earned.
    pub fn map_specific_awards(&self) -> impl Iterator<Item = &MatchAwardType> {
        self.match_awards.iter().filter(|award| award.is_map_specific())
    }
}
