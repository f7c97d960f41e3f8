//! Post-match award codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// First code of the map-specific award range.
pub const MAP_SPECIFIC_AWARD_BASE: u32 = 1000;

/// Which award range a code falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AwardCategory {
    /// Awards available on every map.
    Generic,
    /// Awards tied to a single battleground's objective.
    MapSpecific,
}

/// A post-match award shown on the score screen.
///
/// Codes below [`MAP_SPECIFIC_AWARD_BASE`] are generic; codes at or above it
/// belong to a specific battleground. Unrecognized codes keep their category
/// because the category is derived from the code range, not from the table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum MatchAwardType {
    /// Most valuable player (1).
    Mvp,
    /// Highest kill streak (2).
    HighestKillStreak,
    /// Most experience contribution (3).
    MostXpContribution,
    /// Most hero damage done (4).
    MostHeroDamageDone,
    /// Most siege damage done (5).
    MostSiegeDamageDone,
    /// Most damage taken (6).
    MostDamageTaken,
    /// Most healing (7).
    MostHealing,
    /// Most stuns (8).
    MostStuns,
    /// Most mercenary camps captured (9).
    MostMercCampsCaptured,
    /// Most kills (11).
    MostKills,
    /// Hat trick: first three kills (12).
    HatTrick,
    /// Clutch heals (13).
    ClutchHealer,
    /// Most protection given (14).
    MostProtection,
    /// No deaths (15).
    ZeroDeaths,
    /// Most roots (16).
    MostRoots,
    /// No outnumbered deaths (17).
    ZeroOutnumberedDeaths,
    /// Most daredevil escapes (18).
    MostDaredevilEscapes,
    /// Most escapes (19).
    MostEscapes,
    /// Most silences (20).
    MostSilences,
    /// Most teamfight damage taken (21).
    MostTeamfightDamageTaken,
    /// Most teamfight healing done (22).
    MostTeamfightHealingDone,
    /// Most teamfight hero damage done (23).
    MostTeamfightHeroDamageDone,
    /// Most vengeances performed (24).
    MostVengeancesPerformed,

    /// Battlefield of Eternity: most immortal damage (1001).
    MostImmortalDamage,
    /// Blackheart's Bay: most coins paid (1002).
    MostCoinsPaid,
    /// Cursed Hollow: most curse damage done (1003).
    MostCurseDamageDone,
    /// Dragon Shire: most dragon shrines captured (1004).
    MostDragonShrinesCaptured,
    /// Garden of Terror: most damage to plants (1005).
    MostDamageToPlants,
    /// Haunted Mines: most skulls collected (1006).
    MostSkullsCollected,
    /// Infernal Shrines: most damage to shrine minions (1007).
    MostDamageToMinions,
    /// Sky Temple: most time in temples (1008).
    MostTimeInTemple,
    /// Tomb of the Spider Queen: most gems turned in (1009).
    MostGemsTurnedIn,
    /// Towers of Doom: most altar damage (1010).
    MostAltarDamage,
    /// Braxis Holdout: most damage done to zerg (1012).
    MostDamageDoneToZerg,
    /// Warhead Junction: most nuke damage done (1013).
    MostNukeDamageDone,
    /// Alterac Pass: most time pushing (1016).
    MostTimePushing,

    /// A code not in this table, preserved as-is.
    Unknown(u32),
}

impl MatchAwardType {
    /// Every award in the known table, generic awards first.
    pub const KNOWN: [MatchAwardType; 36] = [
        MatchAwardType::Mvp,
        MatchAwardType::HighestKillStreak,
        MatchAwardType::MostXpContribution,
        MatchAwardType::MostHeroDamageDone,
        MatchAwardType::MostSiegeDamageDone,
        MatchAwardType::MostDamageTaken,
        MatchAwardType::MostHealing,
        MatchAwardType::MostStuns,
        MatchAwardType::MostMercCampsCaptured,
        MatchAwardType::MostKills,
        MatchAwardType::HatTrick,
        MatchAwardType::ClutchHealer,
        MatchAwardType::MostProtection,
        MatchAwardType::ZeroDeaths,
        MatchAwardType::MostRoots,
        MatchAwardType::ZeroOutnumberedDeaths,
        MatchAwardType::MostDaredevilEscapes,
        MatchAwardType::MostEscapes,
        MatchAwardType::MostSilences,
        MatchAwardType::MostTeamfightDamageTaken,
        MatchAwardType::MostTeamfightHealingDone,
        MatchAwardType::MostTeamfightHeroDamageDone,
        MatchAwardType::MostVengeancesPerformed,
        MatchAwardType::MostImmortalDamage,
        MatchAwardType::MostCoinsPaid,
        MatchAwardType::MostCurseDamageDone,
        MatchAwardType::MostDragonShrinesCaptured,
        MatchAwardType::MostDamageToPlants,
        MatchAwardType::MostSkullsCollected,
        MatchAwardType::MostDamageToMinions,
        MatchAwardType::MostTimeInTemple,
        MatchAwardType::MostGemsTurnedIn,
        MatchAwardType::MostAltarDamage,
        MatchAwardType::MostDamageDoneToZerg,
        MatchAwardType::MostNukeDamageDone,
        MatchAwardType::MostTimePushing,
    ];

    /// Returns the numeric code of this award.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            MatchAwardType::Mvp => 1,
            MatchAwardType::HighestKillStreak => 2,
            MatchAwardType::MostXpContribution => 3,
            MatchAwardType::MostHeroDamageDone => 4,
            MatchAwardType::MostSiegeDamageDone => 5,
            MatchAwardType::MostDamageTaken => 6,
            MatchAwardType::MostHealing => 7,
            MatchAwardType::MostStuns => 8,
            MatchAwardType::MostMercCampsCaptured => 9,
            // 10 is the generic "map specific" award, see is_map_specific()
            MatchAwardType::MostKills => 11,
            MatchAwardType::HatTrick => 12,
            MatchAwardType::ClutchHealer => 13,
            MatchAwardType::MostProtection => 14,
            MatchAwardType::ZeroDeaths => 15,
            MatchAwardType::MostRoots => 16,
            MatchAwardType::ZeroOutnumberedDeaths => 17,
            MatchAwardType::MostDaredevilEscapes => 18,
            MatchAwardType::MostEscapes => 19,
            MatchAwardType::MostSilences => 20,
            MatchAwardType::MostTeamfightDamageTaken => 21,
            MatchAwardType::MostTeamfightHealingDone => 22,
            MatchAwardType::MostTeamfightHeroDamageDone => 23,
            MatchAwardType::MostVengeancesPerformed => 24,
            MatchAwardType::MostImmortalDamage => 1001,
            MatchAwardType::MostCoinsPaid => 1002,
            MatchAwardType::MostCurseDamageDone => 1003,
            MatchAwardType::MostDragonShrinesCaptured => 1004,
            MatchAwardType::MostDamageToPlants => 1005,
            MatchAwardType::MostSkullsCollected => 1006,
            MatchAwardType::MostDamageToMinions => 1007,
            MatchAwardType::MostTimeInTemple => 1008,
            MatchAwardType::MostGemsTurnedIn => 1009,
            MatchAwardType::MostAltarDamage => 1010,
            // Lost Cavern (1011) has no award
            MatchAwardType::MostDamageDoneToZerg => 1012,
            MatchAwardType::MostNukeDamageDone => 1013,
            MatchAwardType::MostTimePushing => 1016,
            MatchAwardType::Unknown(code) => *code,
        }
    }

    /// Returns the symbolic name of this award, or `None` for unknown codes.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        let name = match self.canonical() {
            MatchAwardType::Mvp => "MVP",
            MatchAwardType::HighestKillStreak => "HighestKillStreak",
            MatchAwardType::MostXpContribution => "MostXPContribution",
            MatchAwardType::MostHeroDamageDone => "MostHeroDamageDone",
            MatchAwardType::MostSiegeDamageDone => "MostSiegeDamageDone",
            MatchAwardType::MostDamageTaken => "MostDamageTaken",
            MatchAwardType::MostHealing => "MostHealing",
            MatchAwardType::MostStuns => "MostStuns",
            MatchAwardType::MostMercCampsCaptured => "MostMercCampsCaptured",
            MatchAwardType::MostKills => "MostKills",
            MatchAwardType::HatTrick => "HatTrick",
            MatchAwardType::ClutchHealer => "ClutchHealer",
            MatchAwardType::MostProtection => "MostProtection",
            MatchAwardType::ZeroDeaths => "ZeroDeaths",
            MatchAwardType::MostRoots => "MostRoots",
            MatchAwardType::ZeroOutnumberedDeaths => "ZeroOutnumberedDeaths",
            MatchAwardType::MostDaredevilEscapes => "MostDaredevilEscapes",
            MatchAwardType::MostEscapes => "MostEscapes",
            MatchAwardType::MostSilences => "MostSilences",
            MatchAwardType::MostTeamfightDamageTaken => "MostTeamfightDamageTaken",
            MatchAwardType::MostTeamfightHealingDone => "MostTeamfightHealingDone",
            MatchAwardType::MostTeamfightHeroDamageDone => "MostTeamfightHeroDamageDone",
            MatchAwardType::MostVengeancesPerformed => "MostVengeancesPerformed",
            MatchAwardType::MostImmortalDamage => "MostImmortalDamage",
            MatchAwardType::MostCoinsPaid => "MostCoinsPaid",
            MatchAwardType::MostCurseDamageDone => "MostCurseDamageDone",
            MatchAwardType::MostDragonShrinesCaptured => "MostDragonShrinesCaptured",
            MatchAwardType::MostDamageToPlants => "MostDamageToPlants",
            MatchAwardType::MostSkullsCollected => "MostSkullsCollected",
            MatchAwardType::MostDamageToMinions => "MostDamageToMinions",
            MatchAwardType::MostTimeInTemple => "MostTimeInTemple",
            MatchAwardType::MostGemsTurnedIn => "MostGemsTurnedIn",
            MatchAwardType::MostAltarDamage => "MostAltarDamage",
            MatchAwardType::MostDamageDoneToZerg => "MostDamageDoneToZerg",
            MatchAwardType::MostNukeDamageDone => "MostNukeDamageDone",
            MatchAwardType::MostTimePushing => "MostTimePushing",
            MatchAwardType::Unknown(_) => return None,
        };
        Some(name)
    }

    /// Returns which award range this code belongs to.
    #[must_use]
    pub const fn category(&self) -> AwardCategory {
        if self.code() >= MAP_SPECIFIC_AWARD_BASE {
            AwardCategory::MapSpecific
        } else {
            AwardCategory::Generic
        }
    }

    /// Returns whether this is a map-specific award (code >= 1000).
    #[must_use]
    pub const fn is_map_specific(&self) -> bool {
        matches!(self.category(), AwardCategory::MapSpecific)
    }

    /// Returns the table entry for this code.
    ///
    /// A hand-built `Unknown` holding a known code resolves to the named variant.
    #[must_use]
    pub fn canonical(self) -> Self {
        Self::from(self.code())
    }

    /// Returns whether this code is missing from the known table.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self.canonical(), MatchAwardType::Unknown(_))
    }
}

impl From<u32> for MatchAwardType {
    fn from(code: u32) -> Self {
        Self::KNOWN
            .iter()
            .copied()
            .find(|award| award.code() == code)
            .unwrap_or(MatchAwardType::Unknown(code))
    }
}

// Equality follows the code, so `Unknown(n)` matches the named variant for `n`.
impl PartialEq for MatchAwardType {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for MatchAwardType {}

impl Hash for MatchAwardType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl From<MatchAwardType> for u32 {
    fn from(value: MatchAwardType) -> Self {
        value.code()
    }
}

impl fmt::Display for MatchAwardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Unknown({})", self.code()),
        }
    }
}
