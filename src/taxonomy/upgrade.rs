//! Repeatable upgrade event codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Type of a repeatable, hero or map specific upgrade event.
///
/// These track stacking passives and similar counters that change many times
/// over a match, unlike a talent which is selected once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum UpgradeEventType {
    /// Nova's Snipe master damage upgrade (1).
    NovaSnipeMasterDamageUpgrade,
    /// Gall's Dark Descent talent upgrade (2).
    GallTalentDarkDescentUpgrade,
    /// Regeneration master stacks (3).
    RegenMasterStacks,
    /// Marksman stacks (4).
    MarksmanStacks,
    /// Witch Doctor's Plague of Toads pandemic talent completion (5).
    WitchDoctorPlagueOfToadsPandemicTalentCompletion,
    /// A code not in this table, preserved as-is.
    Unknown(u32),
}

impl UpgradeEventType {
    /// Returns the numeric code of this upgrade event type.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            UpgradeEventType::NovaSnipeMasterDamageUpgrade => 1,
            UpgradeEventType::GallTalentDarkDescentUpgrade => 2,
            UpgradeEventType::RegenMasterStacks => 3,
            UpgradeEventType::MarksmanStacks => 4,
            UpgradeEventType::WitchDoctorPlagueOfToadsPandemicTalentCompletion => 5,
            UpgradeEventType::Unknown(code) => *code,
        }
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
        matches!(self.canonical(), UpgradeEventType::Unknown(_))
    }
}

impl From<u32> for UpgradeEventType {
    fn from(code: u32) -> Self {
        match code {
            1 => UpgradeEventType::NovaSnipeMasterDamageUpgrade,
            2 => UpgradeEventType::GallTalentDarkDescentUpgrade,
            3 => UpgradeEventType::RegenMasterStacks,
            4 => UpgradeEventType::MarksmanStacks,
            5 => UpgradeEventType::WitchDoctorPlagueOfToadsPandemicTalentCompletion,
            n => UpgradeEventType::Unknown(n),
        }
    }
}

// Equality follows the code, so `Unknown(n)` matches the named variant for `n`.
impl PartialEq for UpgradeEventType {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for UpgradeEventType {}

impl Hash for UpgradeEventType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl From<UpgradeEventType> for u32 {
    fn from(value: UpgradeEventType) -> Self {
        value.code()
    }
}

impl fmt::Display for UpgradeEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.canonical() {
            UpgradeEventType::NovaSnipeMasterDamageUpgrade => {
                write!(f, "NovaSnipeMasterDamageUpgrade")
            }
            UpgradeEventType::GallTalentDarkDescentUpgrade => {
                write!(f, "GallTalentDarkDescentUpgrade")
            }
            UpgradeEventType::RegenMasterStacks => write!(f, "RegenMasterStacks"),
            UpgradeEventType::MarksmanStacks => write!(f, "MarksmanStacks"),
            UpgradeEventType::WitchDoctorPlagueOfToadsPandemicTalentCompletion => {
                write!(f, "WitchDoctorPlagueOfToadsPandemicTalentCompletion")
            }
            UpgradeEventType::Unknown(n) => write!(f, "Unknown({n})"),
        }
    }
}
