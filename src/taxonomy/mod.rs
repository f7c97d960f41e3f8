//! Categorical values used throughout the replay model.
//!
//! Two kinds of enumerations live here:
//!
//! - **Closed sets** ([`PlayerType`], [`Difficulty`]) whose members never change
//!   between game versions.
//! - **Open code tables** ([`UpgradeEventType`], [`MatchAwardType`]) keyed by
//!   small integer codes. Game patches add codes faster than any static table
//!   can track, so each open table carries an `Unknown(code)` variant. Unknown
//!   codes are preserved and round-trip through `u32` conversion and JSON
//!   export unchanged.
//!
//! # Match Award Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | `< 1000` | Generic awards (MVP, most kills, ...) |
//! | `>= 1000` | Map-specific awards |
//!
//! The game also defines a single generic "map specific" award (code 10). It is
//! not listed here: check [`MatchAwardType::is_map_specific`] instead.
//!
//! # Example
//!
//! ```
//! use heroes_replay::taxonomy::{AwardCategory, MatchAwardType};
//!
//! let award = MatchAwardType::from(1004u32);
//! assert_eq!(award, MatchAwardType::MostDragonShrinesCaptured);
//! assert_eq!(award.category(), AwardCategory::MapSpecific);
//!
//! let future = MatchAwardType::from(1099u32);
//! assert!(future.is_unknown());
//! assert!(future.is_map_specific());
//! assert_eq!(u32::from(future), 1099);
//! ```

mod award;
mod player;
mod upgrade;

pub use award::{AwardCategory, MatchAwardType, MAP_SPECIFIC_AWARD_BASE};
pub use player::{Difficulty, PlayerType};
pub use upgrade::UpgradeEventType;
