//! Participant kind and computer difficulty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of participant occupying a slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerType {
    /// A human player.
    #[default]
    Human,
    /// A computer-controlled player.
    Computer,
    /// A spectator (observer) slot; never controls a hero.
    Spectator,
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerType::Human => write!(f, "Human"),
            PlayerType::Computer => write!(f, "Computer"),
            PlayerType::Spectator => write!(f, "Spectator"),
        }
    }
}

/// Difficulty tier of a computer-controlled player.
///
/// Human players and spectators always report [`Difficulty::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// No difficulty recorded.
    #[default]
    Unknown,
    /// Beginner AI.
    Beginner,
    /// Recruit AI.
    Recruit,
    /// Adept AI.
    Adept,
    /// Veteran AI.
    Veteran,
    /// Elite AI.
    Elite,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Unknown => "Unknown",
            Difficulty::Beginner => "Beginner",
            Difficulty::Recruit => "Recruit",
            Difficulty::Adept => "Adept",
            Difficulty::Veteran => "Veteran",
            Difficulty::Elite => "Elite",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(PlayerType::default(), PlayerType::Human);
        assert_eq!(Difficulty::default(), Difficulty::Unknown);
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Beginner < Difficulty::Elite);
        assert!(Difficulty::Unknown < Difficulty::Beginner);
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayerType::Spectator.to_string(), "Spectator");
        assert_eq!(Difficulty::Veteran.to_string(), "Veteran");
    }
}
