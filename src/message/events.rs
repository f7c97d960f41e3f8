//! Message event kinds and their payloads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Kind of a message event, as coded in the replay's message stream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum MessageEventType {
    /// Chat message (0).
    Chat,
    /// Minimap ping (1).
    Ping,
    /// Loading screen progress (2).
    LoadingProgress,
    /// Server ping (3).
    ServerPing,
    /// Reconnect notification (4).
    ReconnectNotify,
    /// Player announcement (5).
    PlayerAnnounce,
    /// A code not in this table, preserved as-is.
    Unknown(u32),
}

impl MessageEventType {
    /// Returns the numeric code of this event kind.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            MessageEventType::Chat => 0,
            MessageEventType::Ping => 1,
            MessageEventType::LoadingProgress => 2,
            MessageEventType::ServerPing => 3,
            MessageEventType::ReconnectNotify => 4,
            MessageEventType::PlayerAnnounce => 5,
            MessageEventType::Unknown(code) => *code,
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
        matches!(self.canonical(), MessageEventType::Unknown(_))
    }
}

impl From<u32> for MessageEventType {
    fn from(code: u32) -> Self {
        match code {
            0 => MessageEventType::Chat,
            1 => MessageEventType::Ping,
            2 => MessageEventType::LoadingProgress,
            3 => MessageEventType::ServerPing,
            4 => MessageEventType::ReconnectNotify,
            5 => MessageEventType::PlayerAnnounce,
            n => MessageEventType::Unknown(n),
        }
    }
}

// Equality follows the code, so `Unknown(n)` matches the named variant for `n`.
impl PartialEq for MessageEventType {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for MessageEventType {}

impl Hash for MessageEventType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl From<MessageEventType> for u32 {
    fn from(value: MessageEventType) -> Self {
        value.code()
    }
}

impl fmt::Display for MessageEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.canonical() {
            MessageEventType::Chat => write!(f, "Chat"),
            MessageEventType::Ping => write!(f, "Ping"),
            MessageEventType::LoadingProgress => write!(f, "LoadingProgress"),
            MessageEventType::ServerPing => write!(f, "ServerPing"),
            MessageEventType::ReconnectNotify => write!(f, "ReconnectNotify"),
            MessageEventType::PlayerAnnounce => write!(f, "PlayerAnnounce"),
            MessageEventType::Unknown(n) => write!(f, "Unknown({n})"),
        }
    }
}

/// Audience of a chat message or ping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum MessageTarget {
    /// Everyone in the match (0).
    All,
    /// The sender's team (1).
    Team,
    /// Observers only (4).
    Observers,
    /// A code not in this table, preserved as-is.
    Unknown(u32),
}

impl MessageTarget {
    /// Returns the numeric code of this target.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            MessageTarget::All => 0,
            MessageTarget::Team => 1,
            MessageTarget::Observers => 4,
            MessageTarget::Unknown(code) => *code,
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
        matches!(self.canonical(), MessageTarget::Unknown(_))
    }
}

impl From<u32> for MessageTarget {
    fn from(code: u32) -> Self {
        match code {
            0 => MessageTarget::All,
            1 => MessageTarget::Team,
            4 => MessageTarget::Observers,
            n => MessageTarget::Unknown(n),
        }
    }
}

// Equality follows the code, so `Unknown(n)` matches the named variant for `n`.
impl PartialEq for MessageTarget {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for MessageTarget {}

impl Hash for MessageTarget {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl From<MessageTarget> for u32 {
    fn from(value: MessageTarget) -> Self {
        value.code()
    }
}

impl fmt::Display for MessageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.canonical() {
            MessageTarget::All => write!(f, "All"),
            MessageTarget::Team => write!(f, "Team"),
            MessageTarget::Observers => write!(f, "Observers"),
            MessageTarget::Unknown(n) => write!(f, "Unknown({n})"),
        }
    }
}

/// Category of a player announcement (alt-clicking an ability, buff or vital).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum AnnouncementType {
    /// No category (0).
    None,
    /// An ability's cooldown or readiness (1).
    Ability,
    /// A buff or debuff (2).
    Behavior,
    /// Health or mana (3).
    Vitals,
    /// A code not in this table, preserved as-is.
    Unknown(u32),
}

impl AnnouncementType {
    /// Returns the numeric code of this category.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            AnnouncementType::None => 0,
            AnnouncementType::Ability => 1,
            AnnouncementType::Behavior => 2,
            AnnouncementType::Vitals => 3,
            AnnouncementType::Unknown(code) => *code,
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
        matches!(self.canonical(), AnnouncementType::Unknown(_))
    }
}

impl From<u32> for AnnouncementType {
    fn from(code: u32) -> Self {
        match code {
            0 => AnnouncementType::None,
            1 => AnnouncementType::Ability,
            2 => AnnouncementType::Behavior,
            3 => AnnouncementType::Vitals,
            n => AnnouncementType::Unknown(n),
        }
    }
}

// Equality follows the code, so `Unknown(n)` matches the named variant for `n`.
impl PartialEq for AnnouncementType {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for AnnouncementType {}

impl Hash for AnnouncementType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl From<AnnouncementType> for u32 {
    fn from(value: AnnouncementType) -> Self {
        value.code()
    }
}

impl fmt::Display for AnnouncementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.canonical() {
            AnnouncementType::None => write!(f, "None"),
            AnnouncementType::Ability => write!(f, "Ability"),
            AnnouncementType::Behavior => write!(f, "Behavior"),
            AnnouncementType::Vitals => write!(f, "Vitals"),
            AnnouncementType::Unknown(n) => write!(f, "Unknown({n})"),
        }
    }
}

/// Chat payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who the message was addressed to.
    pub target: MessageTarget,

    /// Message text.
    pub text: String,
}

/// Minimap ping payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PingMessage {
    /// Who could see the ping.
    pub target: MessageTarget,

    /// Map X coordinate.
    pub x: f64,

    /// Map Y coordinate.
    pub y: f64,
}

/// Player announcement payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAnnounceMessage {
    /// What was announced.
    pub announcement_type: AnnouncementType,
}
