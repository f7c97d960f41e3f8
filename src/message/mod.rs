//! The match event log.
//!
//! A [`Message`] is one timestamped entry in the replay's message stream:
//! a chat line, a minimap ping, a player announcement, or one of the
//! bookkeeping events (loading progress, server ping, reconnect notification).
//!
//! The payload is a single tagged union, [`MessageEvent`], so the event kind
//! and its payload can never disagree and at most one payload exists.
//!
//! # Rendering
//!
//! [`Message::display`] pairs a message with its (possibly unknown) sender and
//! implements [`std::fmt::Display`]:
//!
//! | Event | Rendering |
//! |-------|-----------|
//! | Chat | `(00:12:30) [Team] Alice (Valla): gg` |
//! | Ping | `(00:05:00) [Team] Bob used a ping` |
//! | Announcement | `(01:00:00) Carol (Tyrande): announced Ability` |
//!
//! The sender part is `name (character)` when a hero is known, `name` when it
//! is not, and `((Unknown))` when the decoder could not attribute the message.
//! Events without a payload fall back to `(timestamp) <event kind>`.
//! Rendering never fails.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use heroes_replay::message::{Message, MessageTarget};
//! use heroes_replay::player::Player;
//!
//! let mut alice = Player::new("Alice");
//! alice.character = Some("Valla".to_string());
//!
//! let msg = Message::chat(Duration::from_secs(750), Some(0), MessageTarget::Team, "gg");
//! assert_eq!(msg.display(Some(&alice)).to_string(), "(00:12:30) [Team] Alice (Valla): gg");
//! assert_eq!(msg.display(None).to_string(), "(00:12:30) [Team] ((Unknown)): gg");
//! ```

mod events;

pub use events::{
    AnnouncementType, ChatMessage, MessageEventType, MessageTarget, PingMessage,
    PlayerAnnounceMessage,
};

use crate::format::format_timestamp;
use crate::player::Player;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Payload of a message event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessageEvent {
    /// A chat line.
    Chat(ChatMessage),

    /// A minimap ping.
    Ping(PingMessage),

    /// A player announcement.
    PlayerAnnounce(PlayerAnnounceMessage),

    /// An event kind that carries no rendered payload.
    Other {
        /// The recorded event kind.
        event_type: MessageEventType,
    },
}

impl MessageEvent {
    /// Returns the event kind of this payload.
    #[must_use]
    pub fn event_type(&self) -> MessageEventType {
        match self {
            MessageEvent::Chat(_) => MessageEventType::Chat,
            MessageEvent::Ping(_) => MessageEventType::Ping,
            MessageEvent::PlayerAnnounce(_) => MessageEventType::PlayerAnnounce,
            MessageEvent::Other { event_type } => *event_type,
        }
    }
}

/// One timestamped entry in the match's event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Time since match start.
    pub timestamp: Duration,

    /// Index of the sending participant in the replay's player list.
    ///
    /// `None` when the decoder could not attribute the message. This happens
    /// around disconnects and reconnects, but an unknown sender should not be
    /// read as evidence of any particular game state.
    pub player_index: Option<usize>,

    /// The event payload.
    pub event: MessageEvent,
}

impl Message {
    /// Creates a message from its parts.
    #[must_use]
    pub fn new(timestamp: Duration, player_index: Option<usize>, event: MessageEvent) -> Self {
        Self {
            timestamp,
            player_index,
            event,
        }
    }

    /// Creates a chat message.
    #[must_use]
    pub fn chat(
        timestamp: Duration,
        player_index: Option<usize>,
        target: MessageTarget,
        text: impl Into<String>,
    ) -> Self {
        let chat = ChatMessage {
            target,
            text: text.into(),
        };
        Self::new(timestamp, player_index, MessageEvent::Chat(chat))
    }

    /// Creates a ping at the given map coordinates.
    #[must_use]
    pub fn ping(
        timestamp: Duration,
        player_index: Option<usize>,
        target: MessageTarget,
        x: f64,
        y: f64,
    ) -> Self {
        Self::new(
            timestamp,
            player_index,
            MessageEvent::Ping(PingMessage { target, x, y }),
        )
    }

    /// Creates a player announcement.
    #[must_use]
    pub fn announce(
        timestamp: Duration,
        player_index: Option<usize>,
        announcement_type: AnnouncementType,
    ) -> Self {
        Self::new(
            timestamp,
            player_index,
            MessageEvent::PlayerAnnounce(PlayerAnnounceMessage { announcement_type }),
        )
    }

    /// Creates an event with no rendered payload.
    #[must_use]
    pub fn other(
        timestamp: Duration,
        player_index: Option<usize>,
        event_type: MessageEventType,
    ) -> Self {
        Self::new(timestamp, player_index, MessageEvent::Other { event_type })
    }

    /// Returns the event kind, derived from the payload.
    #[must_use]
    pub fn event_type(&self) -> MessageEventType {
        self.event.event_type()
    }

    /// Returns the chat payload, if this is a chat message.
    #[must_use]
    pub fn chat_message(&self) -> Option<&ChatMessage> {
        match &self.event {
            MessageEvent::Chat(chat) => Some(chat),
            _ => None,
        }
    }

    /// Returns the ping payload, if this is a ping.
    #[must_use]
    pub fn ping_message(&self) -> Option<&PingMessage> {
        match &self.event {
            MessageEvent::Ping(ping) => Some(ping),
            _ => None,
        }
    }

    /// Returns the announcement payload, if this is a player announcement.
    #[must_use]
    pub fn player_announce_message(&self) -> Option<&PlayerAnnounceMessage> {
        match &self.event {
            MessageEvent::PlayerAnnounce(announce) => Some(announce),
            _ => None,
        }
    }

    /// Returns whether the decoder attributed this message to a participant.
    #[must_use]
    pub fn is_attributed(&self) -> bool {
        self.player_index.is_some()
    }

    /// Returns a [`Display`](fmt::Display) adapter rendering this message
    /// as a single transcript line, attributed to `sender`.
    #[must_use]
    pub fn display<'a>(&'a self, sender: Option<&'a Player>) -> MessageDisplay<'a> {
        MessageDisplay {
            message: self,
            sender,
        }
    }
}

/// Transcript rendering of a [`Message`], created by [`Message::display`].
#[derive(Debug, Clone, Copy)]
pub struct MessageDisplay<'a> {
    message: &'a Message,
    sender: Option<&'a Player>,
}

impl MessageDisplay<'_> {
    fn write_sender(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sender {
            None => f.write_str("((Unknown))"),
            Some(player) => match player.character() {
                Some(character) => write!(f, "{} ({character})", player.name),
                None => f.write_str(&player.name),
            },
        }
    }
}

impl fmt::Display for MessageDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timestamp = format_timestamp(self.message.timestamp);

        match &self.message.event {
            MessageEvent::Chat(chat) => {
                write!(f, "({timestamp}) [{}] ", chat.target)?;
                self.write_sender(f)?;
                write!(f, ": {}", chat.text)
            }
            MessageEvent::Ping(ping) => {
                write!(f, "({timestamp}) [{}] ", ping.target)?;
                self.write_sender(f)?;
                f.write_str(" used a ping")
            }
            MessageEvent::PlayerAnnounce(announce) => {
                // Announcements have no audience
                write!(f, "({timestamp}) ")?;
                self.write_sender(f)?;
                write!(f, ": announced {}", announce.announcement_type)
            }
            MessageEvent::Other { event_type } => {
                tracing::debug!(%event_type, "rendering message without a payload");
                write!(f, "({timestamp}) {event_type}")
            }
        }
    }
}
