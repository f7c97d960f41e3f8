//! The decoded match aggregate.
//!
//! [`Replay`] owns the participant list and the message log. Messages refer to
//! their sender by index into `players`, so the whole graph is plain owned data:
//! the decoder mutates it during a single pass, after which it can be shared
//! read-only (for example behind an `Arc`) without any locking.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use heroes_replay::{Message, MessageTarget, Player, Replay, TranscriptOptions};
//!
//! let mut replay = Replay::new();
//! let mut alice = Player::new("Alice");
//! alice.character = Some("Valla".to_string());
//! replay.players.push(alice);
//! replay
//!     .messages
//!     .push(Message::chat(Duration::from_secs(750), Some(0), MessageTarget::Team, "gg"));
//!
//! let lines = replay.transcript(&TranscriptOptions::default());
//! assert_eq!(lines, vec!["(00:12:30) [Team] Alice (Valla): gg"]);
//! ```

use crate::config::TranscriptOptions;
use crate::error::Result;
use crate::message::Message;
use crate::player::Player;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Participants and message log of one decoded match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Replay {
    /// Participants in slot order.
    pub players: Vec<Player>,

    /// Message log in stream order.
    pub messages: Vec<Message>,
}

impl Replay {
    /// Creates an empty replay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the participant at `index`.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Resolves the sender of a message.
    ///
    /// Returns `None` for unattributed messages and for indices that do not
    /// name a participant; both render as an unknown sender.
    #[must_use]
    pub fn sender_of(&self, message: &Message) -> Option<&Player> {
        let index = message.player_index?;
        let sender = self.players.get(index);
        if sender.is_none() {
            warn!(
                index,
                players = self.players.len(),
                "message sender index out of range, treating as unknown"
            );
        }
        sender
    }

    /// Renders one message with its resolved sender.
    #[must_use]
    pub fn render(&self, message: &Message) -> String {
        message.display(self.sender_of(message)).to_string()
    }

    /// Renders every message that passes `options`, in stream order.
    #[must_use]
    pub fn transcript(&self, options: &TranscriptOptions) -> Vec<String> {
        self.messages
            .iter()
            .filter(|message| options.includes(message))
            .map(|message| self.render(message))
            .collect()
    }

    /// Returns the messages sent by the participant at `index`.
    pub fn messages_from(&self, index: usize) -> impl Iterator<Item = &Message> {
        self.messages
            .iter()
            .filter(move |message| message.player_index == Some(index))
    }

    /// Returns the participants on `team`, in slot order.
    pub fn team(&self, team: u32) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |player| player.team == team)
    }

    /// Returns the participants on the winning team.
    pub fn winners(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|player| player.is_winner)
    }

    /// Groups participants that queued together.
    ///
    /// Each group holds two or more participants sharing a non-zero party key,
    /// in slot order. Groups are ordered by party key.
    #[must_use]
    pub fn parties(&self) -> Vec<Vec<&Player>> {
        let mut by_key: BTreeMap<i64, Vec<&Player>> = BTreeMap::new();
        for player in self.players.iter().filter(|p| p.is_in_party()) {
            by_key.entry(player.party_value).or_default().push(player);
        }

        by_key
            .into_values()
            .filter(|members| members.len() > 1)
            .collect()
    }

    /// Serializes the replay to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        debug!(
            players = self.players.len(),
            messages = self.messages.len(),
            bytes = json.len(),
            "exported replay"
        );
        Ok(json)
    }

    /// Serializes the replay to indented JSON.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Json` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restores a replay from JSON produced by [`Replay::to_json`].
    ///
    /// Missing fields take their defaults, so exports from older versions of
    /// the model still load.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Json` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        let replay: Self = serde_json::from_str(json)?;
        debug!(
            players = replay.players.len(),
            messages = replay.messages.len(),
            "imported replay"
        );
        Ok(replay)
    }
}
