//! # Heroes Replay
//!
//! The decoded match model for Heroes of the Storm replays.
//!
//! A separate decoder reads the replay container and its versioned event
//! streams; this crate holds what it finds:
//! - **Participants**: identity, hero and cosmetic picks, talents, hero units
//!   and the end-of-match score screen
//! - **Message log**: chat, pings and player announcements with their
//!   (possibly unknown) sender
//! - **Taxonomy**: player kinds, AI difficulty, upgrade and award codes, with
//!   unknown codes passed through untouched
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use heroes_replay::{Message, MessageTarget, Player, Replay, TranscriptOptions};
//!
//! let mut replay = Replay::new();
//!
//! let mut alice = Player::new("Alice");
//! alice.character = Some("Valla".to_string());
//! alice.score_result.takedowns = 12;
//! replay.players.push(alice);
//!
//! replay.messages.push(Message::chat(
//!     Duration::from_secs(750),
//!     Some(0),
//!     MessageTarget::Team,
//!     "gg",
//! ));
//! replay.messages.push(Message::chat(
//!     Duration::from_secs(751),
//!     None,
//!     MessageTarget::All,
//!     "wp",
//! ));
//!
//! for line in replay.transcript(&TranscriptOptions::default()) {
//!     println!("{line}");
//! }
//! // (00:12:30) [Team] Alice (Valla): gg
//! // (00:12:31) [All] ((Unknown)): wp
//! ```
//!
//! ## Module Overview
//!
//! - [`error`] - Error types and result alias
//! - [`format`] - Match clock formatting
//! - [`taxonomy`] - Categorical enumerations and code tables
//! - [`player`] - Participant model and score screen
//! - [`message`] - Message log entries and transcript rendering
//! - [`config`] - Transcript options
//! - [`replay`] - The match aggregate tying participants and messages together
//!
//! ## Absence
//!
//! Fields a replay version may never record are `Option`s. `None` always means
//! "not recorded" and is kept distinct from zero or empty, both in memory and
//! in JSON exports.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod format;
pub mod message;
pub mod player;
pub mod replay;
pub mod taxonomy;

// Re-export commonly used types at the crate root
pub use config::TranscriptOptions;
pub use error::{ModelError, Result};
pub use format::format_timestamp;
pub use message::{
    AnnouncementType, ChatMessage, Message, MessageDisplay, MessageEvent, MessageEventType,
    MessageTarget, PingMessage, PlayerAnnounceMessage,
};
pub use player::{HeroUnit, Player, ScoreResult, Talent, UpgradeEvent};
pub use replay::Replay;
pub use taxonomy::{AwardCategory, Difficulty, MatchAwardType, PlayerType, UpgradeEventType};
