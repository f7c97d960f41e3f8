//! Transcript options.
//!
//! [`TranscriptOptions`] selects which message kinds a transcript contains.
//! Options load from JSON; missing keys take their defaults, so `{}` is a
//! valid document.
//!
//! | Key | Default | Includes |
//! |-----|---------|----------|
//! | `chat` | `true` | chat lines |
//! | `pings` | `true` | minimap pings |
//! | `announcements` | `true` | player announcements |
//! | `other_events` | `false` | loading progress, server pings, reconnects, unknown kinds |
//! | `unattributed` | `true` | messages whose sender is unknown |
//!
//! # Example
//!
//! ```
//! use heroes_replay::config::TranscriptOptions;
//!
//! let options = TranscriptOptions::from_json(r#"{"pings": false}"#).unwrap();
//! assert!(options.chat);
//! assert!(!options.pings);
//! ```

use crate::error::{ModelError, Result};
use crate::message::{Message, MessageEvent};
use serde::{Deserialize, Serialize};

/// Which messages a transcript includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptOptions {
    /// Include chat lines.
    pub chat: bool,

    /// Include minimap pings.
    pub pings: bool,

    /// Include player announcements.
    pub announcements: bool,

    /// Include events without a rendered payload.
    pub other_events: bool,

    /// Include messages the decoder could not attribute to a participant.
    pub unattributed: bool,
}

impl Default for TranscriptOptions {
    fn default() -> Self {
        Self {
            chat: true,
            pings: true,
            announcements: true,
            other_events: false,
            unattributed: true,
        }
    }
}

impl TranscriptOptions {
    /// Options that include chat lines only.
    #[must_use]
    pub fn chat_only() -> Self {
        Self {
            chat: true,
            pings: false,
            announcements: false,
            other_events: false,
            unattributed: true,
        }
    }

    /// Options that include every message.
    #[must_use]
    pub fn everything() -> Self {
        Self {
            other_events: true,
            ..Self::default()
        }
    }

    /// Parses and validates options from a JSON document.
    ///
    /// # Errors
    ///
    /// - `ModelError::Json` if the document is not valid JSON for these options
    /// - `ModelError::InvalidOptions` if no message kind is selected
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Checks that at least one message kind is selected.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidOptions` when every kind is disabled.
    pub fn validate(&self) -> Result<()> {
        if !(self.chat || self.pings || self.announcements || self.other_events) {
            return Err(ModelError::InvalidOptions {
                reason: "no message kind selected".to_string(),
            });
        }
        Ok(())
    }

    /// Returns whether `message` passes these options.
    #[must_use]
    pub fn includes(&self, message: &Message) -> bool {
        if !self.unattributed && !message.is_attributed() {
            return false;
        }
        match message.event {
            MessageEvent::Chat(_) => self.chat,
            MessageEvent::Ping(_) => self.pings,
            MessageEvent::PlayerAnnounce(_) => self.announcements,
            MessageEvent::Other { .. } => self.other_events,
        }
    }
}
