//! Integration tests for message rendering and transcripts.
//!
//! These tests build a small decoded match through the public API, the way a
//! decoder would, and check the transcript lines consumers see:
//! - Chat, ping and announcement renderings
//! - Known, hero-less and unattributed senders
//! - The fallback for events without a payload
//! - Transcript filtering driven by JSON options

use heroes_replay::{
    AnnouncementType, Message, MessageEventType, MessageTarget, Player, PlayerType, Replay,
    TranscriptOptions,
};
use std::time::Duration;

fn hms(hours: u64, minutes: u64, seconds: u64) -> Duration {
    Duration::from_secs(hours * 3600 + minutes * 60 + seconds)
}

/// Builds a five-slot match: three heroes, one player without a hero, one spectator.
fn build_match() -> Replay {
    let mut replay = Replay::new();

    let roster = [
        ("Alice", Some("Valla"), PlayerType::Human),
        ("Bob", None, PlayerType::Human),
        ("Carol", Some("Tyrande"), PlayerType::Human),
        ("Dan", Some("Muradin"), PlayerType::Computer),
        ("Watcher", None, PlayerType::Spectator),
    ];

    for (name, character, player_type) in roster {
        let mut player = Player::new(name);
        player.character = character.map(str::to_string);
        player.player_type = player_type;
        replay.players.push(player);
    }

    replay
}

// ============================================================================
// Single-message renderings
// ============================================================================

#[test]
fn test_chat_renderings() {
    let replay = build_match();

    let msg = Message::chat(hms(0, 12, 30), Some(0), MessageTarget::Team, "gg");
    assert_eq!(replay.render(&msg), "(00:12:30) [Team] Alice (Valla): gg");

    let msg = Message::chat(hms(0, 12, 30), Some(1), MessageTarget::Team, "gg");
    assert_eq!(replay.render(&msg), "(00:12:30) [Team] Bob: gg");

    let msg = Message::chat(hms(0, 12, 30), None, MessageTarget::Team, "gg");
    assert_eq!(replay.render(&msg), "(00:12:30) [Team] ((Unknown)): gg");
}

#[test]
fn test_ping_rendering_omits_text() {
    let replay = build_match();

    let msg = Message::ping(hms(0, 5, 0), Some(1), MessageTarget::Team, 88.0, 40.5);
    assert_eq!(replay.render(&msg), "(00:05:00) [Team] Bob used a ping");
}

#[test]
fn test_announcement_rendering_omits_target() {
    let replay = build_match();

    let msg = Message::announce(hms(1, 0, 0), Some(2), AnnouncementType::Behavior);
    let line = replay.render(&msg);
    assert_eq!(line, "(01:00:00) Carol (Tyrande): announced Behavior");
    assert!(!line.contains('['));
}

#[test]
fn test_spectator_chat_has_no_character() {
    let replay = build_match();

    let msg = Message::chat(hms(0, 0, 45), Some(4), MessageTarget::Observers, "nice");
    assert_eq!(replay.render(&msg), "(00:00:45) [Observers] Watcher: nice");
}

#[test]
fn test_payloadless_events_never_fail() {
    let replay = build_match();

    for event_type in [
        MessageEventType::LoadingProgress,
        MessageEventType::ServerPing,
        MessageEventType::ReconnectNotify,
        MessageEventType::Unknown(200),
    ] {
        let attributed = Message::other(hms(0, 0, 1), Some(0), event_type);
        let unattributed = Message::other(hms(0, 0, 1), None, event_type);

        let expected = format!("(00:00:01) {event_type}");
        assert_eq!(replay.render(&attributed), expected);
        assert_eq!(replay.render(&unattributed), expected);
    }
}

// ============================================================================
// Transcripts
// ============================================================================

fn build_log(replay: &mut Replay) {
    replay.messages = vec![
        Message::other(hms(0, 0, 0), Some(0), MessageEventType::LoadingProgress),
        Message::chat(hms(0, 0, 5), Some(0), MessageTarget::All, "glhf"),
        Message::ping(hms(0, 1, 10), Some(3), MessageTarget::Team, 1.0, 2.0),
        Message::chat(hms(0, 7, 2), None, MessageTarget::All, "brb"),
        Message::other(hms(0, 7, 3), None, MessageEventType::ReconnectNotify),
        Message::announce(hms(0, 9, 0), Some(2), AnnouncementType::Vitals),
        Message::chat(hms(0, 20, 0), Some(1), MessageTarget::All, "gg"),
    ];
}

#[test]
fn test_default_transcript() {
    let mut replay = build_match();
    build_log(&mut replay);

    let lines = replay.transcript(&TranscriptOptions::default());
    assert_eq!(
        lines,
        vec![
            "(00:00:05) [All] Alice (Valla): glhf",
            "(00:01:10) [Team] Dan (Muradin) used a ping",
            "(00:07:02) [All] ((Unknown)): brb",
            "(00:09:00) Carol (Tyrande): announced Vitals",
            "(00:20:00) [All] Bob: gg",
        ]
    );
}

#[test]
fn test_transcript_options_from_json() {
    let mut replay = build_match();
    build_log(&mut replay);

    let options = TranscriptOptions::from_json(
        r#"{"pings": false, "announcements": false, "unattributed": false}"#,
    )
    .unwrap();

    let lines = replay.transcript(&options);
    assert_eq!(
        lines,
        vec!["(00:00:05) [All] Alice (Valla): glhf", "(00:20:00) [All] Bob: gg"]
    );
}

#[test]
fn test_full_transcript_keeps_every_message() {
    let mut replay = build_match();
    build_log(&mut replay);

    let lines = replay.transcript(&TranscriptOptions::everything());
    assert_eq!(lines.len(), replay.messages.len());
    assert_eq!(lines[0], "(00:00:00) LoadingProgress");
    assert_eq!(lines[4], "(00:07:03) ReconnectNotify");
}

#[test]
fn test_transcript_survives_export() {
    let mut replay = build_match();
    build_log(&mut replay);

    let restored = Replay::from_json(&replay.to_json().unwrap()).unwrap();
    let options = TranscriptOptions::everything();
    assert_eq!(restored.transcript(&options), replay.transcript(&options));
}
