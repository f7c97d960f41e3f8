//! Integration tests for the participant model.
//!
//! These tests populate players incrementally, as a decoder does while it
//! walks the replay's event streams, and verify:
//! - Defaults are structurally complete and per-instance
//! - Optional score statistics keep "not tracked" apart from zero
//! - Award and upgrade codes pass unknown values through
//! - Party grouping and JSON export

use heroes_replay::{
    AwardCategory, HeroUnit, MatchAwardType, Player, Replay, ScoreResult, Talent, UpgradeEvent,
    UpgradeEventType,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Score screen values as decoded from a modern replay.
fn tracked_score() -> ScoreResult {
    ScoreResult {
        level: 20,
        takedowns: 14,
        solo_kills: 6,
        assists: 8,
        deaths: 2,
        highest_kill_streak: 9,
        hero_damage: 61_240,
        siege_damage: 98_011,
        structure_damage: 20_300,
        minion_damage: 70_000,
        creep_damage: 8_911,
        summon_damage: 7_711,
        time_cc_enemy_heroes: Some(Duration::from_secs(42)),
        healing: Some(0),
        self_healing: 3_200,
        damage_taken: Some(54_000),
        experience_contribution: 15_600,
        time_spent_dead: Duration::from_secs(71),
        match_awards: vec![MatchAwardType::Mvp, MatchAwardType::MostDragonShrinesCaptured],
        ..ScoreResult::default()
    }
}

#[test]
fn test_fresh_players_are_complete() {
    let players: Vec<Player> = (0..10).map(|i| Player::new(format!("P{i}"))).collect();

    for player in &players {
        assert!(player.talents.is_empty());
        assert!(player.hero_units.is_empty());
        assert!(player.upgrade_events.is_empty());
        assert!(player.miscellaneous_upgrade_events.is_empty());
        assert!(player.miscellaneous_score_results.is_empty());
        assert_eq!(player.score_result, ScoreResult::default());
        assert_eq!(player.character(), None);
    }
}

#[test]
fn test_incremental_population() {
    let mut player = Player::new("Alice");

    // Details stream
    player.battle_net_region_id = 2;
    player.battle_net_sub_id = 1;
    player.battle_net_id = 5_551_234;
    player.battle_tag = 1_337;
    player.team = 1;
    player.color = vec![255, 0, 66, 255];

    // Lobby / init data
    player.character = Some("Valla".to_string());
    player.skin_and_skin_tint = Some("ValaWitchHunter".to_string());
    player.character_level = 20;
    player.account_level = 412;

    // Tracker events
    player.talents.push(Talent::new(11, Duration::from_secs(60)).with_name("Hot Pursuit"));
    player.talents.push(Talent::new(907, Duration::from_secs(290)));
    player.hero_units.push(HeroUnit {
        unit_id: 7,
        name: "HeroDemonHunter".to_string(),
        time_span_born: Duration::from_secs(5),
        time_span_died: None,
    });
    player.upgrade_events.push(UpgradeEvent::new(
        Duration::from_secs(300),
        UpgradeEventType::from(250u32),
        12,
    ));
    player
        .miscellaneous_upgrade_events
        .insert("VallaHatredStacks".to_string(), true);
    player
        .miscellaneous_score_results
        .insert("TeamfightEscapesPerformed".to_string(), 3);
    player.score_result = tracked_score();
    player.is_winner = true;

    assert_eq!(player.battle_tag_name().as_deref(), Some("Alice#1337"));
    assert_eq!(player.talents[0].talent_name.as_deref(), Some("Hot Pursuit"));
    assert!(!player.talents[1].is_resolved());
    assert!(player.upgrade_events[0].upgrade_event_type.is_unknown());
    assert_eq!(player.upgrade_events[0].upgrade_event_type.code(), 250);
    assert_eq!(player.mount_and_mount_tint, None);
    assert!(player.score_result.has_map_specific_award());
    assert_eq!(player.awards().count(), 2);
}

#[test]
fn test_untracked_statistics_stay_absent() {
    let mut legacy = Player::new("Old");
    legacy.score_result.takedowns = 4;
    legacy.score_result.time_spent_dead = Duration::ZERO;

    let mut modern = Player::new("New");
    modern.score_result = tracked_score();

    // "Never tracked" and "healed for zero" are different facts
    assert_eq!(legacy.score_result.healing, None);
    assert_eq!(modern.score_result.healing, Some(0));

    let mut replay = Replay::new();
    replay.players = vec![legacy, modern];
    let restored = Replay::from_json(&replay.to_json().unwrap()).unwrap();

    assert_eq!(restored.players[0].score_result.healing, None);
    assert_eq!(restored.players[0].score_result.damage_taken, None);
    assert_eq!(restored.players[0].score_result.time_cc_enemy_heroes, None);
    assert_eq!(restored.players[1].score_result.healing, Some(0));
    assert_eq!(
        restored.players[1].score_result.time_cc_enemy_heroes,
        Some(Duration::from_secs(42))
    );
}

#[test]
fn test_award_classification() {
    for code in 1u32..=24 {
        assert_eq!(MatchAwardType::from(code).category(), AwardCategory::Generic);
    }
    for code in [1000u32, 1001, 1011, 1016, 1500, u32::MAX] {
        assert_eq!(MatchAwardType::from(code).category(), AwardCategory::MapSpecific);
    }

    let mut score = ScoreResult::default();
    score.match_awards.push(MatchAwardType::from(1050u32));
    assert!(score.has_map_specific_award());
    assert_eq!(u32::from(score.match_awards[0]), 1050);
}

#[test]
fn test_hand_built_award_codes_survive_export() {
    let mut player = Player::new("Raw");
    player.score_result.match_awards =
        vec![MatchAwardType::Unknown(1), MatchAwardType::Unknown(1004)];
    assert!(player.score_result.has_award(MatchAwardType::Mvp));
    assert!(player.score_result.has_award(MatchAwardType::MostDragonShrinesCaptured));

    let mut replay = Replay::new();
    replay.players.push(player);
    let restored = Replay::from_json(&replay.to_json().unwrap()).unwrap();

    assert_eq!(restored, replay);
    assert_eq!(restored.players[0].score_result.match_awards[0].to_string(), "MVP");
}

#[test]
fn test_party_grouping() {
    let mut replay = Replay::new();
    for (name, party) in [("A", 0), ("B", 300), ("C", 100), ("D", 300), ("E", 100), ("F", 0)] {
        let mut player = Player::new(name);
        player.party_value = party;
        replay.players.push(player);
    }

    let parties: Vec<Vec<&str>> = replay
        .parties()
        .iter()
        .map(|party| party.iter().map(|p| p.name.as_str()).collect())
        .collect();

    assert_eq!(parties, vec![vec!["C", "E"], vec!["B", "D"]]);

    let grouped: HashSet<&str> = parties.iter().flatten().copied().collect();
    assert!(!grouped.contains("A"));
    assert!(!grouped.contains("F"));
}

#[test]
fn test_decoded_replay_shares_read_only() {
    let mut replay = Replay::new();
    let mut player = Player::new("Shared");
    player.score_result = tracked_score();
    replay.players.push(player);

    let snapshot = Arc::new(replay);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let snapshot = Arc::clone(&snapshot);
            thread::spawn(move || snapshot.players[0].score_result.takedowns)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 14);
    }
}
