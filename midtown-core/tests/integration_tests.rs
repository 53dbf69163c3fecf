//! Integration tests for midtown-core
//!
//! These drive the applets through `MidtownContext` the way a front end
//! does, with a real settings file and a real logs database in a temp dir.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use tempfile::TempDir;

use midtown_core::domain::cipher::{decrypt, encrypt, transform};
use midtown_core::domain::rps::judge;
use midtown_core::domain::table::generate;
use midtown_core::config::{Config, MAX_ROWS_LIMIT};
use midtown_core::services::{CipherRequest, Player};
use midtown_core::{
    CipherMode, Choice, EntryPoint, Error, LogEvent, LogFilter, LoggingService, MidtownContext,
    OperationResult, Panel, RoundResult,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn create_context(temp_dir: &TempDir) -> MidtownContext {
    MidtownContext::new(temp_dir.path()).expect("Failed to create context")
}

fn write_settings(temp_dir: &TempDir, json: &str) {
    std::fs::write(temp_dir.path().join("settings.json"), json).unwrap();
}

// ============================================================================
// Applet properties
// ============================================================================

#[test]
fn test_cipher_round_trip_over_many_shifts() {
    let texts = ["", "Hello, World!", "MidTown IT 2023 - Caesar.", "ümlaut ok?"];
    for text in texts {
        for k in -60..=60 {
            assert_eq!(decrypt(&encrypt(text, k), k), text);
            assert_eq!(
                transform(&transform(text, k, CipherMode::Encrypt), k, CipherMode::Decrypt),
                text
            );
        }
    }
}

#[test]
fn test_cipher_letters_keep_case() {
    let out = encrypt("AbCxYz", 11);
    for (before, after) in "AbCxYz".chars().zip(out.chars()) {
        assert_eq!(before.is_ascii_uppercase(), after.is_ascii_uppercase());
        assert_ne!(before, after);
    }
}

#[test]
fn test_listed_rps_and_table_cases() {
    assert_eq!(judge(Choice::Rock, Choice::Scissors), RoundResult::Player1Wins);
    assert_eq!(judge(Choice::Scissors, Choice::Rock), RoundResult::Player2Wins);
    assert_eq!(judge(Choice::Paper, Choice::Paper), RoundResult::Draw);

    let pairs: Vec<(i64, i64)> = generate(3, 4).unwrap().into_iter().map(Into::into).collect();
    assert_eq!(pairs, vec![(1, 3), (2, 6), (3, 9), (4, 12)]);
    assert!(matches!(generate(5, 0), Err(Error::InvalidRange(_))));
}

// ============================================================================
// Hub session
// ============================================================================

#[test]
fn test_full_hub_session() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = create_context(&temp_dir);
    assert_eq!(ctx.hub.current(), Panel::Home);

    ctx.open(Panel::RockPaperScissors);
    ctx.rps_service.start("Ada", "Grace").unwrap();
    ctx.rps_service.select(Player::One, Choice::Paper).unwrap();
    let outcome = ctx
        .rps_service
        .select(Player::Two, Choice::Rock)
        .unwrap()
        .expect("both players chose");
    assert_eq!(outcome.winner(), Some("Ada"));

    ctx.open(Panel::MultiplicationTable);
    let table = ctx.table_service.build("Ada", 9, Some(3)).unwrap();
    assert_eq!(table.text, "Ada's Table:\n\n1 x 9 = 9\n2 x 9 = 18\n3 x 9 = 27\n");

    ctx.open(Panel::CaesarCipher);
    let request = CipherRequest {
        key: "13".to_string(),
        text: "Why did the chicken cross the road?".to_string(),
        mode: CipherMode::Encrypt,
        classic: false,
    };
    let enc = ctx.cipher_service.run(&request).unwrap();
    assert_eq!(enc.output, "Jul qvq gur puvpxra pebff gur ebnq?");

    assert_eq!(ctx.hub.title(), "Caesar Cipher");
}

#[test]
fn test_settings_drive_table_limits() {
    let temp_dir = TempDir::new().unwrap();
    write_settings(&temp_dir, r#"{"app":{"defaultRows":4,"maxRows":6}}"#);
    let ctx = create_context(&temp_dir);

    let table = ctx.table_service.build("Grace", 5, None).unwrap();
    assert_eq!(table.rows.len(), 4);

    let err = ctx.table_service.build("Grace", 5, Some(7)).unwrap_err();
    assert!(matches!(err, Error::InvalidRange(_)));
}

#[test]
fn test_oversized_row_limit_is_capped() {
    let temp_dir = TempDir::new().unwrap();
    write_settings(&temp_dir, r#"{"app":{"maxRows":9223372036854775807}}"#);
    let ctx = create_context(&temp_dir);

    assert_eq!(ctx.table_service.max_rows(), MAX_ROWS_LIMIT);
    let err = ctx.table_service.build("Ada", 1, Some(5_000_000)).unwrap_err();
    assert!(matches!(err, Error::InvalidRange(_)));
}

#[test]
fn test_signed_in_players_are_offered_next_session() {
    let temp_dir = TempDir::new().unwrap();
    write_settings(&temp_dir, r#"{"app":{"maxRows":30},"window":{"width":1100}}"#);

    let mut ctx = create_context(&temp_dir);
    ctx.sign_in("Ada", "Grace").unwrap();

    let next = create_context(&temp_dir);
    assert_eq!(next.config.default_player_one.as_deref(), Some("Ada"));
    assert_eq!(next.config.default_player_two.as_deref(), Some("Grace"));
    assert_eq!(next.config.max_rows, 30);

    let raw: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(temp_dir.path().join("settings.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(raw["window"]["width"], 1100);
    assert_eq!(Config::load(temp_dir.path()).unwrap().max_rows, 30);
}

#[test]
fn test_errors_serialize_as_failed_operations() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = create_context(&temp_dir);

    let result: OperationResult<_> = ctx.table_service.build("", 5, None).into();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("Username empty"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_log_history_never_contains_user_input() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = create_context(&temp_dir);
    let logger = LoggingService::new(temp_dir.path(), EntryPoint::Hub, "test").unwrap();

    for panel in Panel::APPLETS {
        ctx.open(panel);
        logger
            .log(LogEvent::new("panel_opened").with_applet(panel.slug()))
            .unwrap();
    }
    let request = CipherRequest {
        key: "secret".to_string(),
        text: "top secret plans".to_string(),
        mode: CipherMode::Encrypt,
        classic: false,
    };
    ctx.cipher_service.run(&request).unwrap();
    logger
        .log(LogEvent::new("command_executed").with_command("cipher").with_applet("cipher"))
        .unwrap();

    let entries = logger.query(&LogFilter::recent(50)).unwrap();
    assert_eq!(entries.len(), 4);
    let dump = serde_json::to_string(&entries).unwrap();
    assert!(!dump.contains("secret"));
    assert!(entries.iter().all(|e| e.entry_point == "hub"));
}
