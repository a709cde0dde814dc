//! Integration tests for pmcore
//!
//! Exercises the generate -> score -> record flow end to end, including
//! file-backed history persistence.

use pmcore::{
    FileStore, FixedBytes, History, PasswordSettings, StrengthLevel, check_strength,
    generate_passphrase_with, generate_password, generate_password_with, generate_pin,
};
use tempfile::TempDir;

/// History backed by a JSON file in a fresh temp directory
fn setup_file_history() -> (History<FileStore>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path().join("history.json"));
    let history = History::open(store).expect("Failed to open history");
    (history, temp_dir)
}

#[test]
fn test_generate_score_and_record() {
    let (mut history, _temp_dir) = setup_file_history();
    let settings = PasswordSettings::default();

    let password = generate_password(&settings).unwrap();
    assert_eq!(password.chars().count(), settings.length);

    // 16 chars from the full charset is at least medium in practice; the
    // scorer must at minimum hand back a clamped score and some feedback
    let strength = check_strength(&password);
    assert!(strength.score <= 6);
    assert!(!strength.feedback.is_empty());

    let entry = history.record(&password, &settings).unwrap();
    assert_eq!(entry.password, password);
    assert_eq!(entry.settings, settings);
}

#[test]
fn test_history_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("history.json");
    let settings = PasswordSettings::default().with_length(20);

    {
        let mut history = History::open(FileStore::new(&path)).unwrap();
        for _ in 0..5 {
            let password = generate_password(&settings).unwrap();
            history.record(&password, &settings).unwrap();
        }
    }

    let history = History::open(FileStore::new(&path)).unwrap();
    assert_eq!(history.len(), 5);
    for entry in history.entries() {
        assert_eq!(entry.password.chars().count(), 20);
        assert_eq!(entry.settings.length, 20);
    }
}

#[test]
fn test_history_cap_with_file_store() {
    let (mut history, _temp_dir) = setup_file_history();
    let settings = PasswordSettings::default();

    for _ in 0..25 {
        let password = generate_password(&settings).unwrap();
        history.record(&password, &settings).unwrap();
    }
    assert_eq!(history.len(), pmcore::HISTORY_LIMIT);
}

#[test]
fn test_clear_then_reopen_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("history.json");

    let mut history = History::open(FileStore::new(&path)).unwrap();
    let settings = PasswordSettings::default();
    history
        .record(&generate_password(&settings).unwrap(), &settings)
        .unwrap();
    history.clear().unwrap();

    let reopened = History::open(FileStore::new(&path)).unwrap();
    assert!(reopened.is_empty());
}

#[test]
fn test_pin_and_passphrase_shapes() {
    let pin = generate_pin(6).unwrap();
    assert_eq!(pin.len(), 6);
    assert!(pin.chars().all(|c| c.is_ascii_digit()));

    let mut source = FixedBytes::new(vec![3, 141, 59, 26]);
    let phrase = generate_passphrase_with(4, &mut source);
    assert_eq!(phrase.split('-').count(), 4);
}

#[test]
fn test_deterministic_generation_with_script() {
    // Digits-only with similar characters excluded leaves "23456789"
    let settings = PasswordSettings::default()
        .with_uppercase(false)
        .with_lowercase(false)
        .with_symbols(false)
        .with_exclude_similar(true)
        .with_length(4);
    let mut source = FixedBytes::new(vec![0, 1, 7, 8]);
    let password = generate_password_with(&settings, &mut source).unwrap();
    assert_eq!(password, "2392");
}

#[test]
fn test_strength_levels_for_known_inputs() {
    assert_eq!(check_strength("").level, StrengthLevel::Weak);
    assert_eq!(check_strength("aaaaaaaa").level, StrengthLevel::Weak);
    assert_eq!(
        check_strength("Tr0ub4dor&3xyz").level,
        StrengthLevel::VeryStrong
    );
}
