//! # Password Master Core
//!
//! Core library for the Password Master generator: randomized passwords,
//! PINs and passphrases, heuristic strength scoring, and a bounded history
//! of generated values over a pluggable key-value store.
//!
//! ## Features
//!
//! - Cryptographically secure character sampling
//! - Charset assembly from category flags with similar/ambiguous exclusions
//! - Rule-based strength scoring with human-readable feedback
//! - FIFO-capped generation history with JSON persistence
//!
//! ## Example
//!
//! ```
//! use pmcore::{PasswordSettings, generate_password, check_strength};
//!
//! let settings = PasswordSettings::default();
//! let password = generate_password(&settings).unwrap();
//! assert_eq!(password.chars().count(), settings.length);
//!
//! let strength = check_strength(&password);
//! println!("{}: {:?}", strength.level, strength.feedback);
//! ```

pub mod error;
pub mod generator;
pub mod history;
pub mod random;
pub mod strength;

// Re-export main types
pub use error::{CoreError, Result};
pub use generator::{
    PasswordSettings, build_charset, generate_password, generate_password_with, generate_pin,
    generate_pin_with, generate_passphrase, generate_passphrase_with,
};
pub use history::{FileStore, History, HistoryEntry, KeyValueStore, MemoryStore};
pub use random::{FixedBytes, RandomSource, SystemRandom};
pub use strength::{PasswordStrength, StrengthLevel, check_strength};

/// Minimum password length accepted by the settings form
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum password length accepted by the settings form
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Default password length
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Maximum number of retained history entries
pub const HISTORY_LIMIT: usize = 20;

/// Storage key the history list is persisted under
pub const HISTORY_KEY: &str = "password-history";
