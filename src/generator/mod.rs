//! Password, PIN and passphrase generation
//!
//! This module provides:
//! - Generation settings with immutable update constructors
//! - Charset assembly from category flags and exclusion filters
//! - The three generators, each parameterized over a [`RandomSource`](crate::random::RandomSource)

pub mod charset;
pub mod passphrase;
pub mod password;
pub mod pin;
pub mod settings;

pub use charset::build_charset;
pub use passphrase::{generate_passphrase, generate_passphrase_with};
pub use password::{generate_password, generate_password_with};
pub use pin::{generate_pin, generate_pin_with};
pub use settings::PasswordSettings;
