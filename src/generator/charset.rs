//! Character alphabet assembly

use crate::error::{CoreError, Result};
use crate::generator::settings::PasswordSettings;

/// Uppercase category alphabet
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase category alphabet
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Digit category alphabet
pub const NUMBERS: &str = "0123456789";

/// Symbol category alphabet
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters easily confused with one another
pub const SIMILAR_CHARS: &str = "il1Lo0O";

/// Punctuation that renders ambiguously in many fonts and contexts
pub const AMBIGUOUS_CHARS: &str = r#"{}[]()/\'"`~,;:.<>"#;

/// Build the effective alphabet for the given settings.
///
/// Enabled categories are concatenated in fixed order (uppercase, lowercase,
/// numbers, symbols), then exclusion filters are applied. Errors with
/// [`CoreError::EmptyCharset`] when no category is enabled or when the
/// exclusions remove every character.
pub fn build_charset(settings: &PasswordSettings) -> Result<Vec<char>> {
    let mut charset = String::new();

    if settings.include_uppercase {
        charset.push_str(UPPERCASE);
    }
    if settings.include_lowercase {
        charset.push_str(LOWERCASE);
    }
    if settings.include_numbers {
        charset.push_str(NUMBERS);
    }
    if settings.include_symbols {
        charset.push_str(SYMBOLS);
    }

    if charset.is_empty() {
        return Err(CoreError::EmptyCharset(
            "at least one character type must be enabled".to_string(),
        ));
    }

    let chars: Vec<char> = charset
        .chars()
        .filter(|c| !(settings.exclude_similar && SIMILAR_CHARS.contains(*c)))
        .filter(|c| !(settings.exclude_ambiguous && AMBIGUOUS_CHARS.contains(*c)))
        .collect();

    if chars.is_empty() {
        return Err(CoreError::EmptyCharset(
            "exclusions removed every character".to_string(),
        ));
    }

    Ok(chars)
}
