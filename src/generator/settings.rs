//! Password generation settings

use serde::{Deserialize, Serialize};

/// Options controlling random password generation.
///
/// Length is expected to stay within
/// [`PASSWORD_MIN_LENGTH`](crate::PASSWORD_MIN_LENGTH)..=[`PASSWORD_MAX_LENGTH`](crate::PASSWORD_MAX_LENGTH);
/// the settings form validates the bound before generation is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordSettings {
    /// Password length in characters
    pub length: usize,
    /// Include uppercase letters (A-Z)
    pub include_uppercase: bool,
    /// Include lowercase letters (a-z)
    pub include_lowercase: bool,
    /// Include digits (0-9)
    pub include_numbers: bool,
    /// Include symbols (!@#$%...)
    pub include_symbols: bool,
    /// Drop easily confused characters (il1Lo0O)
    pub exclude_similar: bool,
    /// Drop ambiguous punctuation (brackets, quotes, ...)
    pub exclude_ambiguous: bool,
}

impl Default for PasswordSettings {
    fn default() -> Self {
        Self {
            length: crate::DEFAULT_PASSWORD_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: false,
            exclude_ambiguous: false,
        }
    }
}

impl PasswordSettings {
    /// Copy of these settings with a different length
    pub fn with_length(self, length: usize) -> Self {
        Self { length, ..self }
    }

    /// Copy of these settings with the uppercase flag changed
    pub fn with_uppercase(self, include_uppercase: bool) -> Self {
        Self { include_uppercase, ..self }
    }

    /// Copy of these settings with the lowercase flag changed
    pub fn with_lowercase(self, include_lowercase: bool) -> Self {
        Self { include_lowercase, ..self }
    }

    /// Copy of these settings with the numbers flag changed
    pub fn with_numbers(self, include_numbers: bool) -> Self {
        Self { include_numbers, ..self }
    }

    /// Copy of these settings with the symbols flag changed
    pub fn with_symbols(self, include_symbols: bool) -> Self {
        Self { include_symbols, ..self }
    }

    /// Copy of these settings with the similar-character exclusion changed
    pub fn with_exclude_similar(self, exclude_similar: bool) -> Self {
        Self { exclude_similar, ..self }
    }

    /// Copy of these settings with the ambiguous-character exclusion changed
    pub fn with_exclude_ambiguous(self, exclude_ambiguous: bool) -> Self {
        Self { exclude_ambiguous, ..self }
    }
}
