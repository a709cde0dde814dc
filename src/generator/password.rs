//! Random password generation

use crate::error::Result;
use crate::generator::charset::build_charset;
use crate::generator::settings::PasswordSettings;
use crate::random::{RandomSource, SystemRandom, sample_indices};

/// Generate a random password using the system CSPRNG.
///
/// Builds the effective alphabet from `settings`, then draws
/// `settings.length` characters from it. Propagates
/// [`CoreError::EmptyCharset`](crate::CoreError::EmptyCharset) when the
/// settings leave no characters to draw from.
///
/// # Example
/// ```
/// use pmcore::{PasswordSettings, generate_password};
///
/// let settings = PasswordSettings::default().with_length(12);
/// let password = generate_password(&settings).unwrap();
/// assert_eq!(password.chars().count(), 12);
/// ```
pub fn generate_password(settings: &PasswordSettings) -> Result<String> {
    generate_password_with(settings, &mut SystemRandom::new())
}

/// Generate a random password from an explicit byte source
pub fn generate_password_with<R: RandomSource>(
    settings: &PasswordSettings,
    source: &mut R,
) -> Result<String> {
    let charset = build_charset(settings)?;
    let password = sample_indices(source, settings.length, charset.len())
        .into_iter()
        .map(|i| charset[i])
        .collect();
    Ok(password)
}
