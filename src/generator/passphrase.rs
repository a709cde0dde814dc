//! Passphrase generation from a fixed wordlist

use crate::random::{RandomSource, SystemRandom, sample_indices};

/// Wordlist sampled for passphrases
pub const WORDLIST: [&str; 24] = [
    "apple", "banana", "cherry", "dragon", "eagle", "forest", "garden", "house", "island",
    "jungle", "knight", "lemon", "mountain", "ocean", "planet", "queen", "river", "sunset",
    "tiger", "umbrella", "village", "window", "yellow", "zebra",
];

/// Separator between passphrase words
pub const WORD_SEPARATOR: &str = "-";

/// Generate a passphrase of `word_count` words, sampled with replacement
/// from [`WORDLIST`] and joined with hyphens. Zero words yields the empty
/// string.
pub fn generate_passphrase(word_count: usize) -> String {
    generate_passphrase_with(word_count, &mut SystemRandom::new())
}

/// Generate a passphrase from an explicit byte source
pub fn generate_passphrase_with<R: RandomSource>(word_count: usize, source: &mut R) -> String {
    if word_count == 0 {
        return String::new();
    }

    let words: Vec<&str> = sample_indices(source, word_count, WORDLIST.len())
        .into_iter()
        .map(|i| WORDLIST[i])
        .collect();
    words.join(WORD_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedBytes;

    #[test]
    fn test_generate_passphrase_word_count() {
        let phrase = generate_passphrase(4);
        let words: Vec<&str> = phrase.split('-').collect();
        assert_eq!(words.len(), 4);
        assert_eq!(phrase.matches('-').count(), 3);
        for word in words {
            assert!(WORDLIST.contains(&word), "{word} not in wordlist");
        }
    }

    #[test]
    fn test_generate_passphrase_single_word() {
        let phrase = generate_passphrase(1);
        assert!(WORDLIST.contains(&phrase.as_str()));
    }

    #[test]
    fn test_generate_passphrase_zero_words() {
        assert_eq!(generate_passphrase(0), "");
    }

    #[test]
    fn test_generate_passphrase_deterministic() {
        // 24 % 24 = 0 -> "apple", 255 % 24 = 15 -> "queen"
        let mut source = FixedBytes::new(vec![0, 23, 24, 255]);
        let phrase = generate_passphrase_with(4, &mut source);
        assert_eq!(phrase, "apple-zebra-apple-queen");
    }
}
