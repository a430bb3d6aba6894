//! Correction checking.
//!
//! Compares a free-text correction against the accepted answers of a tile.

/// Normalize a phrase for comparison: trim, lowercase, and drop the
/// punctuation marks `.`, `!` and `¡`. Accents and every other character
/// (including `¿` and `?`) are significant.
fn normalize(phrase: &str) -> String {
    phrase
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '.' | '!' | '¡'))
        .collect()
}

/// True if the candidate matches any accepted correction after normalization.
pub fn is_accepted(candidate: &str, accepted: &[String]) -> bool {
    let candidate = normalize(candidate);
    accepted.iter().any(|answer| normalize(answer) == candidate)
}
