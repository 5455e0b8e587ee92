use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize text for matching: lowercase, decompose (NFD), drop combining
/// marks, trim surrounding whitespace. "Café" and "cafe" compare equal after
/// this. Idempotent.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    stripped.trim().to_string()
}
