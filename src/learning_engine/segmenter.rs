//! Phonetic breakdown of French words.
//!
//! Multi-letter sounds (`ou`, `eau`, `on`, …) are highlighted so a reader
//! can see them inside a word. A handful of doubled-consonant sequences
//! (`omm`, `onn`, …) look like a nasal sound but are not one; they are
//! consumed as plain text before the shorter sound can match inside them.

use crate::learning_engine::models::WordPart;

/// Sounds to highlight.
pub const SPECIAL_SOUNDS: &[&str] = &[
    "eau", "oeu", "oin", "ien",
    "ou", "oi", "ai", "ei", "au", "eu", "ui", "an", "en", "in", "on", "un", "om", "em", "im",
];

/// Sequences that overlap a sound but must stay plain.
pub const EXCEPTIONS: &[&str] = &["omm", "enn", "onn", "amm", "emm", "imm"];

/// All patterns, longest first. Exceptions precede sounds of equal length.
fn patterns() -> Vec<&'static str> {
    let mut all: Vec<&'static str> = Vec::with_capacity(EXCEPTIONS.len() + SPECIAL_SOUNDS.len());
    for p in EXCEPTIONS.iter().chain(SPECIAL_SOUNDS) {
        if !all.contains(p) {
            all.push(*p);
        }
    }
    // Stable sort keeps list order within a length.
    all.sort_by(|a, b| b.len().cmp(&a.len()));
    all
}

pub fn is_special_sound(text: &str) -> bool {
    let lower = text.to_lowercase();
    SPECIAL_SOUNDS.contains(&lower.as_str())
}

/// Longest pattern matching at byte offset `at`, case-insensitively.
///
/// Patterns are ASCII, so a match never starts or ends inside a
/// multi-byte character.
fn match_at(bytes: &[u8], at: usize, patterns: &[&str]) -> Option<usize> {
    patterns
        .iter()
        .map(|p| p.as_bytes())
        .find(|p| bytes.len() - at >= p.len() && bytes[at..at + p.len()].eq_ignore_ascii_case(p))
        .map(|p| p.len())
}

/// Split `word` into alternating plain and matched parts.
///
/// Concatenating the `text` of the returned parts yields `word` unchanged.
pub fn segment(word: &str) -> Vec<WordPart> {
    let patterns = patterns();
    let bytes = word.as_bytes();
    let mut pieces: Vec<&str> = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match match_at(bytes, i, &patterns) {
            Some(len) => {
                pieces.push(&word[plain_start..i]);
                pieces.push(&word[i..i + len]);
                i += len;
                plain_start = i;
            }
            None => i += 1,
        }
    }
    pieces.push(&word[plain_start..]);

    pieces
        .into_iter()
        .filter(|p| !p.is_empty())
        .enumerate()
        .map(|(id, text)| WordPart {
            text: text.to_string(),
            is_special: is_special_sound(text),
            id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(word: &str) -> Vec<(String, bool)> {
        segment(word).into_iter().map(|p| (p.text, p.is_special)).collect()
    }

    #[test]
    fn empty_word_has_no_parts() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn highlights_trigraph_before_digraph() {
        assert_eq!(
            texts("bateau"),
            vec![("bat".into(), false), ("eau".into(), true)]
        );
    }

    #[test]
    fn exception_consumes_before_nasal() {
        // "omm" swallows the "om" that would otherwise match.
        assert_eq!(
            texts("comme"),
            vec![("c".into(), false), ("omm".into(), false), ("e".into(), false)]
        );
    }

    #[test]
    fn preserves_case_and_matches_case_insensitively() {
        let parts = texts("MAISON");
        assert_eq!(
            parts,
            vec![
                ("M".into(), false),
                ("AI".into(), true),
                ("S".into(), false),
                ("ON".into(), true),
            ]
        );
    }

    #[test]
    fn accented_letters_stay_plain() {
        let parts = segment("été");
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].text, "été");
        assert!(!parts[0].is_special);
    }

    #[test]
    fn ids_are_sequential() {
        let ids: Vec<usize> = segment("bonjour").iter().map(|p| p.id).collect();
        assert_eq!(ids, (0..ids.len()).collect::<Vec<_>>());
    }
}
