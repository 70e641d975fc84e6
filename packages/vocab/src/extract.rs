//! The vocabulary-extraction heuristic.
//!
//! A vocabulary announcement has no reliable delimiter between the English
//! term and its Japanese translation; the only stable signal is the writing
//! system switching. So the split point is the *first* Japanese-script
//! character, which also makes multi-word terms work without any
//! word-boundary assumption on the term side.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::VocabularyPair;

lazy_static! {
    // scheme://non-whitespace-run
    static ref URL_REGEX: Regex = Regex::new(
        r"[A-Za-z][A-Za-z0-9+.\-]*://\S+"
    ).unwrap();

    static ref MENTION_REGEX: Regex = Regex::new(r"@\w+").unwrap();

    static ref HASHTAG_REGEX: Regex = Regex::new(r"#\w+").unwrap();
}

/// True for characters in the Hiragana, Katakana, or CJK-ideograph ranges.
pub fn is_japanese_script(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{4E00}'..='\u{9FAF}')
}

/// Strip URLs, mentions, and hashtags, in that order, then trim.
///
/// Removal runs to a fixed point: deleting a mention can splice the
/// surrounding text into a fresh URL (`"a@99://x"` becomes `"a://x"`),
/// so a single pass would leave residue behind. Iterating until the text
/// stops changing makes cleaning idempotent.
pub fn clean_post_text(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = URL_REGEX.replace_all(&current, "");
        let next = MENTION_REGEX.replace_all(&next, "");
        let next = HASHTAG_REGEX.replace_all(&next, "").into_owned();
        if next == current {
            break;
        }
        current = next;
    }
    current.trim().to_string()
}

/// Extract a vocabulary pair from post text, if the post is a vocabulary
/// announcement.
///
/// Returns `None` for anything else; absence is the expected outcome for
/// ordinary posts and is never an error. Validation happens after all
/// cleanup and trimming: the term must keep at least one ASCII letter and
/// the translation at least one Japanese-script character.
pub fn extract(raw_text: &str) -> Option<VocabularyPair> {
    let cleaned = clean_post_text(raw_text);

    // Split at the first Japanese-script character; offsets are byte
    // positions into the cleaned text, so both halves stay well-defined.
    let (split_at, _) = cleaned
        .char_indices()
        .find(|(_, c)| is_japanese_script(*c))?;

    let term = cleaned[..split_at].trim();
    let translation = cleaned[split_at..].trim();

    if term.is_empty() || !term.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    if translation.is_empty() || !translation.chars().any(is_japanese_script) {
        return None;
    }

    Some(VocabularyPair::new(term, translation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn extracts_single_word_pair() {
        let pair = extract("cat 猫").unwrap();
        assert_eq!(pair.term, "cat");
        assert_eq!(pair.translation, "猫");
    }

    #[test]
    fn extracts_multi_word_term() {
        let pair = extract("make a shift シフトの作成").unwrap();
        assert_eq!(pair.term, "make a shift");
        assert_eq!(pair.translation, "シフトの作成");
    }

    #[test]
    fn splits_without_any_space_at_boundary() {
        let pair = extract("cat猫").unwrap();
        assert_eq!(pair.term, "cat");
        assert_eq!(pair.translation, "猫");
    }

    #[test]
    fn splits_at_full_width_space() {
        let pair = extract("cat\u{3000}猫").unwrap();
        assert_eq!(pair.term, "cat");
        assert_eq!(pair.translation, "猫");
    }

    #[test]
    fn no_japanese_means_no_pair() {
        assert_eq!(extract("check this out http://x.co/abc"), None);
        assert_eq!(extract("just chatting with friends"), None);
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("   "), None);
    }

    #[test]
    fn term_needs_a_latin_letter_after_cleanup() {
        // After the hashtag and mention are stripped, nothing but the
        // translation remains, so there is no valid term.
        assert_eq!(extract("#vocab @friend 水"), None);
        assert_eq!(extract("!!! 水"), None);
        assert_eq!(extract("水"), None);
    }

    #[test]
    fn single_character_translation_is_valid() {
        let pair = extract("water 水").unwrap();
        assert_eq!(pair.translation, "水");
    }

    #[test]
    fn strips_urls_mentions_and_hashtags() {
        let pair = extract("@sensei shift シフト #studying https://example.com/x").unwrap();
        assert_eq!(pair.term, "shift");
        assert_eq!(pair.translation, "シフト");
    }

    #[test]
    fn punctuation_around_halves_is_trimmed_after_split() {
        let pair = extract("  dog   犬  ").unwrap();
        assert_eq!(pair.term, "dog");
        assert_eq!(pair.translation, "犬");
    }

    #[test]
    fn hiragana_katakana_and_kanji_all_trigger_the_split() {
        assert_eq!(extract("eat たべる").unwrap().translation, "たべる");
        assert_eq!(extract("shift シフト").unwrap().translation, "シフト");
        assert_eq!(extract("cat 猫").unwrap().translation, "猫");
    }

    #[test]
    fn cleaning_is_idempotent_on_samples() {
        for text in [
            "see https://x.co/a and @b #c 犬",
            "##double #tag @@name",
            "plain text, no markup",
        ] {
            let once = clean_post_text(text);
            assert_eq!(clean_post_text(&once), once);
        }
    }

    #[test]
    fn mention_removal_cannot_resurrect_a_url() {
        // "a@99://x" has no URL until the mention "@99" is stripped; the
        // splice "a://x" must still be removed in the same cleaning call.
        assert_eq!(clean_post_text("a@99://x"), "");

        let pair = extract("cat a@99://x 犬").unwrap();
        assert_eq!(pair.term, "cat");
        assert_eq!(pair.translation, "犬");
    }

    #[test]
    fn hashtag_removal_cannot_resurrect_a_url() {
        // Stripping "#99" splices "b" against "://x".
        assert_eq!(clean_post_text("b#99://x"), "");
    }

    /// Strings dense in `@` / `#` / `://` fragments, to exercise the
    /// splices that single-pass cleaning would miss.
    fn markup_soup() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                Just("@".to_string()),
                Just("#".to_string()),
                Just("://".to_string()),
                Just(" ".to_string()),
                Just("犬".to_string()),
                "[a-z]{1,4}",
                "[0-9]{1,3}",
            ],
            0..12,
        )
        .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn cleaning_is_idempotent(text in ".{0,200}") {
            let once = clean_post_text(&text);
            prop_assert_eq!(clean_post_text(&once), once);
        }

        #[test]
        fn cleaning_markup_soup_reaches_a_fixed_point(text in markup_soup()) {
            let once = clean_post_text(&text);
            prop_assert_eq!(clean_post_text(&once), once);
        }

        #[test]
        fn no_japanese_input_never_extracts(text in "[a-zA-Z0-9 .,!?@#:/-]{0,120}") {
            prop_assert_eq!(extract(&text), None);
        }

        #[test]
        fn latin_then_japanese_always_extracts(
            term in "[a-z]{1,10}( [a-z]{1,10}){0,2}",
            translation in "[\u{3041}-\u{3093}\u{30A1}-\u{30F4}\u{4E00}-\u{9FAF}]{1,8}",
        ) {
            let pair = extract(&format!("{} {}", term, translation)).unwrap();
            prop_assert_eq!(pair.term, term.trim());
            prop_assert_eq!(pair.translation, translation);
        }

        #[test]
        fn extracted_pairs_satisfy_the_invariants(text in ".{0,200}") {
            if let Some(pair) = extract(&text) {
                prop_assert!(!pair.term.trim().is_empty());
                prop_assert!(!pair.translation.trim().is_empty());
                prop_assert!(pair.term.chars().any(|c| c.is_ascii_alphabetic()));
                prop_assert!(pair.translation.chars().any(is_japanese_script));
            }
        }
    }
}
