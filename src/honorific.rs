use crate::normalize::normalized;
use crate::tally::Tally;
use compact_str::CompactString;
use phf::phf_set;
use std::collections::HashMap;

// Match-priority order: a name is credited to the first token in this list
// that occurs in it as a whole word, so the order is part of the contract.
static HONORIFICS: [&str; 19] = [
    "น.",
    "นาง",
    "นางสาว",
    "พล.ร.อ.",
    "พล.ร.ท.",
    "พล.ร.ต.",
    "น.อ.",
    "น.ท.",
    "น.ต.",
    "ร.อ.",
    "ร.ท.",
    "ร.ต.",
    "พ.จ.อ.",
    "พ.จ.ท.",
    "พ.จ.ต.",
    "จ.อ.",
    "จ.ท.",
    "จ.ต.",
    "พลฯ",
];

static HONORIFIC_SET: phf::Set<&'static str> = phf_set! {
    "น.",
    "นาง",
    "นางสาว",
    "พล.ร.อ.",
    "พล.ร.ท.",
    "พล.ร.ต.",
    "น.อ.",
    "น.ท.",
    "น.ต.",
    "ร.อ.",
    "ร.ท.",
    "ร.ต.",
    "พ.จ.อ.",
    "พ.จ.ท.",
    "พ.จ.ต.",
    "จ.อ.",
    "จ.ท.",
    "จ.ต.",
    "พลฯ",
};

/// The recognized honorific prefixes, in match-priority order.
pub fn vocabulary() -> impl Iterator<Item = &'static str> {
    HONORIFICS.iter().copied()
}

/// Whether `word`, after normalization, is exactly one of the recognized
/// honorific prefixes.
pub fn is_honorific(word: &str) -> bool {
    HONORIFIC_SET.contains(normalized(word).as_str())
}

#[inline]
fn is_boundary(neighbor: Option<char>) -> bool {
    neighbor.map_or(true, |c| !c.is_alphanumeric())
}

// Whole-word containment: `token` must occur with no alphanumeric character
// adjacent to either end of the match. Keeps "น." from firing inside
// "น.อ." and "นาง" inside "นางสาว".
fn contains_word(text: &str, token: &str) -> bool {
    debug_assert!(!token.is_empty());

    let mut start = 0;
    while let Some(found) = text[start..].find(token) {
        let at = start + found;
        let end = at + token.len();

        if is_boundary(text[..at].chars().next_back()) && is_boundary(text[end..].chars().next()) {
            return true;
        }

        start = match text[at..].chars().next() {
            Some(c) => at + c.len_utf8(),
            None => break,
        };
    }

    false
}

/// Counts, for each honorific prefix in the vocabulary, how many of the
/// given names carry it, and partitions the result into duplicated and
/// unique prefixes.
///
/// Names are case folded before matching. Each name is credited to at most
/// one token: the scan tests tokens in vocabulary order and stops at the
/// first whole-word match, so a name containing several recognizable
/// prefixes counts only toward the earliest one in the list. Tokens carried
/// by no name at all are absent from both partitions.
pub fn detect_duplicate_honorifics<I>(names: I) -> Tally
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut counts: HashMap<CompactString, usize> = HONORIFICS
        .iter()
        .map(|&token| (CompactString::from(token), 0))
        .collect();

    for name in names {
        let folded = normalized(name.as_ref());
        if let Some(&token) = HONORIFICS.iter().find(|&&t| contains_word(&folded, t)) {
            // Seeded above from the same list
            *counts.get_mut(token).unwrap() += 1;
        }
    }

    Tally::from_counts(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_word_match() {
        assert!(contains_word("น.อ. somchai", "น.อ."));
        assert!(contains_word("somchai น.อ.", "น.อ."));
        assert!(contains_word("นาง malee", "นาง"));
    }

    #[test]
    fn shorter_token_does_not_match_inside_longer() {
        assert!(!contains_word("น.อ. somchai", "น."));
        assert!(!contains_word("นางสาว somsri", "นาง"));
    }

    #[test]
    fn later_occurrence_still_found() {
        // First "นาง" is glued into "นางสาว"; the standalone one counts.
        assert!(contains_word("นางสาว และ นาง", "นาง"));
    }

    #[test]
    fn vocabulary_order_breaks_ties() {
        // "น.อ." precedes "จ.อ." in the vocabulary, so only it is credited.
        let tally = detect_duplicate_honorifics(["จ.อ. น.อ. somchai"]);
        assert!(tally.uniques.contains("น.อ."));
        assert!(!tally.uniques.contains("จ.อ."));
        assert!(tally.duplicates.is_empty());
    }

    #[test]
    fn single_count_per_name() {
        let tally = detect_duplicate_honorifics(["น.อ. จ.อ. somchai", "จ.อ. anan"]);
        assert!(tally.uniques.contains("น.อ."));
        assert!(tally.uniques.contains("จ.อ."));
        assert_eq!(2, tally.uniques.len());
        assert!(tally.duplicates.is_empty());
    }

    #[test]
    fn unmatched_tokens_are_absent() {
        let tally = detect_duplicate_honorifics(["น.อ. somchai", "น.อ. anan"]);
        assert_eq!(Some(&2), tally.duplicates.get("น.อ."));
        assert_eq!(1, tally.duplicates.len());
        assert!(tally.uniques.is_empty());
    }

    #[test]
    fn folds_and_trims_before_matching() {
        let tally = detect_duplicate_honorifics(["  น.อ. SOMCHAI  "]);
        assert!(tally.uniques.contains("น.อ."));
    }

    #[test]
    fn no_honorifics_at_all() {
        let tally = detect_duplicate_honorifics(["somchai", "anan"]);
        assert!(tally.is_empty());
    }

    #[test]
    fn vocabulary_is_ordered_and_closed() {
        let tokens: Vec<_> = vocabulary().collect();
        assert_eq!(19, tokens.len());
        assert_eq!(Some(&"น."), tokens.first());
        assert_eq!(Some(&"พลฯ"), tokens.last());

        for token in tokens {
            assert!(is_honorific(token), "{} not recognized", token);
        }
        assert!(!is_honorific("somchai"));
        assert!(!is_honorific("dr."));
    }
}
