use compact_str::CompactString;
use unicode_normalization::UnicodeNormalization;

/// Reduces a name to the form used as its counting identity: surrounding
/// whitespace trimmed, then canonically composed (NFC) and case folded
/// to lowercase.
///
/// Idempotent, so pre-normalized input partitions identically to raw input.
pub fn normalized(name: &str) -> CompactString {
    name.trim().nfc().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_folds() {
        assert_eq!("somchai", normalized("  Somchai "));
        assert_eq!("somchai", normalized("SOMCHAI"));
    }

    #[test]
    fn thai_passes_through() {
        assert_eq!("น.อ. สมชาย", normalized(" น.อ. สมชาย"));
    }

    #[test]
    fn composes_to_nfc() {
        // "é" precomposed vs "e" + combining acute
        assert_eq!(normalized("Andr\u{e9}"), normalized("Andre\u{301}"));
    }

    #[test]
    fn empty_and_blank() {
        assert_eq!("", normalized(""));
        assert_eq!("", normalized("   "));
    }

    #[test]
    fn idempotent() {
        for name in &["  Somchai ", "น.อ. สมชาย", "Andre\u{301}", "MALEE"] {
            let once = normalized(name);
            assert_eq!(once, normalized(&once));
        }
    }
}
