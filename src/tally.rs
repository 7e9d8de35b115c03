use compact_str::CompactString;
use std::collections::{HashMap, HashSet};

/// The outcome of one frequency analysis: keys seen more than once with
/// their counts, and keys seen exactly once.
///
/// The two partitions are disjoint. Keys counted zero times (possible for
/// the honorific analysis, which starts every vocabulary token at zero)
/// appear in neither.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub duplicates: HashMap<CompactString, usize>,
    pub uniques: HashSet<CompactString>,
}

impl Tally {
    pub(crate) fn from_counts(counts: HashMap<CompactString, usize>) -> Tally {
        let mut tally = Tally::default();
        for (key, count) in counts {
            match count {
                0 => {}
                1 => {
                    tally.uniques.insert(key);
                }
                _ => {
                    tally.duplicates.insert(key, count);
                }
            }
        }
        tally
    }

    /// True when both partitions are empty.
    pub fn is_empty(&self) -> bool {
        self.duplicates.is_empty() && self.uniques.is_empty()
    }
}
