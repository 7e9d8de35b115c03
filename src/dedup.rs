use crate::normalize::normalized;
use crate::tally::Tally;
use compact_str::CompactString;
use std::collections::HashMap;

/// Counts how often each name occurs, after normalization, and partitions
/// the result into duplicated and unique names.
///
/// Two entries are the same name when their normalized forms (see
/// [`normalized`]) are equal; the tally is keyed by that form. An empty
/// input produces an empty tally. Blank entries are accepted and counted
/// under the empty-string key; the interactive collector filters them out
/// before they get here.
pub fn find_duplicate_names<I>(names: I) -> Tally
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut counts: HashMap<CompactString, usize> = HashMap::new();
    for name in names {
        *counts.entry(normalized(name.as_ref())).or_insert(0) += 1;
    }
    Tally::from_counts(counts)
}
