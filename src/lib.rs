//! Finds duplicate names, and duplicate honorific prefixes, in roster
//! lists.
//!
//! Intended for clerical data cleaning: given the names on an attendance
//! or roster list, report which entries repeat and which occur once, and
//! separately report which rank or courtesy prefixes (a fixed Thai
//! vocabulary, e.g. `น.อ.` or `นางสาว`) repeat across entries. Names are
//! compared by normalized form (trimmed, NFC-composed and lowercased),
//! and each name is credited to at most one honorific, the first
//! whole-word match in vocabulary order.
//!
//! The `name_tally` binary wires these functions to an interactive
//! prompt loop on stdin/stdout; the library works on any string sequence.
//!
//! # Examples
//!
//! ```
//! use name_tally::{detect_duplicate_honorifics, find_duplicate_names};
//!
//! let names = ["น.อ. Somchai", "น.อ. Anan", "นาง Malee", "นาง malee"];
//!
//! let by_name = find_duplicate_names(&names);
//! assert_eq!(Some(&2), by_name.duplicates.get("นาง malee"));
//!
//! let by_honorific = detect_duplicate_honorifics(&names);
//! assert_eq!(Some(&2), by_honorific.duplicates.get("น.อ."));
//! assert_eq!(Some(&2), by_honorific.duplicates.get("นาง"));
//! ```

mod collect;
mod dedup;
mod honorific;
mod normalize;
mod present;
#[cfg(feature = "serialization")]
mod serialization;
mod tally;

pub use crate::collect::{collect_names, TERMINATOR};
pub use crate::dedup::find_duplicate_names;
pub use crate::honorific::{detect_duplicate_honorifics, is_honorific, vocabulary};
pub use crate::normalize::normalized;
pub use crate::present::print_report;
pub use crate::tally::Tally;
