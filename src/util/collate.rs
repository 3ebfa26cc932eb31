//! Locale-aware text ordering
//!
//! Text cells sort by the Unicode Collation Algorithm with CLDR root data, so
//! accented letters sit next to their base letter and punctuation sorts before
//! digits and letters. Comparison is case-insensitive.

use std::cell::RefCell;
use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};

thread_local! {
    // Non-ignorable punctuation, byte tiebreak for collation-equal strings
    static COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::Cldr(Locale::Root), false, true));
}

/// Collate two strings as given
pub fn collate(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}

/// Case-insensitive collation: both sides are lowercased first
///
/// Strings equal after lowercasing compare `Equal`, which keeps stable sorts
/// stable across case variants.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    collate(&a.to_lowercase(), &b.to_lowercase())
}
