//! Name ordering for alphabetical display.

use std::cmp::Ordering;

/// Compare two names the way a user-facing alphabetical list expects.
///
/// Letters compare case-insensitively first ("bo" < "Colt" < "crow");
/// names that differ only in case put lowercase first; the raw strings
/// break any remaining tie so the order is total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    primary
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}
