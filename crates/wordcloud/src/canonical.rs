/// Correct spellings that commonly look like misspellings or plurals.
pub const DEFAULT_EXCEPTIONS: [&str; 5] =
    ["cinderella", "headdress", "octopus", "psychedelic", "x-ray"];

/// Picks which of two near-duplicate tokens survives a merge, using the
/// default exception list.
///
/// The policy is deliberately asymmetric; `a` is the token seen first:
///
/// 1. `a` is an exception word: keep `a`.
/// 2. `b` is an exception word: keep `b`.
/// 3. `a` ends in `s` and `b` does not: keep `b`.
/// 4. Otherwise keep `a`.
///
/// ```rust
/// use wordcloud::choose_canonical;
///
/// assert_eq!(choose_canonical("cats", "cat"), "cat");
/// assert_eq!(choose_canonical("octopi", "octopus"), "octopus");
/// assert_eq!(choose_canonical("colour", "color"), "colour");
/// ```
pub fn choose_canonical<'t>(a: &'t str, b: &'t str) -> &'t str {
    choose_canonical_with(a, b, &DEFAULT_EXCEPTIONS)
}

/// [`choose_canonical`] with a caller-supplied exception list.
pub fn choose_canonical_with<'t, E: AsRef<str>>(
    a: &'t str,
    b: &'t str,
    exceptions: &[E],
) -> &'t str {
    let is_exception = |word: &str| exceptions.iter().any(|e| e.as_ref() == word);

    if is_exception(a) {
        a
    } else if is_exception(b) {
        b
    } else if a.ends_with('s') && !b.ends_with('s') {
        b
    } else {
        a
    }
}
