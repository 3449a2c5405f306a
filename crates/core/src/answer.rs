/// Whether `given` is an acceptable answer for `expected`.
///
/// Both sides are trimmed and compared by their full uppercase forms, so
/// `"  Paris "` matches `"paris"`.
#[must_use]
pub fn matches(given: &str, expected: &str) -> bool {
    given.trim().to_uppercase() == expected.trim().to_uppercase()
}
