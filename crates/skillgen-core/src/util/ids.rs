//! Skill name derivation.
//!
//! Turns a human-written document title into a stable kebab-case identifier
//! used as the skill's directory name.

/// Derive a kebab-case skill name from a title.
///
/// Performs the following transformations:
/// 1. Converts to lowercase
/// 2. Keeps ASCII lowercase letters and digits, maps every other character
///    (spaces, `-`, `_`, `/`, punctuation) to a hyphen
/// 3. Collapses runs of hyphens into one
/// 4. Trims leading/trailing hyphens
///
/// Returns an empty string when nothing survives; callers treat that as an
/// extraction failure.
///
/// # Examples
///
/// ```
/// use skillgen_core::util::ids::derive_skill_name;
///
/// assert_eq!(derive_skill_name("Graceful Degradation"), "graceful-degradation");
/// assert_eq!(derive_skill_name("GitHub Actions / CI_CD"), "github-actions-ci-cd");
/// assert_eq!(derive_skill_name("  --  "), "");
/// ```
pub fn derive_skill_name(title: &str) -> String {
    let mut name = String::with_capacity(title.len());

    for c in title.to_lowercase().chars() {
        let mapped = if c.is_ascii_lowercase() || c.is_ascii_digit() {
            c
        } else {
            '-'
        };

        if mapped == '-' && (name.is_empty() || name.ends_with('-')) {
            continue;
        }
        name.push(mapped);
    }

    while name.ends_with('-') {
        name.pop();
    }

    name
}
