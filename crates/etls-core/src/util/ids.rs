//! Name casing utilities.
//!
//! Converts logical ETL names (usually PascalCase or camelCase) into the
//! kebab-case form shown in listings.

/// Convert a logical name to lowercase kebab-case.
///
/// Performs the following transformations:
/// 1. Starts a new word before an uppercase letter that follows a letter or digit
/// 2. Treats every non-alphanumeric character (space, underscore, hyphen, ...) as a separator
/// 3. Collapses runs of separators into a single hyphen
/// 4. Strips leading/trailing separators
/// 5. Lowercases everything
///
/// # Examples
///
/// ```
/// use etls_core::util::ids::to_kebab_case;
///
/// assert_eq!(to_kebab_case("MyCoolEtl"), "my-cool-etl");
/// assert_eq!(to_kebab_case("etlAB"), "etl-a-b");
/// assert_eq!(to_kebab_case("nightly_sync job"), "nightly-sync-job");
/// assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
/// ```
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + name.len() / 2);
    let mut in_word = false;
    let mut pending_separator = false;

    for c in name.chars() {
        if !c.is_alphanumeric() {
            pending_separator = true;
            in_word = false;
            continue;
        }

        if c.is_uppercase() && in_word {
            pending_separator = true;
        }
        if pending_separator && !out.is_empty() {
            out.push('-');
        }
        pending_separator = false;
        in_word = true;
        out.extend(c.to_lowercase());
    }

    out
}
