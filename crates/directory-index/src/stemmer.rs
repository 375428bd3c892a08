//! Light suffix-stripping stemmer.
//!
//! Directory vocabulary leans on occupational and service terms whose formal
//! and colloquial forms diverge earlier than an inflectional stemmer folds
//! them ("surgery" vs "surgeons", "cardiology" vs "cardiologists"), so this
//! stemmer strips one derivational suffix per token from a curated table
//! instead of running a full Porter pass. Tokens shorter than the minimum
//! stem length pass through untouched.

/// Minimum characters that must remain after stripping.
const MIN_STEM_LEN: usize = 3;

/// Strippable suffixes, longest first. The first applicable entry wins.
const SUFFIXES: &[&str] = &[
    "ologists", "ologies", "ologist", "ization", "icians", "ations", "eries",
    "istry", "ments", "ology", "ician", "ation", "ities", "eons", "ings",
    "ists", "ment", "ies", "ery", "eon", "ing", "ist", "ity", "ics", "ers",
    "es", "ed", "er", "ic", "s", "e", "y",
];

/// Stem a single lowercase token.
///
/// Strips the longest applicable suffix, leaving at least [`MIN_STEM_LEN`]
/// characters. A bare trailing "s" is kept when the token ends in "ss"
/// ("address" stays "address").
pub fn stem(token: &str) -> String {
    for suffix in SUFFIXES {
        if !token.ends_with(suffix) {
            continue;
        }
        if *suffix == "s" && token.ends_with("ss") {
            continue;
        }
        let remaining = token.len() - suffix.len();
        if remaining >= MIN_STEM_LEN {
            return token[..remaining].to_string();
        }
    }
    token.to_string()
}
