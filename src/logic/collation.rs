//! Locale-aware name comparison
//!
//! Approximates the default (root) collation order used by browsers'
//! `localeCompare`, in three levels:
//! 1. base letters, ignoring accents and case ("Åland" sorts with "aland")
//! 2. accents ("Peru" before "Péru")
//! 3. case, lowercase first ("a" before "A")
//!
//! A final code point comparison makes the order total, so only identical
//! strings compare equal.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Precomputed sort key for a name
///
/// Field order is significant: the derived `Ord` compares level by level.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    primary: String,
    secondary: String,
    tertiary: Vec<bool>,
    raw: String,
}

/// Letters that NFD does not decompose but collation treats as base letters
fn fold_letter(c: char) -> Option<&'static str> {
    match c {
        'ø' => Some("o"),
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        'ß' => Some("ss"),
        'đ' => Some("d"),
        'ł' => Some("l"),
        'ı' => Some("i"),
        'þ' => Some("th"),
        _ => None,
    }
}

fn primary_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.nfd().filter(|c| !is_combining_mark(*c)) {
        for lower in c.to_lowercase() {
            match fold_letter(lower) {
                Some(folded) => key.push_str(folded),
                None => key.push(lower),
            }
        }
    }
    key
}

fn secondary_key(name: &str) -> String {
    name.nfd().flat_map(char::to_lowercase).collect()
}

fn tertiary_key(name: &str) -> Vec<bool> {
    name.chars().map(char::is_uppercase).collect()
}

fn collation_key(name: &str) -> CollationKey {
    CollationKey {
        primary: primary_key(name),
        secondary: secondary_key(name),
        tertiary: tertiary_key(name),
        raw: name.to_string(),
    }
}

/// Compare two names in natural alphabetical order
///
/// # Examples
/// ```
/// use countryviz::logic::collation::compare_names;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_names("Åland Islands", "Albania"), Ordering::Less);
/// assert_eq!(compare_names("peru", "Peru"), Ordering::Less);
/// assert_eq!(compare_names("Fiji", "Fiji"), Ordering::Equal);
/// ```
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_alphabetical() {
        assert_eq!(compare_names("Fiji", "Lithuania"), Ordering::Less);
        assert_eq!(compare_names("Peru", "Lithuania"), Ordering::Greater);
    }

    #[test]
    fn test_case_does_not_dominate() {
        // Byte order would put "Zambia" before "american Samoa"
        assert_eq!(compare_names("american Samoa", "Zambia"), Ordering::Less);
    }

    #[test]
    fn test_accents_sort_with_base_letter() {
        assert_eq!(compare_names("Afghanistan", "Åland Islands"), Ordering::Less);
        assert_eq!(compare_names("Åland Islands", "Albania"), Ordering::Less);
        assert_eq!(compare_names("Réunion", "Romania"), Ordering::Less);
        assert_eq!(compare_names("Curaçao", "Cyprus"), Ordering::Less);
    }

    #[test]
    fn test_unaccented_before_accented() {
        assert_eq!(compare_names("Peru", "Péru"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(compare_names("fiji", "Fiji"), Ordering::Less);
        assert_eq!(compare_names("Fiji", "fiji"), Ordering::Greater);
    }

    #[test]
    fn test_folded_letters() {
        assert_eq!(primary_key("Færøerne"), "faeroerne");
        assert_eq!(compare_names("Færøerne", "Fiji"), Ordering::Less);
    }

    #[test]
    fn test_punctuation_before_letters() {
        assert_eq!(
            compare_names("Korea (Democratic People's Republic of)", "Korea Republic"),
            Ordering::Less
        );
    }

    #[test]
    fn test_only_identical_names_are_equal() {
        assert_eq!(compare_names("Niger", "Niger"), Ordering::Equal);
        assert_ne!(compare_names("Niger", "NIGER"), Ordering::Equal);
    }
}
