//! Naming conventions shared by all generated Java artifacts.
//!
//! Every generator that refers to another generated type must go through
//! these functions, otherwise cross-references between files stop resolving.

/// Suffix of the generated accessor class.
const IMPL_SUFFIX: &str = "HollowImpl";
/// Suffix of the delegate contract interface.
const DELEGATE_SUFFIX: &str = "Delegate";
/// Suffix of the per-type API table.
const TYPE_API_SUFFIX: &str = "TypeAPI";

/// Upper-case the first character (e.g., "title" -> "Title").
pub fn uppercase(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Replace every character that cannot appear in a Java identifier with `_`.
///
/// A leading digit gets an `_` prefix and an empty name becomes `_`, so the
/// result is always usable on its own.
pub fn substitute_invalid_chars(s: &str) -> String {
    let mut result: String = s
        .chars()
        .map(|c| if is_identifier_part(c) { c } else { '_' })
        .collect();

    match result.chars().next() {
        None => result.push('_'),
        Some(c) if !is_identifier_start(c) => result.insert(0, '_'),
        Some(_) => {}
    }

    result
}

/// Whether `c` may begin a generated Java identifier.
pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Whether `c` may continue a generated Java identifier.
///
/// Only ASCII digits are accepted; other numeric characters such as `²` or
/// `٣` are substituted.
pub fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

fn type_base(type_name: &str, postfix: &str) -> String {
    format!("{}{}", substitute_invalid_chars(&uppercase(type_name)), postfix)
}

/// Name of the accessor class generated for a record type
/// (e.g., "Movie" -> "MovieHollowImpl").
pub fn hollow_impl_classname(type_name: &str, postfix: &str) -> String {
    format!("{}{}", type_base(type_name, postfix), IMPL_SUFFIX)
}

/// Name of the delegate contract a record's accessors forward to
/// (e.g., "Movie" -> "MovieDelegate").
///
/// Takes the postfix like every other generated type name, so the delegate
/// of `MovieV2HollowImpl` is `MovieV2Delegate`.
pub fn delegate_interface_name(type_name: &str, postfix: &str) -> String {
    format!("{}{}", type_base(type_name, postfix), DELEGATE_SUFFIX)
}

/// Name of the type-level API table (e.g., "Movie" -> "MovieTypeAPI").
///
/// Postfixed for the same reason as [`delegate_interface_name`].
pub fn type_api_classname(type_name: &str, postfix: &str) -> String {
    format!("{}{}", type_base(type_name, postfix), TYPE_API_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase() {
        assert_eq!(uppercase("title"), "Title");
        assert_eq!(uppercase("Title"), "Title");
        assert_eq!(uppercase("releaseYear"), "ReleaseYear");
        assert_eq!(uppercase("x"), "X");
        assert_eq!(uppercase(""), "");
    }

    #[test]
    fn test_substitute_invalid_chars() {
        assert_eq!(substitute_invalid_chars("title"), "title");
        assert_eq!(substitute_invalid_chars("release-year"), "release_year");
        assert_eq!(substitute_invalid_chars("first name"), "first_name");
        assert_eq!(substitute_invalid_chars("a.b.c"), "a_b_c");
        assert_eq!(substitute_invalid_chars("price$"), "price$");
    }

    #[test]
    fn test_substitute_leading_digit() {
        assert_eq!(substitute_invalid_chars("2d"), "_2d");
        assert_eq!(substitute_invalid_chars(""), "_");
    }

    #[test]
    fn test_substitute_non_ascii_numerics() {
        assert_eq!(substitute_invalid_chars("x²"), "x_");
        assert_eq!(substitute_invalid_chars("٣d"), "_d");
        assert_eq!(substitute_invalid_chars("année"), "année");
    }

    #[test]
    fn test_identifier_chars() {
        assert!(is_identifier_start('a'));
        assert!(is_identifier_start('$'));
        assert!(!is_identifier_start('1'));
        assert!(is_identifier_part('1'));
        assert!(!is_identifier_part('²'));
        assert!(!is_identifier_part('-'));
    }

    #[test]
    fn test_impl_classname() {
        assert_eq!(hollow_impl_classname("Movie", ""), "MovieHollowImpl");
        assert_eq!(hollow_impl_classname("movie", ""), "MovieHollowImpl");
        assert_eq!(hollow_impl_classname("Movie", "V2"), "MovieV2HollowImpl");
        assert_eq!(
            hollow_impl_classname("ListOfString", ""),
            "ListOfStringHollowImpl"
        );
    }

    #[test]
    fn test_impl_classname_sanitizes() {
        assert_eq!(hollow_impl_classname("movie-v2", ""), "Movie_v2HollowImpl");
    }

    #[test]
    fn test_delegate_and_type_api_names() {
        assert_eq!(delegate_interface_name("Movie", ""), "MovieDelegate");
        assert_eq!(type_api_classname("Movie", ""), "MovieTypeAPI");
        assert_eq!(delegate_interface_name("Movie", "V2"), "MovieV2Delegate");
        assert_eq!(type_api_classname("Movie", "V2"), "MovieV2TypeAPI");
    }
}
