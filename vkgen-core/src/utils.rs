//! Shared utility functions for identifier conversion.

/// Split an identifier into lower-case words.
///
/// Any character that is not an ASCII letter or digit separates words.
/// Inside a run of letters a new word starts at a lower-to-upper hump
/// (`getOnline`) and before the last capital of an acronym (`HTTPServer`).
/// Digits stay attached to the word they follow.
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_ascii_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let hump = prev.is_ascii_lowercase() || prev.is_ascii_digit();
            let acronym_end = prev.is_ascii_uppercase() && next_is_lower;
            if hump || acronym_end {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c.to_ascii_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect()
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("friends_get"), ["friends", "get"]);
        assert_eq!(split_words("getOnline"), ["get", "online"]);
        assert_eq!(split_words("HTTPServer"), ["http", "server"]);
        assert_eq!(split_words("photo_100"), ["photo", "100"]);
        assert_eq!(split_words("photo100Url"), ["photo100", "url"]);
        assert_eq!(split_words("friends.get"), ["friends", "get"]);
        assert!(split_words("__").is_empty());
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("users_user_full"), "UsersUserFull");
        assert_eq!(to_pascal_case("base-bool-int"), "BaseBoolInt");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("is_closed"), "is_closed");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("canAccessClosed"), "can_access_closed");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_conversions_are_idempotent() {
        for input in ["getOnline", "users_user_full", "HTTPServer", "photo_100", "a.b-c"] {
            let snake = to_snake_case(input);
            assert_eq!(to_snake_case(&snake), snake);
        }

        // single-letter words merge once capitalized ("a_b" -> "AB" -> "Ab")
        for input in ["getOnline", "users_user_full", "HTTPServer", "photo_100"] {
            let pascal = to_pascal_case(input);
            assert_eq!(to_pascal_case(&pascal), pascal);
        }
    }
}
