//! Collision handling for generated identifiers.

use std::collections::HashSet;

/// Hands out identifiers unique within one namespace.
///
/// A taken name gets a counter appended, starting at 2. Type names take it
/// directly (`Friends2`), everything else after an underscore
/// (`first_name_2`).
#[derive(Debug, Default)]
pub(crate) struct UniqueNames {
    taken: HashSet<String>,
}

impl UniqueNames {
    /// Mark `name` as taken without handing it out.
    pub fn reserve(mut self, name: &str) -> Self {
        self.taken.insert(name.to_string());
        self
    }

    pub fn claim(&mut self, name: String) -> String {
        if self.taken.insert(name.clone()) {
            return name;
        }
        let separator = if name.starts_with(|c: char| c.is_ascii_uppercase()) {
            ""
        } else {
            "_"
        };
        let mut n = 2;
        loop {
            let candidate = format!("{}{}{}", name, separator, n);
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_collisions() {
        let mut names = UniqueNames::default();
        assert_eq!(names.claim("first_name".into()), "first_name");
        assert_eq!(names.claim("first_name".into()), "first_name_2");
        assert_eq!(names.claim("first_name".into()), "first_name_3");
    }

    #[test]
    fn test_reserved_type_name() {
        let mut names = UniqueNames::default().reserve("Api");
        assert_eq!(names.claim("Api".into()), "Api2");
        assert_eq!(names.claim("Friends".into()), "Friends");
    }

    #[test]
    fn test_raw_identifier_suffix() {
        let mut names = UniqueNames::default();
        names.claim("r#type".into());
        assert_eq!(names.claim("r#type".into()), "r#type_2");
    }
}
