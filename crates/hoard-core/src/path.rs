//! Slash-delimited catalog paths.
//!
//! Branches are addressed by paths like `/equipment/weapons`. Leading and
//! trailing separators are decoration; only the non-empty segments matter.

/// Strip all leading and trailing `/` characters, leaving internal
/// separators intact.
pub fn clean(path: &str) -> &str {
    path.trim_matches('/')
}

/// Split a path into its non-empty segments.
///
/// `"//a//b//"` yields `["a", "b"]`. An empty or separator-only path
/// yields no segments.
pub fn split(path: &str) -> Vec<&str> {
    clean(path).split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cleans_both_ends() {
        assert_eq!(clean("/something/"), "something");
        assert_eq!(clean("///something/"), "something");
        assert_eq!(clean("/something////"), "something");
        assert_eq!(clean("////something////"), "something");
        assert_eq!(clean("a/b"), "a/b");
    }

    #[test]
    fn splits_into_segments() {
        assert_eq!(split("/equipment/weapons"), vec!["equipment", "weapons"]);
        assert_eq!(split("//a//b//"), vec!["a", "b"]);
        assert!(split("/").is_empty());
        assert!(split("").is_empty());
    }

    proptest! {
        #[test]
        fn clean_never_bounded_by_separator(path in ".*") {
            let cleaned = clean(&path);
            prop_assert!(!cleaned.starts_with('/'));
            prop_assert!(!cleaned.ends_with('/'));
        }

        #[test]
        fn split_yields_no_empty_segments(path in "[a/]*") {
            for seg in split(&path) {
                prop_assert!(!seg.is_empty());
                prop_assert!(!seg.contains('/'));
            }
        }
    }
}
