use std::path::PathBuf;

use derive_more::{Deref, DerefMut};
use indexmap::IndexMap;

/// The site's category taxonomy: each category name mapped to the content
/// paths of its member posts.
///
/// Computed by the host framework during content discovery; this crate only
/// reads it. Category names are unique by construction, since the map is
/// keyed by name. Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct Categories(IndexMap<String, Vec<PathBuf>>);

impl Categories {
    /// Returns a new, empty [`Categories`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<PathBuf>)> for Categories {
    fn from_iter<I: IntoIterator<Item = (K, Vec<PathBuf>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, pages)| (name.into(), pages))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_categories_preserve_insertion_order() {
        let mut categories = Categories::new();
        categories.insert("rust".to_string(), vec![PathBuf::from("_posts/a.md")]);
        categories.insert("go".to_string(), vec![PathBuf::from("_posts/b.md")]);
        categories.insert("zig".to_string(), vec![]);

        assert_eq!(
            categories.keys().collect::<Vec<_>>(),
            vec!["rust", "go", "zig"]
        );
    }

    #[test]
    fn test_categories_from_iterator() {
        let categories = Categories::from_iter([
            ("go", vec![PathBuf::from("_posts/hello-go.md")]),
            ("rust", vec![PathBuf::from("_posts/hello-rust.md")]),
        ]);

        assert_eq!(
            categories.get("go"),
            Some(&vec![PathBuf::from("_posts/hello-go.md")])
        );
        assert_eq!(
            categories.get("rust"),
            Some(&vec![PathBuf::from("_posts/hello-rust.md")])
        );
        assert_eq!(categories.get("zig"), None);
    }
}
