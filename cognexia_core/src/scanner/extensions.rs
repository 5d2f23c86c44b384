//! Extension allow-list for the scanner
//!
//! Extensions are kept in their normalized form: trimmed, lowercase and
//! prefixed with a dot. Matching against a path is case-insensitive.

use std::collections::BTreeSet;
use std::path::Path;

/// Extensions scanned when the caller supplies none
pub const DEFAULT_EXTENSIONS: &[&str] = &[".txt", ".pdf", ".md", ".py"];

/// Normalize a single user-supplied extension
///
/// Returns `None` for blank input.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let clean = raw.trim().to_lowercase();
    if clean.is_empty() {
        return None;
    }

    if clean.starts_with('.') {
        Some(clean)
    } else {
        Some(format!(".{clean}"))
    }
}

/// Normalized set of allowed file extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: BTreeSet<String>,
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

impl ExtensionSet {
    /// Build the effective set from an optional user list
    ///
    /// An absent list, an empty list, or a list containing only blank
    /// entries falls back to [`DEFAULT_EXTENSIONS`].
    pub fn from_user<S: AsRef<str>>(extensions: Option<&[S]>) -> Self {
        let normalized: BTreeSet<String> = extensions
            .unwrap_or_default()
            .iter()
            .filter_map(|ext| normalize_extension(ext.as_ref()))
            .collect();

        if normalized.is_empty() {
            Self::default()
        } else {
            Self {
                extensions: normalized,
            }
        }
    }

    /// Whether the path's extension is in the set
    pub fn matches(&self, path: &Path) -> bool {
        match suffix_of(path) {
            Some(suffix) => self.extensions.contains(&suffix),
            None => false,
        }
    }

    /// Iterate over the normalized extensions
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

/// Lowercase, dot-prefixed suffix of the final path component
///
/// `Path::extension` already treats dotfiles such as `.txt` as having no
/// extension.
fn suffix_of(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_extensions_are_unique() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        for ext in DEFAULT_EXTENSIONS {
            assert!(seen.insert(ext), "Duplicate extension found: {ext}");
        }
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("TXT"), Some(".txt".to_string()));
        assert_eq!(normalize_extension(".MD"), Some(".md".to_string()));
        assert_eq!(normalize_extension("  py "), Some(".py".to_string()));
        assert_eq!(normalize_extension(""), None);
        assert_eq!(normalize_extension("   "), None);
    }

    #[test]
    fn test_absent_or_empty_list_uses_defaults() {
        assert_eq!(ExtensionSet::from_user::<&str>(None), ExtensionSet::default());
        assert_eq!(ExtensionSet::from_user::<&str>(Some(&[][..])), ExtensionSet::default());
        assert_eq!(ExtensionSet::from_user(Some(&["", "  "][..])), ExtensionSet::default());
    }

    #[test]
    fn test_mixed_case_list_matches_normalized_list() {
        let messy = ExtensionSet::from_user(Some(&["TXT", ".MD", ""][..]));
        let clean = ExtensionSet::from_user(Some(&[".txt", ".md"][..]));
        assert_eq!(messy, clean);
        assert_eq!(messy.iter().collect::<Vec<_>>(), vec![".md", ".txt"]);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let set = ExtensionSet::default();
        assert!(set.matches(Path::new("/docs/README.MD")));
        assert!(set.matches(Path::new("/docs/a.Txt")));
        assert!(!set.matches(Path::new("/docs/photo.jpg")));
        assert!(!set.matches(Path::new("/docs/Makefile")));
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        let set = ExtensionSet::default();
        assert!(!set.matches(Path::new("/docs/.txt")));
        assert!(set.matches(Path::new("/docs/.notes.txt")));
    }

    #[test]
    fn test_only_last_suffix_counts() {
        let set = ExtensionSet::from_user(Some(&["gz"][..]));
        assert!(set.matches(Path::new("archive.tar.gz")));
        assert!(!ExtensionSet::default().matches(Path::new("notes.txt.bak")));
    }

    proptest! {
        #[test]
        fn prop_normalized_extension_is_lowercase_and_dotted(raw in "\\s*\\.?[A-Za-z0-9]{1,8}\\s*") {
            let ext = normalize_extension(&raw).unwrap();
            prop_assert!(ext.starts_with('.'));
            prop_assert!(!ext.starts_with(".."));
            prop_assert_eq!(ext.clone(), ext.to_lowercase());
            prop_assert_eq!(ext.trim(), ext.as_str());
        }

        #[test]
        fn prop_case_of_input_does_not_matter(raw in "[a-z]{1,6}") {
            let lower = ExtensionSet::from_user(Some(&[raw.clone()][..]));
            let upper = ExtensionSet::from_user(Some(&[raw.to_uppercase()][..]));
            prop_assert_eq!(lower, upper);
        }
    }
}
