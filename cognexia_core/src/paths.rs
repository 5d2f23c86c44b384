//! Path helpers shared by the scanner and the loader

use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` to the current user's home directory
///
/// Only `~` on its own or followed by a path separator is expanded.
/// `~user` forms and paths without a leading tilde are returned unchanged,
/// as is everything when the home directory cannot be determined.
pub fn expand_home<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();

    match dirs::home_dir() {
        Some(home) => expand_home_with(path, &home),
        None => path.to_path_buf(),
    }
}

/// Expand a leading `~` against an explicit home directory
pub fn expand_home_with(path: &Path, home: &Path) -> PathBuf {
    let mut components = path.components();

    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let rest = components.as_path();
            if rest.as_os_str().is_empty() {
                home.to_path_buf()
            } else {
                home.join(rest)
            }
        }
        _ => path.to_path_buf(),
    }
}

/// Whether a file or directory name marks a hidden entry
pub fn is_hidden_name(name: &std::ffi::OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_expand_bare_tilde() {
        let home = Path::new("/home/reader");
        assert_eq!(expand_home_with(Path::new("~"), home), home);
    }

    #[test]
    fn test_expand_tilde_prefix() {
        let home = Path::new("/home/reader");
        assert_eq!(
            expand_home_with(Path::new("~/docs/notes"), home),
            Path::new("/home/reader/docs/notes")
        );
    }

    #[test]
    fn test_other_paths_are_untouched() {
        let home = Path::new("/home/reader");
        for path in ["/var/data", "relative/dir", "~other/docs", "docs/~"] {
            assert_eq!(expand_home_with(Path::new(path), home), Path::new(path));
        }
    }

    #[test]
    fn test_expand_home_uses_platform_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/x.txt"), home.join("x.txt"));
        }
    }

    #[test]
    fn test_hidden_names() {
        assert!(is_hidden_name(OsStr::new(".git")));
        assert!(is_hidden_name(OsStr::new(".env.txt")));
        assert!(!is_hidden_name(OsStr::new("notes.md")));
        assert!(!is_hidden_name(OsStr::new("")));
    }
}
