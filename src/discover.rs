use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Recursively list `*.md` files (any case) under `root`, sorted by path.
/// Unreadable directories are logged and skipped.
pub fn find_markdown_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let at = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                warn!("Skipping unreadable path {}: {}", at, e);
                continue;
            }
        };
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!("Discovered {} markdown files under {}", files.len(), root.display());
    files
}

fn is_markdown(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.to_ascii_lowercase().ends_with(".md"))
}

/// Path relative to `root` with `/` separators, for display and for events.
pub fn display_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files.iter().map(|f| display_path(root, f)).collect()
    }

    #[test]
    fn finds_nested_markdown_any_case() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("top.md"), "").unwrap();
        fs::write(root.join("a/UPPER.MD"), "").unwrap();
        fs::write(root.join("a/b/deep.Md"), "").unwrap();
        fs::write(root.join("a/skip.txt"), "").unwrap();
        fs::write(root.join("a/b/md"), "").unwrap();

        let files = find_markdown_files(root);
        assert_eq!(names(root, &files), vec!["a/UPPER.MD", "a/b/deep.Md", "top.md"]);
    }

    #[test]
    fn directory_named_like_markdown_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("folder.md")).unwrap();
        fs::write(root.join("folder.md/inner.md"), "").unwrap();

        let files = find_markdown_files(root);
        assert_eq!(names(root, &files), vec!["folder.md/inner.md"]);
    }

    #[test]
    fn empty_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_markdown_files(dir.path()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subtree_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("locked")).unwrap();
        fs::write(root.join("locked/hidden.md"), "").unwrap();
        fs::write(root.join("open.md"), "").unwrap();
        fs::set_permissions(root.join("locked"), fs::Permissions::from_mode(0o000)).unwrap();

        // Mode bits are bypassed when running as root.
        let enforced = fs::read_dir(root.join("locked")).is_err();
        let files = find_markdown_files(root);
        fs::set_permissions(root.join("locked"), fs::Permissions::from_mode(0o755)).unwrap();
        if !enforced {
            return;
        }

        assert_eq!(names(root, &files), vec!["open.md"]);
    }
}
