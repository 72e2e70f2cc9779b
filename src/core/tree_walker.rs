use crate::domain::models::{FileEntry, IgnoredFolderSet};
use log::{debug, info, warn};
use std::cmp::Ordering;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

const INDENT: &str = "    ";

#[derive(Debug, Default)]
pub struct WalkResult {
    pub structure: String,
    pub files: Vec<FileEntry>,
}

// Symlinks are not followed, so a link to a directory reports a symlink file
// type. It still counts as a directory: rendered and pruned, never descended.
fn is_dir_like(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

// Files before subdirectories, then by name.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    is_dir_like(a)
        .cmp(&is_dir_like(b))
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn is_ignored_dir(entry: &DirEntry, ignored: &IgnoredFolderSet) -> bool {
    entry.depth() > 0
        && is_dir_like(entry)
        && ignored.contains(&entry.file_name().to_string_lossy())
}

fn root_display_name(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Walks `root` depth-first, rendering the indented structure and collecting
/// every file path relative to the root.
///
/// Directories named in `ignored` are never entered. Symlinked directories
/// are rendered but not followed. The file at
/// `root/<output_name>` is rendered but left out of the file list.
pub fn walk_tree(root: &Path, ignored: &IgnoredFolderSet, output_name: &str) -> WalkResult {
    info!("Walking directory tree: {}", root.display());
    let output_path = root.join(output_name);
    let mut result = WalkResult::default();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by(files_first)
        .into_iter()
        .filter_entry(|e| {
            let ignored_dir = is_ignored_dir(e, ignored);
            if ignored_dir {
                debug!("Pruning ignored folder: {}", e.path().display());
            }
            !ignored_dir
        })
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let indent = INDENT.repeat(entry.depth());

        if is_dir_like(&entry) {
            let name = if entry.depth() == 0 {
                root_display_name(root)
            } else {
                entry.file_name().to_string_lossy().into_owned()
            };
            result.structure.push_str(&format!("{}{}/\n", indent, name));
            continue;
        }

        result
            .structure
            .push_str(&format!("{}{}\n", indent, entry.file_name().to_string_lossy()));

        if entry.path() == output_path {
            debug!("Leaving previous output out of the file list: {}", entry.path().display());
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        debug!("Found file: {}", relative.display());
        result.files.push(FileEntry::new(relative));
    }

    info!("Found {} files", result.files.len());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    fn paths(result: &WalkResult) -> Vec<PathBuf> {
        result.files.iter().map(|f| f.relative_path.clone()).collect()
    }

    #[test]
    fn test_prunes_ignored_folders() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("proj");
        touch(&root, "a/x.py");
        touch(&root, "a/node_modules/y.js");

        let result = walk_tree(&root, &IgnoredFolderSet::default(), "output.txt");

        assert_eq!(paths(&result), vec![PathBuf::from("a").join("x.py")]);
        assert_eq!(result.structure, "proj/\n    a/\n        x.py\n");
        assert!(!result.structure.contains("node_modules"));
        assert!(!result.structure.contains("y.js"));
    }

    #[test]
    fn test_prunes_operator_folders_at_any_depth() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "keep.txt");
        touch(root, "assets/logo.svg");
        touch(root, "src/assets/icon.svg");
        touch(root, "src/main.rs");

        let ignored = IgnoredFolderSet::with_extra(vec!["assets"]);
        let result = walk_tree(root, &ignored, "output.txt");

        assert_eq!(
            paths(&result),
            vec![PathBuf::from("keep.txt"), PathBuf::from("src").join("main.rs")]
        );
        assert!(!result.structure.contains("assets"));
        assert!(!result.structure.contains(".svg"));
    }

    #[test]
    fn test_indentation_tracks_depth() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("root");
        touch(&root, "top.txt");
        touch(&root, "a/b/c/deep.txt");

        let result = walk_tree(&root, &IgnoredFolderSet::default(), "output.txt");

        let expected = "root/\n    top.txt\n    a/\n        b/\n            c/\n                deep.txt\n";
        assert_eq!(result.structure, expected);
    }

    #[test]
    fn test_files_listed_before_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("r");
        touch(&root, "a_dir/inner.txt");
        touch(&root, "z_file.txt");

        let result = walk_tree(&root, &IgnoredFolderSet::default(), "output.txt");

        assert_eq!(
            paths(&result),
            vec![PathBuf::from("z_file.txt"), PathBuf::from("a_dir").join("inner.txt")]
        );
        assert_eq!(result.structure, "r/\n    z_file.txt\n    a_dir/\n        inner.txt\n");
    }

    #[test]
    fn test_skips_previous_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "output.txt");
        touch(root, "sub/output.txt");
        touch(root, "main.py");

        let result = walk_tree(root, &IgnoredFolderSet::default(), "output.txt");

        assert_eq!(
            paths(&result),
            vec![PathBuf::from("main.py"), PathBuf::from("sub").join("output.txt")]
        );
        assert!(result.structure.contains("    output.txt\n"));
    }

    #[test]
    fn test_custom_output_name() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "output.txt");
        touch(root, "snapshot.txt");

        let result = walk_tree(root, &IgnoredFolderSet::default(), "snapshot.txt");

        assert_eq!(paths(&result), vec![PathBuf::from("output.txt")]);
    }

    #[test]
    fn test_root_rendered_by_base_name() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("project");
        touch(&root, "a.txt");

        let dotted = root.join(".");
        let result = walk_tree(&dotted, &IgnoredFolderSet::default(), "output.txt");

        assert!(result.structure.starts_with("project/\n"));
    }

    #[test]
    fn test_root_named_like_ignored_folder_is_still_walked() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("node_modules");
        touch(&root, "index.js");

        let result = walk_tree(&root, &IgnoredFolderSet::default(), "output.txt");

        assert_eq!(paths(&result), vec![PathBuf::from("index.js")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directories_are_never_files() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("proj");
        touch(&root, "main.py");
        touch(&root, "real/a.txt");
        symlink(root.join("real"), root.join("link")).unwrap();
        symlink(root.join("real"), root.join("node_modules")).unwrap();

        let result = walk_tree(&root, &IgnoredFolderSet::default(), "output.txt");

        assert_eq!(
            paths(&result),
            vec![PathBuf::from("main.py"), PathBuf::from("real").join("a.txt")]
        );
        assert_eq!(
            result.structure,
            "proj/\n    main.py\n    link/\n    real/\n        a.txt\n"
        );
        assert!(!result.structure.contains("node_modules"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_listed() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("proj");
        touch(&root, "target.txt");
        symlink(root.join("target.txt"), root.join("alias.txt")).unwrap();

        let result = walk_tree(&root, &IgnoredFolderSet::default(), "output.txt");

        assert_eq!(
            paths(&result),
            vec![PathBuf::from("alias.txt"), PathBuf::from("target.txt")]
        );
    }

    #[test]
    fn test_empty_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("empty");
        fs::create_dir(&root).unwrap();

        let result = walk_tree(&root, &IgnoredFolderSet::default(), "output.txt");

        assert!(result.files.is_empty());
        assert_eq!(result.structure, "empty/\n");
    }
}
