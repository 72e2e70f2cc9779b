use crate::domain::errors::ReadFailure;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_NAME: &str = "output.txt";
pub const DEFAULT_IGNORED_FOLDERS: &[&str] = &["node_modules"];

/// Folder names pruned from the walk. Always contains the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredFolderSet {
    names: BTreeSet<String>,
}

impl IgnoredFolderSet {
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: BTreeSet<String> = DEFAULT_IGNORED_FOLDERS
            .iter()
            .map(|s| s.to_string())
            .collect();
        names.extend(extra.into_iter().map(Into::into));
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for IgnoredFolderSet {
    fn default() -> Self {
        Self::with_extra(Vec::<String>::new())
    }
}

/// A discovered file, relative to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub relative_path: PathBuf,
}

impl FileEntry {
    pub fn new(relative_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.relative_path
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionCriteria {
    pub file_names: BTreeSet<String>,
    pub folder_names: BTreeSet<String>,
    /// Lowercase, without the leading dot.
    pub extensions: BTreeSet<String>,
}

impl ExclusionCriteria {
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.file_names.is_empty() && self.folder_names.is_empty() && self.extensions.is_empty()
    }

    pub fn merge(&mut self, other: ExclusionCriteria) {
        self.file_names.extend(other.file_names);
        self.folder_names.extend(other.folder_names);
        self.extensions.extend(other.extensions);
    }
}

/// Everything the core needs for one run.
#[derive(Debug, Clone)]
pub struct FlattenConfig {
    pub root: PathBuf,
    pub output_name: String,
    pub ignored_folders: IgnoredFolderSet,
    pub exclusions: ExclusionCriteria,
}

impl FlattenConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            ignored_folders: IgnoredFolderSet::default(),
            exclusions: ExclusionCriteria::default(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_name)
    }
}

#[derive(Debug)]
pub struct FileSection {
    pub relative_path: PathBuf,
    pub content: Result<String, ReadFailure>,
}

impl FileSection {
    /// The text emitted for this file: its content or the failure placeholder.
    pub fn body(&self) -> String {
        match &self.content {
            Ok(text) => text.clone(),
            Err(failure) => failure.placeholder(),
        }
    }
}

#[derive(Debug)]
pub struct FlattenOutput {
    pub text: String,
    pub sections: Vec<FileSection>,
    pub excluded: Vec<PathBuf>,
    pub word_count: usize,
}

/// Splits a comma-separated operator answer into trimmed, non-empty entries.
pub fn parse_name_list(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like [`parse_name_list`], but lowercases and strips leading dots.
pub fn parse_extension_list(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(|s| s.trim().trim_start_matches('.').to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
