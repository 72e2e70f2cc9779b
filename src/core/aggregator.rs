use crate::core::exclusion::should_exclude;
use crate::core::tree_walker::{WalkResult, walk_tree};
use crate::domain::errors::ReadFailure;
use crate::domain::models::{FileEntry, FileSection, FlattenConfig, FlattenOutput};
use crate::infra::file_system::read_file_contents;
use log::{debug, info};
use std::path::{Path, PathBuf};

pub const STRUCTURE_HEADER: &str = "Directory structure:";
pub const CONTENTS_HEADER: &str = "File contents:";

fn count_words(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Reads every non-excluded file in walk order. Returns the sections and the
/// excluded paths.
pub fn build_sections<F>(
    root: &Path,
    files: &[FileEntry],
    config: &FlattenConfig,
    mut read: F,
) -> (Vec<FileSection>, Vec<PathBuf>)
where
    F: FnMut(&Path) -> Result<String, ReadFailure>,
{
    debug!("Building sections from {} files", files.len());
    let mut sections = Vec::new();
    let mut excluded = Vec::new();

    for file in files {
        if should_exclude(file.path(), &config.exclusions) {
            debug!("Excluding {}", file.path().display());
            excluded.push(file.relative_path.clone());
            continue;
        }

        let content = read(&root.join(file.path()));
        sections.push(FileSection {
            relative_path: file.relative_path.clone(),
            content,
        });
    }

    info!(
        "Built {} sections, excluded {} files",
        sections.len(),
        excluded.len()
    );
    (sections, excluded)
}

pub fn format_output(structure: &str, sections: &[FileSection]) -> String {
    let mut result = String::new();

    result.push_str(STRUCTURE_HEADER);
    result.push('\n');
    result.push_str(structure);
    result.push('\n');
    result.push_str(CONTENTS_HEADER);
    result.push_str("\n\n");

    for section in sections {
        result.push_str(&format!("=== {} ===\n", section.relative_path.display()));
        result.push_str(&section.body());
        result.push_str("\n\n");
    }

    result
}

/// Assembles the aggregate from an existing walk.
pub fn aggregate(config: &FlattenConfig, walk: &WalkResult) -> FlattenOutput {
    let (sections, excluded) =
        build_sections(&config.root, &walk.files, config, read_file_contents);
    let word_count = sections
        .iter()
        .filter_map(|s| s.content.as_ref().ok())
        .map(|text| count_words(text))
        .sum();
    let text = format_output(&walk.structure, &sections);

    FlattenOutput {
        text,
        sections,
        excluded,
        word_count,
    }
}

/// Walks the root and assembles the aggregate in one go.
pub fn flatten(config: &FlattenConfig) -> FlattenOutput {
    let walk = walk_tree(&config.root, &config.ignored_folders, &config.output_name);
    aggregate(config, &walk)
}
