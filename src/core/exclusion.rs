use crate::domain::models::ExclusionCriteria;
use std::path::Path;

fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// True when the file matches any of the three criteria: its name, one of its
/// parent folder names, or its lowercased extension.
pub fn should_exclude(relative_path: &Path, criteria: &ExclusionCriteria) -> bool {
    let segments: Vec<String> = relative_path
        .iter()
        .map(|segment| segment.to_string_lossy().into_owned())
        .collect();

    let Some((file_name, folders)) = segments.split_last() else {
        return false;
    };

    if criteria.file_names.contains(file_name) {
        return true;
    }

    if folders
        .iter()
        .any(|folder| criteria.folder_names.contains(folder))
    {
        return true;
    }

    criteria.extensions.contains(&extension_of(file_name))
}
