use std::path::{Component, Path};

/// Name shown in the Main Folder column. Falls back to the canonical path
/// when the root is given as `.` or with a trailing `..`.
pub fn main_folder_name(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().into_owned();
    }

    root.canonicalize()
        .ok()
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| root.display().to_string())
}

/// Path of `dir` relative to `root`, components joined with `/`.
/// Empty when `dir` is the root itself.
pub fn relative_folder(root: &Path, dir: &Path) -> String {
    let Ok(relative) = dir.strip_prefix(root) else {
        return String::new();
    };

    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Grouping key for a file whose containing folder is `folder`.
pub fn station_name(main_folder: &str, folder: &str) -> String {
    if folder.is_empty() {
        main_folder.to_string()
    } else {
        folder.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_main_folder_name() {
        assert_eq!(main_folder_name(Path::new("/data/bag-basin")), "bag-basin");
        assert_eq!(main_folder_name(Path::new("relative/R")), "R");

        let dir = tempfile::tempdir().unwrap();
        let basin = dir.path().join("basin");
        std::fs::create_dir_all(basin.join("sub")).unwrap();
        assert_eq!(main_folder_name(&basin.join("sub").join("..")), "basin");
    }

    #[test]
    fn test_relative_folder() {
        let root = PathBuf::from("/data/R");
        assert_eq!(relative_folder(&root, &root), "");
        assert_eq!(relative_folder(&root, &root.join("A")), "A");
        assert_eq!(relative_folder(&root, &root.join("StationX").join("sub")), "StationX/sub");
        assert_eq!(relative_folder(&root, Path::new("/elsewhere")), "");
    }

    #[test]
    fn test_station_name() {
        assert_eq!(station_name("R", ""), "R");
        assert_eq!(station_name("R", "A"), "A");
        assert_eq!(station_name("R", "A/deep"), "A/deep");
    }
}
