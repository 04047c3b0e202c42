use std::fs;
use std::path::{Path, PathBuf};

use crate::core::image_format::ImageFormat;

pub struct FileManager;

impl FileManager {
    /// Lists the image files directly inside `dir`, sorted by path.
    ///
    /// A missing path or a path that is not a directory yields an empty list:
    /// for the browser that is simply "nothing to show".
    pub fn scan_directory(dir: &Path) -> Vec<PathBuf> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("Not scanning {}: {}", dir.display(), e);
                return Vec::new();
            }
        };

        let mut image_paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && ImageFormat::is_supported(p))
            .collect();

        image_paths.sort();
        log::debug!("Found {} image(s) in {}", image_paths.len(), dir.display());
        image_paths
    }

    pub fn find_index_of_file(paths: &[PathBuf], target: &Path) -> Option<usize> {
        paths.iter().position(|p| p == target)
    }

    pub fn supported_file_filter() -> (&'static str, Vec<&'static str>) {
        ("Images", ImageFormat::supported_extensions())
    }
}
