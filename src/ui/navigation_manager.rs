use std::path::{Path, PathBuf};

use crate::core::file_manager::FileManager;

/// The scanned file list and the selection cursor into it.
pub struct NavigationManager {
    directory: Option<PathBuf>,
    image_paths: Vec<PathBuf>,
    current_index: usize,
}

impl NavigationManager {
    pub fn new() -> Self {
        Self {
            directory: None,
            image_paths: Vec::new(),
            current_index: 0,
        }
    }

    /// Rescans when `dir` differs from the last scanned directory.
    ///
    /// A rescan always puts the cursor back on the first image.
    /// Returns whether a rescan happened.
    pub fn sync_directory(&mut self, dir: &Path) -> bool {
        if self.directory.as_deref() == Some(dir) {
            return false;
        }

        self.image_paths = FileManager::scan_directory(dir);
        self.directory = Some(dir.to_path_buf());
        self.current_index = 0;
        true
    }

    /// Moves the cursor onto `path` if it is part of the list.
    pub fn select(&mut self, path: &Path) -> bool {
        match FileManager::find_index_of_file(&self.image_paths, path) {
            Some(index) if index != self.current_index => {
                self.current_index = index;
                true
            }
            _ => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.can_go_previous() {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) -> bool {
        if self.can_go_next() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index + 1 < self.image_paths.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.image_paths.get(self.current_index).map(PathBuf::as_path)
    }

    pub fn total_images(&self) -> usize {
        self.image_paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_paths.is_empty()
    }
}
