//! Locates the `data` folder the navigator browses at startup.
//!
//! Candidates, first existing directory wins:
//! 1. `$IMAGE_NAVIGATOR_DATA_DIR`
//! 2. macOS bundle: `<App>.app/Contents/Resources/data`
//! 3. `./data` in the working directory
//! 4. system-wide share directories
//!
//! When none exists the result is `./data`, which simply scans as empty.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::config::{APP_SLUG, DATA_DIR_ENV};

pub fn resolve_data_dir() -> PathBuf {
    let candidates = candidate_dirs();
    match first_existing_dir(&candidates) {
        Some(dir) => {
            log::info!("Using data directory {}", dir.display());
            dir.to_path_buf()
        }
        None => {
            let fallback = cwd_data();
            log::warn!(
                "No data directory found, falling back to {}",
                fallback.display()
            );
            fallback
        }
    }
}

pub fn candidate_dirs() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        candidates.push(PathBuf::from(dir));
    }

    if cfg!(target_os = "macos") {
        if let Some(resources) = env::current_exe().ok().as_deref().and_then(bundle_resources) {
            candidates.push(resources);
        }
    }

    candidates.push(cwd_data());
    candidates.extend(
        ["/usr/local/share", "/opt/local/share", "/usr/share"]
            .iter()
            .map(|root| Path::new(root).join(APP_SLUG).join("data")),
    );
    candidates
}

pub fn first_existing_dir(candidates: &[PathBuf]) -> Option<&Path> {
    candidates
        .iter()
        .map(PathBuf::as_path)
        .find(|p| p.is_dir())
}

/// `<App>.app/Contents/MacOS/<exe>` -> `<App>.app/Contents/Resources/data`
fn bundle_resources(exe: &Path) -> Option<PathBuf> {
    Some(exe.parent()?.parent()?.join("Resources").join("data"))
}

fn cwd_data() -> PathBuf {
    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("data")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn first_existing_candidate_wins() {
        let root = tempdir().unwrap();
        let missing = root.path().join("missing");
        let second = root.path().join("second");
        let third = root.path().join("third");
        std::fs::create_dir(&second).unwrap();
        std::fs::create_dir(&third).unwrap();

        let candidates = vec![missing, second.clone(), third];
        assert_eq!(first_existing_dir(&candidates), Some(second.as_path()));
    }

    #[test]
    fn files_are_not_data_directories() {
        let root = tempdir().unwrap();
        let file = root.path().join("data");
        std::fs::write(&file, b"").unwrap();

        assert_eq!(first_existing_dir(&[file]), None);
    }

    #[test]
    fn bundle_resources_sits_next_to_macos_dir() {
        let exe = Path::new("/Applications/Nav.app/Contents/MacOS/nav");
        assert_eq!(
            bundle_resources(exe),
            Some(PathBuf::from("/Applications/Nav.app/Contents/Resources/data"))
        );
    }

    #[test]
    fn system_paths_are_searched_last() {
        let candidates = candidate_dirs();
        let last = candidates.last().unwrap();
        assert_eq!(last, &Path::new("/usr/share").join(APP_SLUG).join("data"));
        assert!(candidates.contains(&cwd_data()));
    }
}
