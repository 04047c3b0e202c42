use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

const SUFFIXES: [(&str, ImageFormat); 3] = [
    (".png", ImageFormat::Png),
    (".jpg", ImageFormat::Jpeg),
    (".jpeg", ImageFormat::Jpeg),
];

impl ImageFormat {
    /// Matches on the raw file name bytes, so names that are not valid UTF-8
    /// still qualify. Case-sensitive: `photo.PNG` is not recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.as_encoded_bytes();
        SUFFIXES
            .iter()
            .find(|(suffix, _)| name.ends_with(suffix.as_bytes()))
            .map(|(_, format)| *format)
    }

    pub fn is_supported(path: &Path) -> bool {
        Self::from_path(path).is_some()
    }

    pub fn supported_extensions() -> Vec<&'static str> {
        SUFFIXES.iter().map(|(suffix, _)| &suffix[1..]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_png_and_jpeg_suffixes() {
        assert_eq!(ImageFormat::from_path(Path::new("/tmp/a.png")), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_path(Path::new("b.jpg")), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_path(Path::new("c.jpeg")), Some(ImageFormat::Jpeg));
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert!(!ImageFormat::is_supported(Path::new("A.PNG")));
        assert!(!ImageFormat::is_supported(Path::new("b.Jpg")));
    }

    #[test]
    fn rejects_other_files() {
        assert!(!ImageFormat::is_supported(Path::new("notes.txt")));
        assert!(!ImageFormat::is_supported(Path::new("archive.png.zip")));
        assert!(!ImageFormat::is_supported(Path::new("/")));
    }

    #[cfg(unix)]
    #[test]
    fn accepts_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = Path::new(OsStr::from_bytes(b"caf\xe9.png"));
        assert_eq!(ImageFormat::from_path(name), Some(ImageFormat::Png));
        assert!(!ImageFormat::is_supported(Path::new(OsStr::from_bytes(b"caf\xe9.PNG"))));
    }

    #[test]
    fn lists_extensions_for_the_folder_picker() {
        assert_eq!(ImageFormat::supported_extensions(), vec!["png", "jpg", "jpeg"]);
    }
}
