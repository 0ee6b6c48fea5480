use std::path::{Path, PathBuf};

/// Subdirectory of the platform cache directory that holds runefinder data.
pub const CACHE_DIR_NAME: &str = "runefinder";
/// File name of the Unicode Character Database main file.
pub const UCD_FILE_NAME: &str = "UnicodeData.txt";

/// Default location of the cached UCD file.
///
/// `<cache dir>/runefinder/UnicodeData.txt`, where the cache dir is the
/// platform's (`$XDG_CACHE_HOME`, `~/Library/Caches`, `%LOCALAPPDATA%`). On a
/// platform without one, the system temp directory is used instead.
pub fn default_ucd_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(CACHE_DIR_NAME)
        .join(UCD_FILE_NAME)
}

/// Picks the UCD file path: a non-empty override verbatim, else the default.
///
/// Pure apart from reading the platform cache location; never fails.
pub fn resolve_ucd_path(override_path: Option<&Path>) -> PathBuf {
    match override_path {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => default_ucd_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_returned_verbatim() {
        let custom = Path::new("./TEST-UnicodeData.txt");
        assert_eq!(resolve_ucd_path(Some(custom)), PathBuf::from("./TEST-UnicodeData.txt"));
    }

    #[test]
    fn empty_override_falls_back_to_default() {
        assert_eq!(resolve_ucd_path(Some(Path::new(""))), default_ucd_path());
    }

    #[test]
    fn missing_override_falls_back_to_default() {
        assert_eq!(resolve_ucd_path(None), default_ucd_path());
    }

    #[test]
    fn default_path_ends_with_cache_dir_and_file() {
        let path = default_ucd_path();
        assert!(path.ends_with(Path::new(CACHE_DIR_NAME).join(UCD_FILE_NAME)));
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("UnicodeData.txt"));
    }
}
