//! Destination path and extension resolution for a download task.
//!
//! The output path is fully determined before any network I/O: the filename
//! is derived from the task id, the extension from the URL suffix. This step
//! never fails; unknown suffixes fall back to `mp4`.

use std::path::{Path, PathBuf};

/// Extensions recognized in URL suffixes; anything else falls back to
/// [`DEFAULT_EXTENSION`].
pub const RECOGNIZED_EXTENSIONS: [&str; 6] = ["mp4", "webp", "png", "jpg", "jpeg", "gif"];

/// Extension used when the URL suffix is missing or unrecognized.
pub const DEFAULT_EXTENSION: &str = "mp4";

/// Prefix for every output filename: `grok_<taskId>.<ext>`.
const FILENAME_PREFIX: &str = "grok_";

/// Resolved destination for one download task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Directory the file is written into.
    pub directory: PathBuf,
    /// Bare filename, `grok_<taskId>.<ext>`.
    pub filename: String,
    /// Full output path (`directory` joined with `filename`).
    pub path: PathBuf,
}

/// Infers the file extension from a URL.
///
/// The query string (everything from the first `?`) is stripped, then the
/// substring after the last `.` is lower-cased and matched against
/// [`RECOGNIZED_EXTENSIONS`]. Unrecognized or missing suffixes resolve to
/// [`DEFAULT_EXTENSION`].
#[must_use]
pub fn resolve_extension(url: &str) -> String {
    let path_part = url.split('?').next().unwrap_or(url);
    let Some((_, candidate)) = path_part.rsplit_once('.') else {
        return DEFAULT_EXTENSION.to_string();
    };
    let candidate = candidate.to_lowercase();
    if RECOGNIZED_EXTENSIONS.contains(&candidate.as_str()) {
        candidate
    } else {
        DEFAULT_EXTENSION.to_string()
    }
}

/// Resolves the full destination for a task. Pure path computation; the
/// directory is not created here.
#[must_use]
pub fn resolve_target(output_dir: &Path, task_id: &str, url: &str) -> ResolvedTarget {
    let extension = resolve_extension(url);
    let filename = format!("{FILENAME_PREFIX}{task_id}.{extension}");
    let path = output_dir.join(&filename);
    ResolvedTarget {
        directory: output_dir.to_path_buf(),
        filename,
        path,
    }
}

/// Returns the default media directory: `file/video` two levels above the
/// directory containing the running binary.
///
/// # Errors
///
/// Returns an IO error if the path of the running binary cannot be determined.
pub fn default_media_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    let root = exe_dir.ancestors().nth(2).unwrap_or(exe_dir);
    Ok(root.join("file").join("video"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_recognized_suffix() {
        assert_eq!(resolve_extension("https://x.com/a/video.mp4"), "mp4");
        assert_eq!(resolve_extension("https://x.com/a/image.png"), "png");
        assert_eq!(resolve_extension("https://x.com/a/image.webp"), "webp");
        assert_eq!(resolve_extension("https://x.com/a/photo.jpg"), "jpg");
        assert_eq!(resolve_extension("https://x.com/a/photo.jpeg"), "jpeg");
        assert_eq!(resolve_extension("https://x.com/a/anim.gif"), "gif");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(resolve_extension("https://x.com/a/video.MP4"), "mp4");
        assert_eq!(resolve_extension("https://x.com/a/image.PNG"), "png");
        assert_eq!(resolve_extension("https://x.com/a/photo.JpEg"), "jpeg");
    }

    #[test]
    fn test_extension_query_string_is_stripped() {
        assert_eq!(resolve_extension("https://x.com/a/video.MP4?sig=1"), "mp4");
        // The suffix is taken from the part before the first `?`, so a
        // recognized-looking extension inside the query must not win.
        assert_eq!(
            resolve_extension("https://x.com/a/video.mov?fallback=clip.png"),
            "mp4"
        );
    }

    #[test]
    fn test_extension_unrecognized_defaults_to_mp4() {
        assert_eq!(resolve_extension("https://x.com/a/file.mov"), "mp4");
        assert_eq!(resolve_extension("https://x.com/a/file.bin"), "mp4");
    }

    #[test]
    fn test_extension_no_dot_defaults_to_mp4() {
        assert_eq!(resolve_extension("https://x/media/12345"), "mp4");
    }

    #[test]
    fn test_extension_host_dot_does_not_match() {
        // Last `.` is in the hostname; "com/media" is not a recognized suffix.
        assert_eq!(resolve_extension("https://x.com/media"), "mp4");
    }

    #[test]
    fn test_resolve_target_filename_shape() {
        let target = resolve_target(
            Path::new("/data/file/video"),
            "abc123",
            "https://x.com/a/video.mp4",
        );
        assert_eq!(target.filename, "grok_abc123.mp4");
        assert_eq!(target.path, Path::new("/data/file/video/grok_abc123.mp4"));
        assert_eq!(target.directory, Path::new("/data/file/video"));
    }

    #[test]
    fn test_resolve_target_uses_default_extension() {
        let target = resolve_target(Path::new("out"), "t9", "https://x.com/stream");
        assert_eq!(target.filename, "grok_t9.mp4");
    }

    #[test]
    fn test_default_media_dir_shape() {
        let dir = default_media_dir().unwrap();
        assert!(dir.ends_with(Path::new("file/video")), "got: {dir:?}");
    }
}
