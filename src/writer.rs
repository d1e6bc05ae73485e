use crate::error::ThemeError;
use std::path::Path;
use tokio::fs;

/// Write generated content, creating parent directories if needed.
///
/// Returns the number of bytes written.
pub async fn write_output(path: &Path, content: &str) -> Result<usize, ThemeError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ThemeError::output_write(parent, e))?;
    }

    fs::write(path, content)
        .await
        .map_err(|e| ThemeError::output_write(path, e))?;

    Ok(content.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("web").join("css").join("everforest-dark-hard.css");

        let written = write_output(&path, ":root {}\n").await.unwrap();
        assert_eq!(written, 9);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ":root {}\n");
    }

    #[tokio::test]
    async fn test_write_into_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("cli/bat")).unwrap();
        let path = dir.path().join("cli/bat/everforest-light-soft.tmTheme");

        write_output(&path, "<plist/>").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<plist/>");
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.conf");

        write_output(&path, "first").await.unwrap();
        write_output(&path, "second").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_write_failure_names_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten with a file
        let path = dir.path().join("taken");
        std::fs::create_dir(&path).unwrap();

        let err = write_output(&path, "x").await.unwrap_err();
        assert!(matches!(err, ThemeError::OutputWrite { .. }));
        assert!(err.to_string().contains("taken"));
    }
}
