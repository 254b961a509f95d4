use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum configuration file size (1 MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Maximum length of a remote identifier interpolated into a URL
const MAX_URL_COMPONENT_LENGTH: usize = 512;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the symlink itself is inspected, not its target.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than `max_size`
pub fn validate_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata: {}: {}",
            file_description,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            max_size
        );
    }

    Ok(())
}

/// Rejects identifiers that could change the shape of a request URL
/// once interpolated (path separators, traversal, query/fragment markers).
pub fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
    if component.is_empty() {
        anyhow::bail!("{} must not be empty", component_type);
    }

    if component.len() > MAX_URL_COMPONENT_LENGTH {
        anyhow::bail!(
            "Security: {} is too long ({} bytes)",
            component_type,
            component.len()
        );
    }

    if component.contains('/') || component.contains('\\') || component.contains("..") {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            component_type
        );
    }

    if component.contains('#') || component.contains('?') || component.contains('@') {
        anyhow::bail!(
            "Security: {} contains URL-unsafe characters",
            component_type
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("config.yml");
        fs::write(&file_path, "format: json").unwrap();

        let result = validate_regular_file(&file_path, "config file", MAX_CONFIG_FILE_SIZE);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_regular_file(temp_dir.path(), "config file", MAX_CONFIG_FILE_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_regular_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/config.yml");
        let result = validate_regular_file(&path, "config file", MAX_CONFIG_FILE_SIZE);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_regular_file_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("config.yml");
        fs::write(&file_path, "0123456789").unwrap();

        let result = validate_regular_file(&file_path, "config file", 5);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_validate_url_component_accepts_app_id() {
        assert!(validate_url_component("com.spotify.music", "App id").is_ok());
    }

    #[test]
    fn test_validate_url_component_rejects_separators() {
        assert!(validate_url_component("com/evil", "App id").is_err());
        assert!(validate_url_component("..", "App id").is_err());
        assert!(validate_url_component("a\\b", "App id").is_err());
    }

    #[test]
    fn test_validate_url_component_rejects_unsafe_chars() {
        let err = validate_url_component("app?x=1", "App id").unwrap_err();
        assert!(err.to_string().contains("URL-unsafe"));
        assert!(validate_url_component("app#frag", "App id").is_err());
    }

    #[test]
    fn test_validate_url_component_rejects_empty() {
        assert!(validate_url_component("", "App id").is_err());
    }
}
