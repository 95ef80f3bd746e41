//! CLI argument validation helpers
//!
//! Value parsers used by clap to reject obviously invalid arguments before
//! configuration loading runs.

use std::path::PathBuf;

/// Validate a configuration file path argument
///
/// The file must exist and be a regular file.
pub fn validate_config_file_path(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);

    if !path.exists() {
        return Err(format!("configuration file does not exist: '{}'", value));
    }

    if !path.is_file() {
        return Err(format!("configuration path is not a file: '{}'", value));
    }

    Ok(path)
}

/// Validate a host address argument
///
/// Accepts IPv4/IPv6 addresses and hostnames; rejects empty values and
/// values with whitespace.
pub fn validate_host_address(value: &str) -> Result<String, String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("host address cannot be empty".to_string());
    }

    if trimmed.chars().any(char::is_whitespace) {
        return Err(format!("host address cannot contain whitespace: '{}'", value));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_config_file_path_missing() {
        assert!(validate_config_file_path("/definitely/not/here.toml").is_err());
    }

    #[test]
    fn test_validate_config_file_path_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = validate_config_file_path(dir.path().to_str().unwrap());
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_config_file_path_ok() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(b"[server]\n").expect("write");

        let result = validate_config_file_path(path.to_str().unwrap());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_host_address() {
        assert_eq!(validate_host_address("127.0.0.1").unwrap(), "127.0.0.1");
        assert_eq!(validate_host_address("localhost").unwrap(), "localhost");
        assert!(validate_host_address("").is_err());
        assert!(validate_host_address("bad host").is_err());
    }
}
