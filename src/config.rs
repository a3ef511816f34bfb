//! packetdoc configuration

use crate::PacketDocError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main packetdoc configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacketDocConfig {
    /// Layout description to read
    pub input: PathBuf,

    /// Per-packet HTML table output
    pub output: OutputConfig,

    /// Combined Markdown document output
    pub markdown: MarkdownConfig,
}

impl Default for PacketDocConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("protocol.txt"),
            output: OutputConfig::default(),
            markdown: MarkdownConfig::default(),
        }
    }
}

/// HTML table output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving `{direction}_{id}.html` files
    pub dir: PathBuf,

    /// Escape HTML special characters in cell text
    pub escape_html: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            escape_html: false,
        }
    }
}

/// Markdown document configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Destination file; stdout when unset
    pub path: Option<PathBuf>,
}

impl PacketDocConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self, PacketDocError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file(&self, path: &Path) -> Result<(), PacketDocError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), PacketDocError> {
        if self.input.as_os_str().is_empty() {
            return Err(PacketDocError::InvalidConfig(
                "Input path must not be empty".to_string(),
            ));
        }

        if self.output.dir.is_file() {
            return Err(PacketDocError::InvalidConfig(format!(
                "Output directory {} is a file",
                self.output.dir.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_legacy_layout() {
        let config = PacketDocConfig::default();
        assert_eq!(config.input, PathBuf::from("protocol.txt"));
        assert_eq!(config.output.dir, PathBuf::from("."));
        assert!(!config.output.escape_html);
        assert!(config.markdown.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config: PacketDocConfig = toml::from_str(
            r#"
input = "docs/protocol.txt"

[output]
escape_html = true
"#,
        )
        .unwrap();

        assert_eq!(config.input, PathBuf::from("docs/protocol.txt"));
        assert_eq!(config.output.dir, PathBuf::from("."));
        assert!(config.output.escape_html);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packetdoc.toml");

        let mut config = PacketDocConfig::default();
        config.output.dir = PathBuf::from("site/tables");
        config.markdown.path = Some(PathBuf::from("site/PROTOCOL.md"));
        config.to_file(&path).unwrap();

        assert_eq!(PacketDocConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_validate_rejects_empty_input() {
        let config = PacketDocConfig {
            input: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PacketDocError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_file_output_dir() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut config = PacketDocConfig::default();
        config.output.dir = file.path().to_path_buf();
        assert!(config.validate().is_err());
    }
}
