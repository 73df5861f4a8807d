//! Process host configuration, read from a TOML file.
//!
//! ```toml
//! shell = "bash"
//! shell_args = ["-c"]
//! cwd = "/srv/project"
//! export_variables = true
//! strip_trailing_newlines = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Program used to interpret command lines.
    pub shell: String,
    /// Arguments placed before the command line (`-c` for POSIX shells).
    pub shell_args: Vec<String>,
    /// Working directory for commands; inherited when unset.
    pub cwd: Option<PathBuf>,
    /// Export text and boolean variables into the command's environment.
    pub export_variables: bool,
    pub strip_trailing_newlines: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            shell: "sh".into(),
            shell_args: vec!["-c".into()],
            cwd: None,
            export_variables: true,
            strip_trailing_newlines: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl HostConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), shell = %config.shell, "loaded host config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(HostConfig::from_toml_str("").unwrap(), HostConfig::default());
    }

    #[test]
    fn full_document() {
        let config = HostConfig::from_toml_str(indoc! {r#"
            shell = "bash"
            shell_args = ["--noprofile", "-c"]
            cwd = "/tmp"
            export_variables = false
            strip_trailing_newlines = false
        "#})
        .unwrap();
        assert_eq!(config.shell, "bash");
        assert_eq!(config.shell_args, ["--noprofile", "-c"]);
        assert_eq!(config.cwd, Some(PathBuf::from("/tmp")));
        assert!(!config.export_variables);
        assert!(!config.strip_trailing_newlines);
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let config = HostConfig::from_toml_str(r#"shell = "zsh""#).unwrap();
        assert_eq!(config.shell, "zsh");
        assert_eq!(config.shell_args, ["-c"]);
        assert!(config.export_variables);
    }

    #[test]
    fn unknown_field_rejected() {
        let err = HostConfig::from_toml_str("shel = \"sh\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "shell = \"dash\"").unwrap();
        let config = HostConfig::load(file.path()).unwrap();
        assert_eq!(config.shell, "dash");
    }

    #[test]
    fn load_missing_file() {
        let err = HostConfig::load(Path::new("/nonexistent/host.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/host.toml"));
    }
}
