// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Backend configuration with strict validation.
//!
//! The five benchmark backends are built in. A YAML file can replace the
//! backend table or relocate the log and output directories; it is validated
//! the same way as the built-in table before any log is read.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

use crate::error::{ConfigValidationError, PerfTablesError, PerfTablesResult};

/// Configuration file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "perftables.yaml";

/// Operation line pattern. `{row}` and `{col}` are replaced by the escaped
/// orientation markers; groups are (orientation, operation, mean, std).
pub const DEFAULT_OPERATION_PATTERN: &str =
    r"({row}|{col})\s+(.+?)\s*:\s*([\d.]+)\s*±\s*([\d.]+)\s*seconds";

/// Built-in backends: (name, log file, row marker, col marker).
const DEFAULT_BACKENDS: [(&str, &str, &str, &str); 5] = [
    ("C++", "log_cpp_mat.txt", "row-major", "col-major"),
    ("NumPy", "log_python_np.txt", "row-major", "col-major"),
    ("pandas", "log_python_pd.txt", "row-oriented", "col-oriented"),
    ("R df", "log_R_df.txt", "row-major", "col-major"),
    ("R mat", "log_R_mat.txt", "row-major", "col-major"),
];

/// Raw backend entry as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
struct RawBackendConfig {
    name: String,
    file: String,
    row_marker: String,
    col_marker: String,
    #[serde(default = "default_pattern")]
    pattern: String,
}

fn default_pattern() -> String {
    DEFAULT_OPERATION_PATTERN.to_string()
}

fn default_dir() -> String {
    ".".to_string()
}

fn default_backends() -> Vec<RawBackendConfig> {
    DEFAULT_BACKENDS
        .iter()
        .map(|(name, file, row, col)| RawBackendConfig {
            name: name.to_string(),
            file: file.to_string(),
            row_marker: row.to_string(),
            col_marker: col.to_string(),
            pattern: default_pattern(),
        })
        .collect()
}

/// Raw root configuration file.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default = "default_dir")]
    log_dir: String,
    #[serde(default = "default_dir")]
    output_dir: String,
    #[serde(default = "default_backends")]
    backends: Vec<RawBackendConfig>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            log_dir: default_dir(),
            output_dir: default_dir(),
            backends: default_backends(),
        }
    }
}

/// Validated backend: where its log lives and how to read it.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub name: String,
    /// Log file, relative to [`Config::log_dir`] unless absolute.
    pub file: PathBuf,
    pub row_marker: String,
    pub col_marker: String,
    /// Compiled operation pattern with four capture groups.
    pub pattern: Regex,
}

/// Complete validated configuration, immutable for the rest of the run.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_dir: PathBuf,
    pub output_dir: PathBuf,
    pub backends: Vec<BackendConfig>,
}

impl Config {
    /// Resolved location of a backend's log file.
    pub fn log_path(&self, backend: &BackendConfig) -> PathBuf {
        self.log_dir.join(&backend.file)
    }

    /// Backend names in table column order.
    pub fn backend_names(&self) -> Vec<String> {
        self.backends.iter().map(|b| b.name.clone()).collect()
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// The built-in five-backend configuration rooted at the current directory.
    pub fn builtin() -> PerfTablesResult<Config> {
        Self::validate(RawConfig::default())
    }

    /// Load an explicit config file, or `perftables.yaml` if it exists, or
    /// fall back to the built-in configuration.
    pub fn discover(explicit: Option<&Path>) -> PerfTablesResult<Config> {
        match explicit {
            Some(path) => Self::load_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_file(DEFAULT_CONFIG_FILE)
            }
            None => Self::builtin(),
        }
    }

    /// Load and validate configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> PerfTablesResult<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PerfTablesError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| PerfTablesError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load and validate configuration from a YAML string.
    pub fn load_string(content: &str) -> PerfTablesResult<Config> {
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| PerfTablesError::ConfigParse {
                message: format!("YAML parse error: {}", e),
            })?;

        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> PerfTablesResult<Config> {
        if raw.backends.is_empty() {
            return Err(ConfigValidationError::SchemaValidation {
                message: "At least one backend must be defined".to_string(),
            }
            .into());
        }

        let mut backends = Vec::with_capacity(raw.backends.len());
        let mut seen_names = HashSet::new();

        for raw_backend in raw.backends {
            let backend = Self::validate_backend(raw_backend)?;

            if !seen_names.insert(backend.name.clone()) {
                return Err(ConfigValidationError::DuplicateBackend { name: backend.name }.into());
            }

            backends.push(backend);
        }

        Ok(Config {
            log_dir: PathBuf::from(raw.log_dir),
            output_dir: PathBuf::from(raw.output_dir),
            backends,
        })
    }

    fn validate_backend(raw: RawBackendConfig) -> Result<BackendConfig, ConfigValidationError> {
        let name = raw.name.trim().to_string();
        if name.is_empty() {
            return Err(ConfigValidationError::InvalidFieldValue {
                field: "name",
                value: raw.name,
                reason: "Backend name cannot be empty".to_string(),
            });
        }

        if raw.file.trim().is_empty() {
            return Err(ConfigValidationError::InvalidFieldValue {
                field: "file",
                value: raw.file,
                reason: format!("Log file for backend {} cannot be empty", name),
            });
        }

        for (field, marker) in [("row_marker", &raw.row_marker), ("col_marker", &raw.col_marker)] {
            if marker.is_empty() {
                return Err(ConfigValidationError::InvalidFieldValue {
                    field,
                    value: marker.clone(),
                    reason: format!("Orientation marker for backend {} cannot be empty", name),
                });
            }
        }

        if raw.row_marker == raw.col_marker {
            return Err(ConfigValidationError::InvalidFieldValue {
                field: "col_marker",
                value: raw.col_marker,
                reason: "Row and column markers must differ".to_string(),
            });
        }

        let pattern = compile_pattern(&name, &raw.pattern, &raw.row_marker, &raw.col_marker)?;

        Ok(BackendConfig {
            name,
            file: PathBuf::from(raw.file),
            row_marker: raw.row_marker,
            col_marker: raw.col_marker,
            pattern,
        })
    }
}

/// Substitute the markers into a pattern template and compile it.
fn compile_pattern(
    backend: &str,
    template: &str,
    row_marker: &str,
    col_marker: &str,
) -> Result<Regex, ConfigValidationError> {
    let source = template
        .replace("{row}", &regex::escape(row_marker))
        .replace("{col}", &regex::escape(col_marker));

    let pattern = Regex::new(&source).map_err(|e| ConfigValidationError::InvalidPattern {
        backend: backend.to_string(),
        reason: e.to_string(),
    })?;

    // captures_len counts the implicit whole-match group
    if pattern.captures_len() < 5 {
        return Err(ConfigValidationError::InvalidPattern {
            backend: backend.to_string(),
            reason: format!(
                "expected 4 capture groups (orientation, operation, mean, std), found {}",
                pattern.captures_len() - 1
            ),
        });
    }

    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_backends() {
        let config = ConfigLoader::builtin().unwrap();
        assert_eq!(
            config.backend_names(),
            vec!["C++", "NumPy", "pandas", "R df", "R mat"]
        );
        assert_eq!(config.backends[2].row_marker, "row-oriented");
        assert_eq!(config.log_path(&config.backends[0]), Path::new("./log_cpp_mat.txt"));
    }

    #[test]
    fn test_default_pattern_matches_log_line() {
        let config = ConfigLoader::builtin().unwrap();
        let line = "row-major sum: 0.000010 ± 0.000001 seconds (mean ± std over 100 runs)";
        let caps = config.backends[0].pattern.captures(line).unwrap();

        assert_eq!(&caps[1], "row-major");
        assert_eq!(&caps[2], "sum");
        assert_eq!(&caps[3], "0.000010");
        assert_eq!(&caps[4], "0.000001");
    }

    #[test]
    fn test_yaml_overrides() {
        let yaml = r#"
log_dir: logs
output_dir: out
backends:
  - name: Rust
    file: log_rust.txt
    row_marker: row-major
    col_marker: col-major
"#;
        let config = ConfigLoader::load_string(yaml).unwrap();
        assert_eq!(config.backends.len(), 1);
        assert_eq!(config.log_path(&config.backends[0]), Path::new("logs/log_rust.txt"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_yaml_defaults_backends() {
        let config = ConfigLoader::load_string("output_dir: tables\n").unwrap();
        assert_eq!(config.backends.len(), 5);
        assert_eq!(config.log_dir, PathBuf::from("."));
    }

    #[test]
    fn test_duplicate_backends() {
        let yaml = r#"
backends:
  - name: NumPy
    file: a.txt
    row_marker: row-major
    col_marker: col-major
  - name: NumPy
    file: b.txt
    row_marker: row-major
    col_marker: col-major
"#;
        let result = ConfigLoader::load_string(yaml);
        assert!(matches!(
            result,
            Err(PerfTablesError::ConfigValidation(
                ConfigValidationError::DuplicateBackend { .. }
            ))
        ));
    }

    #[test]
    fn test_identical_markers_rejected() {
        let yaml = r#"
backends:
  - name: Julia
    file: log_jl.txt
    row_marker: major
    col_marker: major
"#;
        assert!(ConfigLoader::load_string(yaml).is_err());
    }

    #[test]
    fn test_pattern_without_groups_rejected() {
        let yaml = r#"
backends:
  - name: Julia
    file: log_jl.txt
    row_marker: row-major
    col_marker: col-major
    pattern: '({row}|{col}) (\S+)'
"#;
        let result = ConfigLoader::load_string(yaml);
        assert!(matches!(
            result,
            Err(PerfTablesError::ConfigValidation(
                ConfigValidationError::InvalidPattern { .. }
            ))
        ));
    }

    #[test]
    fn test_empty_backend_list_rejected() {
        assert!(ConfigLoader::load_string("backends: []\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigLoader::load_file("/nonexistent/perftables.yaml");
        assert!(matches!(result, Err(PerfTablesError::ConfigNotFound { .. })));
    }
}
