//! Breakpoint tables loaded from YAML.
//!
//! ```yaml
//! columns:
//!   base: 2
//!   steps:
//!     - { min_width: 640, value: 3 }
//! gaps:
//!   base: 8
//! ```
//!
//! Either table may be omitted, in which case the default applies.

use mosaic_layout::LayoutConfig;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Parse and validate a configuration from a YAML string.
///
/// An empty document yields the default configuration.
pub fn from_yaml(yaml: &str) -> Result<LayoutConfig, ConfigError> {
    if yaml.trim().is_empty() {
        return Ok(LayoutConfig::default());
    }
    let config: LayoutConfig = serde_yaml_ng::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

/// Serialize a configuration to a YAML string.
pub fn to_yaml(config: &LayoutConfig) -> Result<String, ConfigError> {
    Ok(serde_yaml_ng::to_string(config)?)
}

/// Read, parse and validate a configuration file.
pub fn load(path: impl AsRef<Path>) -> Result<LayoutConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = from_yaml(&content)?;
    tracing::debug!(
        path = %path.display(),
        column_steps = config.columns.steps.len(),
        gap_steps = config.gaps.steps.len(),
        "loaded layout config"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_layout::{BreakpointError, Breakpoints};

    const TABLET_YAML: &str = r"
columns:
  base: 1
  steps:
    - { min_width: 600, value: 2 }
    - { min_width: 1200, value: 3 }
gaps:
  base: 4
  steps:
    - min_width: 600
      value: 10
";

    #[test]
    fn test_parse_config() {
        let config = from_yaml(TABLET_YAML).unwrap();
        assert_eq!(config.columns.base, 1);
        assert_eq!(config.columns.steps.len(), 2);
        assert_eq!(config.column_count(599.0), 1);
        assert_eq!(config.column_count(1200.0), 3);
        assert_eq!(config.gap(600.0), 10);
    }

    #[test]
    fn test_missing_tables_use_defaults() {
        let config = from_yaml("gaps:\n  base: 20\n").unwrap();
        assert_eq!(config.columns, Breakpoints::default_columns());
        assert_eq!(config.gap(2000.0), 20);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(from_yaml("").unwrap(), LayoutConfig::default());
        assert_eq!(from_yaml("  \n").unwrap(), LayoutConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = from_yaml("colums:\n  base: 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = from_yaml("columns:\n  base: many\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_decreasing_columns_rejected() {
        let yaml = r"
columns:
  base: 4
  steps:
    - { min_width: 800, value: 2 }
";
        let err = from_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation(BreakpointError::DecreasingColumns { .. })
        ));
    }

    #[test]
    fn test_to_yaml_reparses() {
        let config = from_yaml(TABLET_YAML).unwrap();
        let yaml = to_yaml(&config).unwrap();
        assert_eq!(from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load("/nonexistent/mosaic.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/mosaic.yaml"));
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("mosaic-config-{}.yaml", std::process::id()));
        fs::write(&path, TABLET_YAML).unwrap();
        let config = load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.column_count(700.0), 2);
    }
}
