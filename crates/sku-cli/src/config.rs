//! Generator configuration: TOML file, environment, and flag overrides.
//!
//! Precedence, lowest first: built-in defaults, the file named by `--config`
//! (or `SKUGEN_CONFIG` when the flag is absent), then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use sku_model::{GeneratorOptions, TermFilter};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV_VAR: &str = "SKUGEN_CONFIG";

/// Flag values that take precedence over the configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub max_combinations: Option<usize>,
    pub require_suffix: bool,
}

/// Configuration file to read, if any.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(CONFIG_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

/// Parses generator options from TOML text. Missing keys keep their defaults.
pub fn parse_options(text: &str) -> Result<GeneratorOptions> {
    let options: GeneratorOptions = toml::from_str(text).context("parse generator options")?;
    Ok(options)
}

pub fn load_options_file(path: &Path) -> Result<GeneratorOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    parse_options(&text).with_context(|| format!("invalid config {}", path.display()))
}

/// Builds the effective options and validates them.
pub fn load_options(explicit: Option<&Path>, overrides: Overrides) -> Result<GeneratorOptions> {
    let options = match config_path(explicit) {
        Some(path) => {
            debug!(path = %path.display(), "loading generator config");
            load_options_file(&path)?
        }
        None => GeneratorOptions::default(),
    };
    let options = apply_overrides(options, overrides);
    options.validate().context("invalid generator options")?;
    Ok(options)
}

pub fn apply_overrides(mut options: GeneratorOptions, overrides: Overrides) -> GeneratorOptions {
    if let Some(limit) = overrides.max_combinations {
        options.max_combinations = limit;
    }
    if overrides.require_suffix {
        options.term_filter = TermFilter::WithSuffix;
    }
    options
}

#[cfg(test)]
mod tests {
    use sku_model::{DEFAULT_MAX_COMBINATIONS, MergeRule};

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let options = parse_options("").unwrap();
        assert_eq!(options, GeneratorOptions::default());
        assert_eq!(options.max_combinations, DEFAULT_MAX_COMBINATIONS);
        assert_eq!(options.merge_rules, vec![MergeRule::laminate()]);
    }

    #[test]
    fn flags_override_file_values() {
        let options = parse_options("max_combinations = 10\nterm_filter = \"all\"\n").unwrap();
        let options = apply_overrides(
            options,
            Overrides {
                max_combinations: Some(20),
                require_suffix: true,
            },
        );
        assert_eq!(options.max_combinations, 20);
        assert_eq!(options.term_filter, TermFilter::WithSuffix);
    }

    #[test]
    fn unknown_filter_is_rejected() {
        assert!(parse_options("term_filter = \"sometimes\"").is_err());
    }

    #[test]
    fn explicit_path_wins() {
        let path = Path::new("custom.toml");
        assert_eq!(config_path(Some(path)), Some(path.to_path_buf()));
    }
}
