//! Configuration loading for the randomness source.
//!
//! The only tunable is where mutation draws come from. The mutation
//! probability itself is the fixed [`MUTATION_PROBABILITY`] and is not read
//! from configuration.
//!
//! ```yaml
//! randomness:
//!   source: seeded   # system | seeded | fixed
//!   seed: 42
//! ```
//!
//! [`MUTATION_PROBABILITY`]: crate::rules::MUTATION_PROBABILITY

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::randomness::{FixedDraw, RandomSource, seeded_source, system_source};

/// Environment variable that forces a seeded source.
pub const SEED_ENV_VAR: &str = "UNDEAD_SEED";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but holds an unusable value.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LifeConfig {
    /// Where mutation draws come from.
    #[serde(default)]
    pub randomness: RandomnessConfig,
}

impl LifeConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `UNDEAD_SEED`, when set, overrides the configured source with a
    /// seeded one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if `UNDEAD_SEED` is not a `u64`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, applying `UNDEAD_SEED`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if `UNDEAD_SEED` is not a `u64`.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        let seed = std::env::var(SEED_ENV_VAR).ok();
        config.apply_seed_override(seed.as_deref())?;
        Ok(config)
    }

    /// Replace the configured source with a seeded one if `seed` is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `seed` does not parse as a `u64`.
    pub fn apply_seed_override(&mut self, seed: Option<&str>) -> Result<(), ConfigError> {
        let Some(raw) = seed else {
            return Ok(());
        };
        let seed = raw.trim().parse::<u64>().map_err(|err| {
            ConfigError::Invalid(format!("{SEED_ENV_VAR}={raw:?} is not a u64 seed: {err}"))
        })?;
        info!(seed, "Seed override applied from environment");
        self.randomness = RandomnessConfig::Seeded { seed };
        Ok(())
    }
}

/// Which [`RandomSource`] to construct.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum RandomnessConfig {
    /// `rand`'s thread-local generator.
    #[default]
    System,
    /// A reproducible generator.
    Seeded {
        /// Seed for the generator.
        seed: u64,
    },
    /// Every draw returns `value`. Useful for scripted runs.
    Fixed {
        /// The constant draw, in `[0, 1)`.
        value: f64,
    },
}

impl RandomnessConfig {
    /// Check that the configured source can be built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a fixed draw lies outside `[0, 1)`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Self::Fixed { value } = *self {
            if !(0.0..1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "fixed draw {value} is outside [0, 1)"
                )));
            }
        }
        Ok(())
    }

    /// Build the configured source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if validation fails.
    pub fn build(&self) -> Result<Box<dyn RandomSource>, ConfigError> {
        self.validate()?;
        let source: Box<dyn RandomSource> = match *self {
            Self::System => {
                debug!("Using system random source");
                Box::new(system_source())
            }
            Self::Seeded { seed } => {
                debug!(seed, "Using seeded random source");
                Box::new(seeded_source(seed))
            }
            Self::Fixed { value } => {
                debug!(value, "Using fixed random source");
                Box::new(FixedDraw::new(value))
            }
        };
        Ok(source)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse_file(yaml: &str) -> LifeConfig {
        serde_yml::from_str(yaml).unwrap()
    }

    #[test]
    fn default_is_system_source() {
        assert_eq!(LifeConfig::default().randomness, RandomnessConfig::System);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = parse_file("{}");
        assert_eq!(config, LifeConfig::default());
    }

    #[test]
    fn parse_seeded_source() {
        let config = parse_file(
            r"
randomness:
  source: seeded
  seed: 123
",
        );
        assert_eq!(config.randomness, RandomnessConfig::Seeded { seed: 123 });
    }

    #[test]
    fn parse_fixed_source() {
        let config = parse_file(
            r"
randomness:
  source: fixed
  value: 0.25
",
        );
        assert_eq!(config.randomness, RandomnessConfig::Fixed { value: 0.25 });
    }

    #[test]
    fn unknown_source_is_rejected() {
        let result: Result<LifeConfig, _> = serde_yml::from_str("randomness:\n  source: dice\n");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_yaml_maps_to_yaml_error() {
        let result: Result<LifeConfig, ConfigError> = serde_yml::from_str::<LifeConfig>("randomness: [")
            .map_err(ConfigError::from);
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn fixed_draw_outside_unit_interval_is_invalid() {
        for value in [1.0, 1.5, -0.1] {
            let config = RandomnessConfig::Fixed { value };
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
            assert!(config.build().is_err());
        }
        assert!(RandomnessConfig::Fixed { value: 0.0 }.validate().is_ok());
    }

    #[test]
    fn seeded_build_matches_seeded_source() {
        let mut built = RandomnessConfig::Seeded { seed: 9 }.build().unwrap();
        let mut direct = seeded_source(9);
        for _ in 0..8 {
            assert!((built.draw() - direct.draw()).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn fixed_build_returns_constant() {
        let mut built = RandomnessConfig::Fixed { value: 0.125 }.build().unwrap();
        assert!((built.draw() - 0.125).abs() < f64::EPSILON);
        assert!((built.draw() - 0.125).abs() < f64::EPSILON);
    }

    #[test]
    fn seed_override_replaces_source() {
        let mut config = LifeConfig::default();
        config.apply_seed_override(Some(" 77 ")).unwrap();
        assert_eq!(config.randomness, RandomnessConfig::Seeded { seed: 77 });
    }

    #[test]
    fn missing_override_keeps_source() {
        let mut config = parse_file("randomness:\n  source: fixed\n  value: 0.5\n");
        config.apply_seed_override(None).unwrap();
        assert_eq!(config.randomness, RandomnessConfig::Fixed { value: 0.5 });
    }

    #[test]
    fn bad_override_is_invalid() {
        let mut config = LifeConfig::default();
        let err = config.apply_seed_override(Some("many")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert_eq!(config.randomness, RandomnessConfig::System);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = LifeConfig::from_file(Path::new("/nonexistent/undead.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
