use std::env;

use cosmic_match::UnknownSignPolicy;
use cosmic_zodiac::BirthDateRules;

use crate::error::ConfigError;

pub const ENV_LOG: &str = "COSMIC_LOG";
pub const ENV_SEED: &str = "COSMIC_SEED";
pub const ENV_UNKNOWN_SIGN: &str = "COSMIC_UNKNOWN_SIGN";
pub const ENV_MIN_AGE: &str = "COSMIC_MIN_AGE";
pub const ENV_MAX_AGE: &str = "COSMIC_MAX_AGE";

/// Process-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CosmicConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Seed for score offsets. `None` draws from entropy.
    pub seed: Option<u64>,
    pub unknown_sign_policy: UnknownSignPolicy,
    pub birth_rules: BirthDateRules,
}

impl Default for CosmicConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            seed: None,
            unknown_sign_policy: UnknownSignPolicy::default(),
            birth_rules: BirthDateRules::default(),
        }
    }
}

impl CosmicConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads `COSMIC_*` vars.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset and blank
    /// values take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let seed = get(ENV_SEED)
            .map(|v| parse_var::<u64>(ENV_SEED, &v))
            .transpose()?;
        let unknown_sign_policy = match get(ENV_UNKNOWN_SIGN) {
            Some(v) => v.parse().map_err(|message| ConfigError::InvalidVar {
                key: ENV_UNKNOWN_SIGN,
                message,
            })?,
            None => defaults.unknown_sign_policy,
        };
        let min_age = match get(ENV_MIN_AGE) {
            Some(v) => parse_var::<u32>(ENV_MIN_AGE, &v)?,
            None => defaults.birth_rules.min_age,
        };
        let max_age = match get(ENV_MAX_AGE) {
            Some(v) => parse_var::<u32>(ENV_MAX_AGE, &v)?,
            None => defaults.birth_rules.max_age,
        };
        if min_age > max_age {
            return Err(ConfigError::InvalidVar {
                key: ENV_MIN_AGE,
                message: format!("{min_age} exceeds {ENV_MAX_AGE} ({max_age})"),
            });
        }

        Ok(Self {
            log_level: get(ENV_LOG).unwrap_or(defaults.log_level),
            seed,
            unknown_sign_policy,
            birth_rules: BirthDateRules { min_age, max_age },
        })
    }
}

fn parse_var<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::InvalidVar {
        key,
        message: format!("{value:?}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<CosmicConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CosmicConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config_from(&[]).expect("should parse config");
        assert_eq!(cfg, CosmicConfig::default());
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.unknown_sign_policy, UnknownSignPolicy::Reject);
        assert_eq!(cfg.birth_rules.min_age, 18);
        assert_eq!(cfg.birth_rules.max_age, 120);
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config_from(&[
            (ENV_LOG, "debug"),
            (ENV_SEED, "42"),
            (ENV_UNKNOWN_SIGN, "Neutral"),
            (ENV_MIN_AGE, "21"),
            (ENV_MAX_AGE, "99"),
        ])
        .expect("should parse config");
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.unknown_sign_policy, UnknownSignPolicy::Neutral);
        assert_eq!(cfg.birth_rules, BirthDateRules { min_age: 21, max_age: 99 });
    }

    #[test]
    fn blank_values_take_defaults() {
        let cfg = config_from(&[(ENV_SEED, "  "), (ENV_LOG, "")]).expect("should parse config");
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn rejects_bad_values() {
        let err = config_from(&[(ENV_SEED, "abc")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { key: ENV_SEED, .. }));

        let err = config_from(&[(ENV_UNKNOWN_SIGN, "fallback")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid COSMIC_UNKNOWN_SIGN"));

        assert!(config_from(&[(ENV_MIN_AGE, "-1")]).is_err());
    }

    #[test]
    fn rejects_inverted_age_range() {
        let err = config_from(&[(ENV_MIN_AGE, "50"), (ENV_MAX_AGE, "40")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { key: ENV_MIN_AGE, .. }));
    }
}
