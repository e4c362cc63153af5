use crate::config::AppConfig;
use crate::error::ConfigError;

type Apply = fn(&mut AppConfig, &'static str, &str) -> Result<(), ConfigError>;

/// One configuration key that can be replaced from the environment.
pub struct EnvOverride {
    pub var: &'static str,
    pub key: &'static str,
    apply: Apply,
}

impl EnvOverride {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if `value` does not parse as the key's type.
    pub fn apply(&self, config: &mut AppConfig, value: &str) -> Result<(), ConfigError> {
        (self.apply)(config, self.var, value)
    }
}

pub const ENV_OVERRIDES: &[EnvOverride] = &[
    EnvOverride {
        var: "P4U_VERBOSE",
        key: "verbose_logs",
        apply: |config, var, value| {
            config.verbose_logs = parse_bool(var, value)?;
            Ok(())
        },
    },
    EnvOverride {
        var: "P4U_SERVER",
        key: "perforce_server",
        apply: |config, _, value| {
            config.perforce_server = value.to_string();
            Ok(())
        },
    },
    EnvOverride {
        var: "P4U_USER",
        key: "perforce_user",
        apply: |config, _, value| {
            config.perforce_user = value.to_string();
            Ok(())
        },
    },
    EnvOverride {
        var: "P4U_PASS",
        key: "perforce_pass",
        apply: |config, _, value| {
            config.perforce_pass = value.to_string();
            Ok(())
        },
    },
    EnvOverride {
        var: "P4U_BYPASS",
        key: "bypass_keyphrase",
        apply: |config, _, value| {
            config.bypass_keyphrase = value.to_string();
            Ok(())
        },
    },
    EnvOverride {
        var: "P4U_EXECUTABLE",
        key: "p4_executable",
        apply: |config, _, value| {
            config.p4_executable = value.to_string();
            Ok(())
        },
    },
];

/// Applies every override whose variable `lookup` returns as set and non-empty.
pub(crate) fn apply_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for entry in ENV_OVERRIDES {
        let Some(value) = lookup(entry.var).filter(|v| !v.is_empty()) else {
            continue;
        };
        entry.apply(config, &value)?;
        tracing::debug!(var = entry.var, key = entry.key, "applied environment override");
    }
    Ok(())
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidOverride {
            var,
            value: value.to_string(),
            expected: "a boolean",
        }),
    }
}
