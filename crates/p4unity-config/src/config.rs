use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use p4unity_core::ValidationPolicy;
use p4unity_perforce::{ConnectionSettings, DEFAULT_EXECUTABLE};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::overrides::apply_overrides;

/// Looked up relative to the working directory, which is the server root when `p4d` runs the trigger.
pub const DEFAULT_CONFIG_FILE: &str = "p4unity.toml";

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    verbose_logs: Option<bool>,
    perforce_server: Option<String>,
    perforce_user: Option<String>,
    perforce_pass: Option<String>,
    bypass_keyphrase: Option<String>,
    #[serde(default)]
    path_whitelist: Vec<String>,
    p4_executable: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub(crate) verbose_logs: bool,
    pub(crate) perforce_server: String,
    pub(crate) perforce_user: String,
    pub(crate) perforce_pass: String,
    pub(crate) bypass_keyphrase: String,
    pub(crate) path_whitelist: Vec<String>,
    pub(crate) p4_executable: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose_logs: false,
            perforce_server: String::new(),
            perforce_user: String::new(),
            perforce_pass: String::new(),
            bypass_keyphrase: String::new(),
            path_whitelist: Vec::new(),
            p4_executable: DEFAULT_EXECUTABLE.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the TOML file at `path`, then applies the `P4U_*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, fails to decode, or an
    /// override value does not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        apply_overrides(&mut config, |var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, or fails to decode.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                    source,
                }
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        let defaults = Self::default();
        Ok(Self {
            verbose_logs: file.verbose_logs.unwrap_or(defaults.verbose_logs),
            perforce_server: file.perforce_server.unwrap_or(defaults.perforce_server),
            perforce_user: file.perforce_user.unwrap_or(defaults.perforce_user),
            perforce_pass: file.perforce_pass.unwrap_or(defaults.perforce_pass),
            bypass_keyphrase: file.bypass_keyphrase.unwrap_or(defaults.bypass_keyphrase),
            path_whitelist: file.path_whitelist,
            p4_executable: file.p4_executable.unwrap_or(defaults.p4_executable),
        })
    }

    #[must_use]
    pub fn verbose_logs(&self) -> bool {
        self.verbose_logs
    }

    #[must_use]
    pub fn perforce_server(&self) -> &str {
        &self.perforce_server
    }

    #[must_use]
    pub fn perforce_user(&self) -> &str {
        &self.perforce_user
    }

    #[must_use]
    pub fn perforce_pass(&self) -> &str {
        &self.perforce_pass
    }

    #[must_use]
    pub fn bypass_keyphrase(&self) -> &str {
        &self.bypass_keyphrase
    }

    #[must_use]
    pub fn path_whitelist(&self) -> &[String] {
        &self.path_whitelist
    }

    #[must_use]
    pub fn p4_executable(&self) -> &str {
        &self.p4_executable
    }

    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy::new(self.path_whitelist.clone(), self.bypass_keyphrase.clone())
    }

    #[must_use]
    pub fn connection(&self) -> ConnectionSettings {
        ConnectionSettings {
            server: self.perforce_server.clone(),
            user: self.perforce_user.clone(),
            password: self.perforce_pass.clone(),
        }
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_bypass_keyphrase(mut self, keyphrase: &str) -> Self {
        self.bypass_keyphrase = keyphrase.to_string();
        self
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_path_whitelist(mut self, whitelist: &[&str]) -> Self {
        self.path_whitelist = whitelist.iter().map(ToString::to_string).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use tempfile::TempDir;

    use super::*;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const FULL_CONFIG: &str = r#"
verbose_logs = true
perforce_server = "ssl:perforce:1666"
perforce_user = "trigger"
perforce_pass = "secret"
bypass_keyphrase = "p4unity-bypass"
path_whitelist = ["//Depot/Games/", "//Depot/Tools/"]
"#;

    #[test]
    fn decodes_every_key() {
        let config = AppConfig::from_toml(FULL_CONFIG).expect("should decode");

        assert!(config.verbose_logs());
        assert_eq!(config.perforce_server(), "ssl:perforce:1666");
        assert_eq!(config.perforce_user(), "trigger");
        assert_eq!(config.perforce_pass(), "secret");
        assert_eq!(config.bypass_keyphrase(), "p4unity-bypass");
        assert_eq!(config.path_whitelist(), ["//Depot/Games/", "//Depot/Tools/"]);
        assert_eq!(config.p4_executable(), DEFAULT_EXECUTABLE);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = AppConfig::from_toml("").expect("should decode");

        assert_eq!(config, AppConfig::default());
        assert!(config.path_whitelist().is_empty());
    }

    #[test]
    fn wrong_type_is_a_decode_error() {
        let result = AppConfig::from_toml("path_whitelist = \"//Depot/\"");

        assert!(result.is_err());
    }

    #[test]
    fn policy_carries_whitelist_and_keyphrase() {
        let config = AppConfig::from_toml(FULL_CONFIG).expect("should decode");

        let policy = config.policy();

        assert_eq!(policy.bypass_keyphrase, "p4unity-bypass");
        assert_eq!(policy.path_whitelist.len(), 2);
    }

    #[test]
    fn connection_carries_credentials() {
        let config = AppConfig::from_toml(FULL_CONFIG).expect("should decode");

        let connection = config.connection();

        assert_eq!(connection.server, "ssl:perforce:1666");
        assert_eq!(connection.user, "trigger");
        assert_eq!(connection.password, "secret");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().expect("temp dir");

        let err = AppConfig::from_file(&dir.path().join(DEFAULT_CONFIG_FILE))
            .expect_err("should fail");

        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn malformed_file_is_a_decode_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "verbose_logs = [")?;

        let err = AppConfig::from_file(&path).expect_err("should fail");

        assert!(matches!(err, ConfigError::Decode { .. }));
        Ok(())
    }

    #[test]
    fn load_applies_environment_overrides() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, FULL_CONFIG)?;

        let _guard = ENV_MUTEX.lock().expect("mutex poisoned");
        let previous = std::env::var("P4U_USER").ok();
        // SAFETY: Test code mutates the environment only while ENV_MUTEX is held.
        unsafe { std::env::set_var("P4U_USER", "override-user") };

        let result = AppConfig::load(&path);

        match previous {
            // SAFETY: Test code mutates the environment only while ENV_MUTEX is held.
            Some(v) => unsafe { std::env::set_var("P4U_USER", v) },
            // SAFETY: Test code mutates the environment only while ENV_MUTEX is held.
            None => unsafe { std::env::remove_var("P4U_USER") },
        }

        let config = result?;
        assert_eq!(config.perforce_user(), "override-user");
        assert_eq!(config.perforce_server(), "ssl:perforce:1666");
        Ok(())
    }
}
