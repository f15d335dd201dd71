//! `themenavd` settings.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults,
//! 2. `themenav.toml` in the working directory (optional),
//! 3. the environment: `THEMENAV_BIND`, `THEMENAV_ASSETS_DIR`, then
//!    `RUST_LOG` and `THEMENAV_LOG` for the log filter. `THEMENAV_LOG` wins
//!    when both are set. Empty variables count as unset.
//!
//! ```toml
//! bind = "127.0.0.1:8080"
//! assets_dir = "crates/adapters/navbar_leptos/dist"
//! log_filter = "themenavd=debug,tower_http=debug"
//! ```

use std::net::{AddrParseError, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "themenav.toml";

/// Resolved settings for one run of the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Listener address.
    pub bind: SocketAddr,
    /// Built site: `index.html`, the WASM bundle and the images.
    pub assets_dir: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
            assets_dir: PathBuf::from("dist"),
            log_filter: "themenavd=info,themenav=info,tower_http=debug".to_string(),
        }
    }
}

impl Config {
    /// Read [`CONFIG_FILE`] and the process environment.
    ///
    /// # Errors
    ///
    /// See [`ConfigError`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE), |name| std::env::var(name).ok())
    }

    /// Read `path` (a missing file means defaults), apply the variables
    /// `env` returns, then validate.
    fn load_from(
        path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        let var = |name: &str| env(name).filter(|value| !value.trim().is_empty());

        if let Some(value) = var("THEMENAV_BIND") {
            self.bind = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidBind { value, source })?;
        }
        if let Some(dir) = var("THEMENAV_ASSETS_DIR") {
            self.assets_dir = PathBuf::from(dir);
        }
        if let Some(filter) = var("THEMENAV_LOG").or_else(|| var("RUST_LOG")) {
            self.log_filter = filter;
        }
        Ok(())
    }

    /// A missing assets directory is accepted: the site may be built after
    /// the host starts.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.bind.port() == 0 {
            return Err(ConfigError::ZeroPort);
        }
        if self.assets_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyAssetsDir);
        }
        if self.assets_dir.exists() && !self.assets_dir.is_dir() {
            return Err(ConfigError::AssetsNotDirectory(self.assets_dir.clone()));
        }
        Ok(())
    }
}

/// Why the host refused to start.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("THEMENAV_BIND={value:?} is not a socket address")]
    InvalidBind {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("bind port must be non-zero")]
    ZeroPort,

    #[error("assets directory must not be empty")]
    EmptyAssetsDir,

    #[error("assets path {} is not a directory", .0.display())]
    AssetsNotDirectory(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "themenavd-config-{name}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn with_env(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        config.apply_env(env(vars))?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn should_listen_on_all_interfaces_port_8080_by_default() {
        let config = Config::default();
        assert_eq!(config.bind, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.assets_dir, Path::new("dist"));
        assert!(config.log_filter.contains("tower_http=debug"));
    }

    #[test]
    fn should_fill_missing_keys_with_defaults() {
        let config: Config = toml::from_str("bind = '127.0.0.1:3000'").unwrap();
        assert_eq!(config.bind.port(), 3000);
        assert_eq!(config, Config {
            bind: config.bind,
            ..Config::default()
        });
    }

    #[test]
    fn should_reject_unknown_keys() {
        assert!(toml::from_str::<Config>("[server]\nport = 9090").is_err());
    }

    #[test]
    fn should_reject_bind_without_port_in_file() {
        assert!(toml::from_str::<Config>("bind = 'localhost'").is_err());
    }

    #[test]
    fn should_use_defaults_when_file_missing() {
        let dir = scratch_dir("missing");
        let config = Config::load_from(&dir.join("absent.toml"), env(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn should_let_environment_override_file() {
        let dir = scratch_dir("override");
        let path = dir.join(CONFIG_FILE);
        std::fs::write(
            &path,
            "bind = '127.0.0.1:9090'\nassets_dir = 'site'\nlog_filter = 'warn'\n",
        )
        .unwrap();

        let from_file = Config::load_from(&path, env(&[])).unwrap();
        assert_eq!(from_file.bind, "127.0.0.1:9090".parse().unwrap());
        assert_eq!(from_file.log_filter, "warn");

        let overridden =
            Config::load_from(&path, env(&[("THEMENAV_BIND", "[::1]:7000")])).unwrap();
        assert_eq!(overridden.bind, "[::1]:7000".parse().unwrap());
        assert_eq!(overridden.assets_dir, Path::new("site"));
    }

    #[test]
    fn should_name_file_in_parse_error() {
        let dir = scratch_dir("broken");
        let path = dir.join(CONFIG_FILE);
        std::fs::write(&path, "invalid {{{").unwrap();

        let err = Config::load_from(&path, env(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().ends_with(CONFIG_FILE));
    }

    #[test]
    fn should_prefer_themenav_log_over_rust_log() {
        let config = with_env(&[("RUST_LOG", "trace"), ("THEMENAV_LOG", "themenavd=debug")]).unwrap();
        assert_eq!(config.log_filter, "themenavd=debug");
    }

    #[test]
    fn should_fall_back_to_rust_log() {
        let config = with_env(&[("RUST_LOG", "trace")]).unwrap();
        assert_eq!(config.log_filter, "trace");
    }

    #[test]
    fn should_treat_empty_variables_as_unset() {
        let config = with_env(&[("THEMENAV_LOG", ""), ("RUST_LOG", "info"), ("THEMENAV_BIND", " ")])
            .unwrap();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.bind, Config::default().bind);
    }

    #[test]
    fn should_reject_malformed_bind_variable() {
        let err = with_env(&[("THEMENAV_BIND", "0.0.0.0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBind { ref value, .. } if value == "0.0.0.0"));
    }

    #[test]
    fn should_reject_zero_port() {
        let err = with_env(&[("THEMENAV_BIND", "127.0.0.1:0")]).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPort));
    }

    #[test]
    fn should_reject_empty_assets_dir_from_file() {
        let config: Config = toml::from_str("assets_dir = ''").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyAssetsDir)));
    }

    #[test]
    fn should_reject_assets_path_that_is_a_file() {
        let dir = scratch_dir("file");
        let file = dir.join("index.html");
        std::fs::write(&file, "<html></html>").unwrap();

        let err = with_env(&[("THEMENAV_ASSETS_DIR", file.to_str().unwrap())]).unwrap_err();
        assert!(matches!(err, ConfigError::AssetsNotDirectory(path) if path == file));
    }

    #[test]
    fn should_accept_assets_dir_not_built_yet() {
        let dir = scratch_dir("unbuilt").join("dist");
        let config = with_env(&[("THEMENAV_ASSETS_DIR", dir.to_str().unwrap())]).unwrap();
        assert_eq!(config.assets_dir, dir);
    }
}
