//! Target file configuration stored in `authfix.toml` under the project root.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::core::fixes::Target;

pub const CONFIG_FILE_NAME: &str = "authfix.toml";
pub const DEFAULT_SERVER_ROUTES: &str = "server/routes.ts";
pub const DEFAULT_CLIENT_API: &str = "client/src/lib/api.ts";

/// Tool configuration (TOML).
///
/// Every field is optional; a missing file or section means the stock
/// application layout.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuthfixConfig {
    pub targets: TargetsConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TargetsConfig {
    /// Server route definitions, relative to the project root.
    pub server_routes: PathBuf,
    /// Client request helper, relative to the project root.
    pub client_api: PathBuf,
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            server_routes: PathBuf::from(DEFAULT_SERVER_ROUTES),
            client_api: PathBuf::from(DEFAULT_CLIENT_API),
        }
    }
}

impl AuthfixConfig {
    pub fn validate(&self) -> Result<()> {
        if self.targets.server_routes.as_os_str().is_empty() {
            return Err(anyhow!("targets.server_routes must be non-empty"));
        }
        if self.targets.client_api.as_os_str().is_empty() {
            return Err(anyhow!("targets.client_api must be non-empty"));
        }
        Ok(())
    }

    /// Resolve target paths against `root`. Absolute paths are kept as-is.
    pub fn resolve(&self, root: &Path) -> TargetPaths {
        TargetPaths {
            server_routes: root.join(&self.targets.server_routes),
            client_api: root.join(&self.targets.client_api),
        }
    }
}

/// Concrete file paths the fixes read and overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPaths {
    pub server_routes: PathBuf,
    pub client_api: PathBuf,
}

impl TargetPaths {
    pub fn path_for(&self, target: Target) -> &Path {
        match target {
            Target::ServerRoutes => &self.server_routes,
            Target::ClientApi => &self.client_api,
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `AuthfixConfig::default()`.
pub fn load_config(path: &Path) -> Result<AuthfixConfig> {
    if !path.exists() {
        let cfg = AuthfixConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AuthfixConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, AuthfixConfig::default());
        assert_eq!(
            cfg.targets.server_routes,
            PathBuf::from("server/routes.ts")
        );
    }

    #[test]
    fn load_partial_keeps_other_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[targets]\nclient_api = \"web/api.ts\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.targets.client_api, PathBuf::from("web/api.ts"));
        assert_eq!(
            cfg.targets.server_routes,
            PathBuf::from(DEFAULT_SERVER_ROUTES)
        );
    }

    #[test]
    fn load_rejects_empty_target() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[targets]\nserver_routes = \"\"\n").expect("write");
        let err = load_config(&path).expect_err("empty path");
        assert!(err.to_string().contains("targets.server_routes"));
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[targets\n").expect("write");
        let err = load_config(&path).expect_err("bad toml");
        assert!(err.to_string().starts_with("parse "));
    }

    #[test]
    fn resolve_joins_relative_targets_to_root() {
        let paths = AuthfixConfig::default().resolve(Path::new("/srv/app"));
        assert_eq!(
            paths.path_for(Target::ServerRoutes),
            Path::new("/srv/app/server/routes.ts")
        );
        assert_eq!(
            paths.path_for(Target::ClientApi),
            Path::new("/srv/app/client/src/lib/api.ts")
        );
    }
}
