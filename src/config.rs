use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Database used when neither the command line nor the config names one
pub const DEFAULT_DATABASE_NAME: &str = "test";

/// Directory, relative to the working directory, holding database files
pub const DEFAULT_DATABASES_DIR: &str = "databases";

/// Log filter when neither `--verbose` nor `RUST_LOG` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilestashConfig {
    pub database: Option<String>,
    pub databases_dir: Option<String>,
}

impl FilestashConfig {
    /// Database name, with a command-line override taking precedence
    pub fn database_name(&self, cli_override: Option<&str>) -> anyhow::Result<String> {
        let name = cli_override
            .or(self.database.as_deref())
            .unwrap_or(DEFAULT_DATABASE_NAME);
        validate_database_name(name)?;
        Ok(name.to_string())
    }

    /// Full path of the database file under `base`
    pub fn database_path_in(&self, base: &Path, name: &str) -> PathBuf {
        let dir = self.databases_dir.as_deref().unwrap_or(DEFAULT_DATABASES_DIR);
        base.join(dir).join(format!("{}.db", name))
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("filestash.toml")
}

/// Database names become file names, so only a conservative character set is allowed
pub fn validate_database_name(name: &str) -> anyhow::Result<()> {
    if name.is_empty() {
        anyhow::bail!("database name must not be empty");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        anyhow::bail!(
            "invalid database name {:?} (use letters, digits, '-' and '_')",
            name
        );
    }
    Ok(())
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<FilestashConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: FilestashConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
