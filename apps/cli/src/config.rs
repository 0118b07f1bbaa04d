//! Runtime configuration resolved from flags and environment.

use std::path::PathBuf;

/// Environment variable naming the database file.
pub const DB_ENV: &str = "BOLAO_DB";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    /// Flag value wins over `BOLAO_DB`, which wins over the data directory default.
    pub fn resolve(db_flag: Option<PathBuf>) -> Self {
        let env_path = std::env::var_os(DB_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::from_sources(db_flag, env_path)
    }

    fn from_sources(db_flag: Option<PathBuf>, env_path: Option<PathBuf>) -> Self {
        let db_path = db_flag.or(env_path).unwrap_or_else(default_db_path);
        Self { db_path }
    }
}

fn default_db_path() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bolao")
        .join("bolao.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins() {
        let config = Config::from_sources(
            Some(PathBuf::from("flag.db")),
            Some(PathBuf::from("env.db")),
        );
        assert_eq!(config.db_path, PathBuf::from("flag.db"));
    }

    #[test]
    fn env_used_without_flag() {
        let config = Config::from_sources(None, Some(PathBuf::from("env.db")));
        assert_eq!(config.db_path, PathBuf::from("env.db"));
    }

    #[test]
    fn default_ends_with_app_file() {
        let config = Config::from_sources(None, None);
        assert!(config.db_path.ends_with("bolao/bolao.db"));
    }
}
