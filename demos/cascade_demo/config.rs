//! Configuration structs for the cascade demo application.
//!
//! The root [`DemoConfig`] holds a few scalars plus two nested sections, so the
//! key-by-key merge of custom files is visible in the output.

use serde::{Deserialize, Serialize};

/// Root configuration for the demo application.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Application name.
    pub name: String,

    pub server: ServerConfig,

    pub database: DatabaseConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// Set to `~` in an override to clear it.
    pub url: Option<String>,
    pub pool_size: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            name: "cascade-demo".into(),
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 3000,
                max_connections: 100,
            },
            database: DatabaseConfig {
                url: Some("postgres://localhost/demo".into()),
                pool_size: 5,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn override_merges_into_dumped_defaults() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("cascade-demo.yaml");
        fs::write(&base, cascfig::dump_yaml(&DemoConfig::default()).unwrap()).unwrap();
        let custom = dir.path().join("cascade-demo.custom.yaml");
        fs::write(&custom, "server: {port: 9000}\ndatabase: {url: ~}\n").unwrap();

        let mut config = DemoConfig::default();
        let source = cascfig::load_from_file(&mut config, &base, None).unwrap();
        assert_eq!(source, Some(custom));

        let text = cascfig::dump_yaml(&config).unwrap();
        assert!(text.contains("port: 9000"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.database.url, None);
        assert_eq!(config.database.pool_size, 5);
    }
}
