use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    /// Log every SQL statement.
    #[serde(default)]
    pub sqlx_logging: bool,
    /// Apply pending migrations when the server starts.
    #[serde(default = "default_true")]
    pub run_migrations: bool,
    /// Postgres schema put first on every pooled connection's search path.
    #[serde(default)]
    pub schema: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
            run_migrations: true,
            schema: None,
        }
    }
}

/// Browser origins allowed to call the API with credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { allowed_origins: default_allowed_origins() }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8000 }
fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_true() -> bool { true }
// Vite dev server
fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5173".into(), "http://127.0.0.1:5173".into()]
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

pub fn from_toml_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

/// True when a load failed only because the config file does not exist.
pub fn is_missing_file(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file when present, otherwise defaults plus `DATABASE_URL`,
    /// `SERVER_HOST` and `SERVER_PORT`. Validated either way.
    pub fn load_or_env() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_or_env_from(&path)
    }

    /// `load_or_env` for an explicit path. Only a missing file falls back to
    /// the environment; an unreadable or malformed file is an error.
    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let mut cfg = match load_from_file(path) {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => Self::from_env_only(),
            Err(e) => return Err(e.context(format!("failed to load config file {path}"))),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    fn from_env_only() -> Self {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        // the database URL may come from the environment
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let cfg = from_toml_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [database]
            url = "postgres://u:p@db:5432/booking"
            max_connections = 20
            sqlx_logging = true
            run_migrations = false

            [cors]
            allowed_origins = ["https://app.example.com"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.database.max_connections, 20);
        assert_eq!(cfg.database.min_connections, 2);
        assert!(cfg.database.sqlx_logging);
        assert!(!cfg.database.run_migrations);
        assert_eq!(cfg.cors.allowed_origins, vec!["https://app.example.com".to_string()]);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = from_toml_str("").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert!(cfg.database.run_migrations);
        assert_eq!(cfg.cors.allowed_origins.len(), 2);
    }

    #[test]
    fn rejects_non_postgres_url() {
        let db = DatabaseConfig { url: "mysql://localhost/x".into(), ..Default::default() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_inverted_pool_bounds() {
        let db = DatabaseConfig {
            url: "postgres://localhost/x".into(),
            min_connections: 5,
            max_connections: 2,
            ..Default::default()
        };
        assert!(db.validate().is_err());
    }

    fn write_temp(name: &str, content: &str) -> String {
        let path = std::env::temp_dir().join(format!("{name}-{}.toml", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn partial_server_section_keeps_file_values() {
        let path = write_temp(
            "partial-server",
            r#"
            [server]
            port = 9000

            [database]
            url = "postgres://file-user@db/file"
            run_migrations = false
            "#,
        );
        let cfg = AppConfig::load_or_env_from(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.database.url, "postgres://file-user@db/file");
        assert!(!cfg.database.run_migrations);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = write_temp("malformed", "[server\nport = 9000\n");
        let err = AppConfig::load_or_env_from(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(!is_missing_file(&err));
        assert!(err.to_string().contains("failed to load config file"));
    }

    #[test]
    fn wrong_field_type_is_an_error() {
        let path = write_temp(
            "bad-type",
            "[server]\nport = \"eighty\"\n[database]\nurl = \"postgres://localhost/x\"\n",
        );
        let res = AppConfig::load_or_env_from(&path);
        std::fs::remove_file(&path).ok();
        assert!(res.is_err());
    }

    #[test]
    fn missing_file_is_recognised() {
        let err = load_from_file("/nonexistent/booking/config.toml").unwrap_err();
        assert!(is_missing_file(&err));
        let parse_err = from_toml_str("port = ").unwrap_err();
        assert!(!is_missing_file(&parse_err));
    }

    #[test]
    fn schema_is_optional() {
        let cfg = from_toml_str("[database]\nschema = \"tenant_a\"\n").unwrap();
        assert_eq!(cfg.database.schema.as_deref(), Some("tenant_a"));
        assert!(from_toml_str("").unwrap().database.schema.is_none());
    }

    #[test]
    fn zero_worker_threads_normalized() {
        let mut s = ServerConfig { worker_threads: Some(0), ..Default::default() };
        s.normalize().unwrap();
        assert_eq!(s.worker_threads, Some(4));
    }
}
