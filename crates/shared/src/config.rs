//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Timed token configuration.
    #[serde(default)]
    pub token: TokenConfig,
    /// Outbound email configuration.
    #[serde(default)]
    pub email: EmailConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins allowed by CORS. Empty means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Table holding product rows.
    #[serde(default = "default_product_table")]
    pub product_table: String,
    /// Table holding blog post rows.
    #[serde(default = "default_post_table")]
    pub post_table: String,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_product_table() -> String {
    "charcuteria".to_string()
}

fn default_post_table() -> String {
    "blog".to_string()
}

/// Timed token configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    /// Shared secret the tokens are keyed with.
    #[serde(default = "default_token_secret")]
    pub secret: String,
    /// Length of one token window in seconds.
    #[serde(default = "default_token_interval")]
    pub interval_secs: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: default_token_secret(),
            interval_secs: default_token_interval(),
        }
    }
}

fn default_token_secret() -> String {
    "clave_secreta_predeterminada".to_string()
}

fn default_token_interval() -> u64 {
    300 // 5 minutes
}

/// Email (SMTP) configuration.
#[derive(Clone, Deserialize)]
pub struct EmailConfig {
    /// SMTP relay host.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP submission port (STARTTLS).
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username.
    #[serde(default)]
    pub smtp_username: String,
    /// SMTP password.
    #[serde(default)]
    pub smtp_password: String,
    /// Sender address.
    #[serde(default = "default_from_email")]
    pub from_email: String,
    /// Sender display name.
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Recipient for regular contact messages.
    #[serde(default = "default_contact_recipient")]
    pub contact_recipient: String,
    /// Recipient for messages reporting a website error.
    #[serde(default = "default_error_recipient")]
    pub error_recipient: String,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &"[hidden]")
            .field("from_email", &self.from_email)
            .field("from_name", &self.from_name)
            .field("contact_recipient", &self.contact_recipient)
            .field("error_recipient", &self.error_recipient)
            .finish()
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            contact_recipient: default_contact_recipient(),
            error_recipient: default_error_recipient(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_email() -> String {
    "web@paraisodeljamon.com".to_string()
}

fn default_from_name() -> String {
    "Paraíso Del Jamón".to_string()
}

fn default_contact_recipient() -> String {
    "info@paraisodeljamon.com".to_string()
}

fn default_error_recipient() -> String {
    "webmaster@paraisodeljamon.com".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("PARAISO")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_with_database_url() {
        temp_env::with_vars(
            [
                ("PARAISO__DATABASE__URL", Some("postgres://localhost/paraiso")),
                ("PARAISO__TOKEN__SECRET", None::<&str>),
                ("PARAISO__TOKEN__INTERVAL_SECS", None),
                ("RUN_MODE", Some("test-no-such-file")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.database.url, "postgres://localhost/paraiso");
                assert_eq!(config.database.product_table, "charcuteria");
                assert_eq!(config.database.post_table, "blog");
                assert_eq!(config.token.secret, "clave_secreta_predeterminada");
                assert_eq!(config.token.interval_secs, 300);
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.email.smtp_port, 587);
            },
        );
    }

    #[test]
    fn test_env_overrides() {
        temp_env::with_vars(
            [
                ("PARAISO__DATABASE__URL", Some("postgres://localhost/paraiso")),
                ("PARAISO__DATABASE__PRODUCT_TABLE", Some("charcuteria-local")),
                ("PARAISO__TOKEN__INTERVAL_SECS", Some("60")),
                (
                    "PARAISO__SERVER__ALLOWED_ORIGINS",
                    Some("http://localhost:3000,https://example.com"),
                ),
                ("RUN_MODE", Some("test-no-such-file")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.database.product_table, "charcuteria-local");
                assert_eq!(config.token.interval_secs, 60);
                assert_eq!(
                    config.server.allowed_origins,
                    vec!["http://localhost:3000", "https://example.com"]
                );
            },
        );
    }

    #[test]
    fn test_email_config_debug_hides_password() {
        let config = EmailConfig {
            smtp_password: "hunter2".to_string(),
            ..EmailConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[hidden]"));
    }
}
