use std::env;

/// Runtime settings, read once at startup. Defaults: local MySQL, `root`
/// user, empty password, `hms_db` schema.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mysql://root:@localhost/hms_db".to_string());
        let bind_addr =
            env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        Self {
            database_url,
            bind_addr,
        }
    }
}
