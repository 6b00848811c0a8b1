use anyhow::{bail, Context};

/// Where the product store lives. A full URL wins over the individual parts.
#[derive(Debug, Clone, PartialEq)]
pub enum DbCredentials {
    Url(String),
    Parts {
        user: String,
        password: String,
        name: String,
        host: String,
        port: u16,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db: DbCredentials,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let db = match lookup("DATABASE_URL") {
            Some(url) if !url.trim().is_empty() => DbCredentials::Url(url),
            _ => {
                let (Some(user), Some(name)) = (lookup("DB_USER"), lookup("DB_NAME")) else {
                    bail!("either DATABASE_URL or DB_USER and DB_NAME must be set");
                };
                DbCredentials::Parts {
                    user,
                    password: lookup("DB_PASSWORD").unwrap_or_default(),
                    name,
                    host: lookup("DB_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
                    port: lookup("DB_PORT")
                        .unwrap_or_else(|| "5432".to_string())
                        .parse()
                        .context("DB_PORT must be a valid number")?,
                }
            }
        };

        Ok(Self {
            db,
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "10".to_string())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a valid number")?,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
