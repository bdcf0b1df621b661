use serde::Deserialize;
use tracing::warn;

const DEV_JWT_SECRET: &str = "your-secret-key-change-in-production";

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub mongo_url: String,
    pub mongo_db: String,
    pub allowed_origins: Vec<String>,
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set; using the development secret");
            DEV_JWT_SECRET.into()
        });
        let jwt = JwtConfig {
            secret,
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(30),
        };
        Ok(Self {
            mongo_url: std::env::var("MONGO_URL")
                .unwrap_or_else(|_| "mongodb://localhost:27017".into()),
            mongo_db: std::env::var("MONGO_DB").unwrap_or_else(|_| "fastapi_db".into()),
            allowed_origins: parse_origins(
                &std::env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".into()),
            ),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("APP_PORT")
                .ok()
                .map(|v| v.parse::<u16>())
                .transpose()?
                .unwrap_or(8080),
            jwt,
        })
    }

    /// True when any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_split_and_trimmed() {
        let origins = parse_origins("http://localhost:3000, https://example.com ,,");
        assert_eq!(origins, vec!["http://localhost:3000", "https://example.com"]);
    }

    #[test]
    fn wildcard_origin_allows_any() {
        let config = AppConfig {
            mongo_url: "mongodb://localhost:27017".into(),
            mongo_db: "test".into(),
            allowed_origins: parse_origins("*"),
            host: "127.0.0.1".into(),
            port: 8080,
            jwt: JwtConfig {
                secret: "test".into(),
                ttl_minutes: 30,
            },
        };
        assert!(config.allows_any_origin());
    }
}
