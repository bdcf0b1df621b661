use crate::config::AppConfig;
use crate::store::{MongoStore, Store};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let store = MongoStore::connect(&config.mongo_url, &config.mongo_db).await?;
        Ok(Self::from_parts(Arc::new(store), Arc::new(config)))
    }

    pub fn from_parts(store: Arc<dyn Store>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    #[cfg(test)]
    pub fn fake(store: Arc<crate::store::memory::MemoryStore>) -> Self {
        use crate::config::JwtConfig;

        let config = Arc::new(AppConfig {
            mongo_url: "mongodb://localhost:27017".into(),
            mongo_db: "test".into(),
            allowed_origins: vec!["*".into()],
            host: "127.0.0.1".into(),
            port: 0,
            jwt: JwtConfig {
                secret: "test".into(),
                ttl_minutes: 30,
            },
        });
        Self::from_parts(store, config)
    }
}
