// src/config.rs

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use std::{env, net::SocketAddr};

use sqlx::postgres::PgPoolOptions;

use crate::db::memory::{MemoryBanners, MemoryContacts, MemoryNews, MemoryProducts, MemoryQuotes};
use crate::db::{
    BannerStore, ContactStore, NewsStore, PgBannerStore, PgContactStore, PgNewsStore,
    PgProductStore, PgQuoteStore, ProductStore, QuoteStore,
};

/// Environment-derived settings for the API server.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Absent means "run on the in-memory store", which is how local
    /// development and the test suite operate.
    pub database_url: Option<String>,
    pub uploads_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);
        let database_url = env::var("DATABASE_URL").ok();
        let uploads_dir = env::var("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        Self {
            port,
            database_url,
            uploads_dir,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Shared application state: one store handle per content type, plus where
/// uploaded images land on disk.
#[derive(Clone)]
pub struct AppState {
    pub banners: Arc<dyn BannerStore>,
    pub contacts: Arc<dyn ContactStore>,
    pub products: Arc<dyn ProductStore>,
    pub news: Arc<dyn NewsStore>,
    pub quotes: Arc<dyn QuoteStore>,
    pub uploads_dir: PathBuf,
}

impl AppState {
    /// Picks the backend from the configuration: Postgres when a
    /// `DATABASE_URL` is present, the in-memory store otherwise.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        match &config.database_url {
            Some(url) => Self::postgres(url, config.uploads_dir.clone()).await,
            None => {
                tracing::warn!("DATABASE_URL not set, running on the in-memory store");
                Ok(Self::in_memory(config.uploads_dir.clone()))
            }
        }
    }

    pub async fn postgres(database_url: &str, uploads_dir: PathBuf) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;

        sqlx::migrate!().run(&pool).await?;
        tracing::info!("database connected, migrations up to date");

        Ok(Self {
            banners: Arc::new(PgBannerStore::new(pool.clone())),
            contacts: Arc::new(PgContactStore::new(pool.clone())),
            products: Arc::new(PgProductStore::new(pool.clone())),
            news: Arc::new(PgNewsStore::new(pool.clone())),
            quotes: Arc::new(PgQuoteStore::new(pool)),
            uploads_dir,
        })
    }

    pub fn in_memory(uploads_dir: PathBuf) -> Self {
        Self {
            banners: Arc::new(MemoryBanners::default()),
            contacts: Arc::new(MemoryContacts::default()),
            products: Arc::new(MemoryProducts::default()),
            news: Arc::new(MemoryNews::default()),
            quotes: Arc::new(MemoryQuotes::default()),
            uploads_dir,
        }
    }
}
