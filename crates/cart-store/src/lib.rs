#[cfg(not(any(feature = "memory", feature = "sqlite")))]
compile_error!("Enable a store feature: `memory` or `sqlite`.");

use cart_types::ports::cart_store::{CartStore, StoreError};

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub struct Store {
    #[cfg(feature = "memory")]
    memory: memory::InMemoryStore,
    #[cfg(feature = "sqlite")]
    sqlite: sqlite::SqliteStore,
}

pub async fn build_store(url: Option<&str>) -> anyhow::Result<Store> {
    Store::build_store(url).await
}

impl Store {
    #[cfg(all(feature = "memory", not(feature = "sqlite")))]
    pub async fn build_store(_: Option<&str>) -> anyhow::Result<Self> {
        Ok(Self {
            memory: crate::memory::InMemoryStore::new(),
        })
    }

    #[cfg(all(feature = "sqlite", not(feature = "memory")))]
    pub async fn build_store(database_url: Option<&str>) -> anyhow::Result<Self> {
        let url = database_url.unwrap_or("sqlite://cart.db");
        let sqlite = sqlite::SqliteStore::new(url).await?;
        Ok(Self { sqlite })
    }

    // Both features: memory acts as a read-through cache in front of sqlite.
    #[cfg(all(feature = "sqlite", feature = "memory"))]
    pub async fn build_store(database_url: Option<&str>) -> anyhow::Result<Self> {
        let memory = crate::memory::InMemoryStore::new();
        let url = database_url.unwrap_or("sqlite://cart.db");
        let sqlite = sqlite::SqliteStore::new(url).await?;
        Ok(Self { memory, sqlite })
    }
}

#[cfg(all(feature = "memory", not(feature = "sqlite")))]
#[async_trait::async_trait]
impl CartStore for Store {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.memory.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.memory.set(key, value).await
    }
}

#[cfg(all(feature = "sqlite", not(feature = "memory")))]
#[async_trait::async_trait]
impl CartStore for Store {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.sqlite.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.sqlite.set(key, value).await
    }
}

#[cfg(all(feature = "sqlite", feature = "memory"))]
#[async_trait::async_trait]
impl CartStore for Store {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if let Some(hit) = self.memory.get(key).await? {
            return Ok(Some(hit));
        }
        let value = self.sqlite.get(key).await?;
        if let Some(v) = &value {
            self.memory.set(key, v).await?;
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.sqlite.set(key, value).await?;
        self.memory.set(key, value).await
    }
}
