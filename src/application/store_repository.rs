// Repository trait for the store catalog
use crate::domain::store::Store;
use async_trait::async_trait;

#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// All stores, in catalog order
    async fn list_stores(&self) -> anyhow::Result<Vec<Store>>;

    async fn find_store(&self, id: i64) -> anyhow::Result<Option<Store>>;
}
