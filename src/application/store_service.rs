// Store service - Use case for reading the store catalog
use crate::application::store_repository::StoreRepository;
use crate::domain::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct StoreService {
    repository: Arc<dyn StoreRepository>,
}

impl StoreService {
    pub fn new(repository: Arc<dyn StoreRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_stores(&self) -> anyhow::Result<Vec<Store>> {
        self.repository.list_stores().await
    }

    pub async fn find_store(&self, id: i64) -> anyhow::Result<Option<Store>> {
        self.repository.find_store(id).await
    }
}
