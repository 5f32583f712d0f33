// In-memory store catalog loaded at startup
use crate::application::store_repository::StoreRepository;
use crate::domain::store::Store;
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct MemoryStoreRepository {
    stores: Vec<Store>,
}

impl MemoryStoreRepository {
    pub fn new(stores: Vec<Store>) -> Self {
        Self { stores }
    }
}

#[async_trait]
impl StoreRepository for MemoryStoreRepository {
    async fn list_stores(&self) -> Result<Vec<Store>> {
        Ok(self.stores.clone())
    }

    async fn find_store(&self, id: i64) -> Result<Option<Store>> {
        Ok(self.stores.iter().find(|s| s.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::WeekStrategy;

    #[tokio::test]
    async fn test_find_store() {
        let repository = MemoryStoreRepository::new(vec![
            Store::new(1, "Store A", WeekStrategy::Monday),
            Store::new(3, "Store C", WeekStrategy::Sunday),
        ]);

        assert_eq!(repository.find_store(3).await.unwrap().unwrap().name, "Store C");
        assert!(repository.find_store(2).await.unwrap().is_none());
        assert_eq!(repository.list_stores().await.unwrap().len(), 2);
    }
}
