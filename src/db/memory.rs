use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ProductStore, LIST_LIMIT};
use crate::error::{AppError, AppResult};
use crate::models::{Product, ProductPayload};

/// In-process stand-in for the products table. Ids start at 1.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Product>> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .take(LIST_LIMIT as usize)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Product> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(AppError::product_not_found)
    }

    async fn create(&self, payload: ProductPayload) -> AppResult<Product> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let product = Product::from_payload(inner.last_id, payload);
        inner.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, payload: ProductPayload) -> AppResult<Product> {
        let product = Product::from_payload(id, payload);
        if let Some(row) = self.inner.write().await.rows.get_mut(&id) {
            *row = product.clone();
        }
        Ok(product)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }
}

/// Every call fails the way an unreachable database would.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl ProductStore for FailingStore {
    async fn list(&self) -> AppResult<Vec<Product>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn get_by_id(&self, _id: i64) -> AppResult<Product> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn create(&self, _payload: ProductPayload) -> AppResult<Product> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update(&self, _id: i64, _payload: ProductPayload) -> AppResult<Product> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete(&self, _id: i64) -> AppResult<()> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}
