use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{Product, ProductPayload};

#[cfg(test)]
pub mod memory;

/// Maximum number of rows returned by [`ProductStore::list`].
pub const LIST_LIMIT: i64 = 10;

/// Data access for the `products` table. One statement per call.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// Fails with [`AppError::NotFound`] when no row has this id.
    async fn get_by_id(&self, id: i64) -> AppResult<Product>;

    async fn create(&self, payload: ProductPayload) -> AppResult<Product>;

    /// Replaces name, quantity and price. Succeeds even if no row matched.
    async fn update(&self, id: i64, payload: ProductPayload) -> AppResult<Product>;

    /// Removes the row if present. Deleting a missing id is not an error.
    async fn delete(&self, id: i64) -> AppResult<()>;
}

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, quantity, price FROM products ORDER BY id LIMIT $1",
        )
        .bind(LIST_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Product> {
        sqlx::query_as::<_, Product>("SELECT id, name, quantity, price FROM products WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => AppError::product_not_found(),
                other => AppError::Database(other),
            })
    }

    async fn create(&self, payload: ProductPayload) -> AppResult<Product> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO products (name, quantity, price) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&payload.name)
        .bind(payload.quantity)
        .bind(payload.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(Product::from_payload(id, payload))
    }

    async fn update(&self, id: i64, payload: ProductPayload) -> AppResult<Product> {
        sqlx::query("UPDATE products SET name = $1, quantity = $2, price = $3 WHERE id = $4")
            .bind(&payload.name)
            .bind(payload.quantity)
            .bind(payload.price)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(Product::from_payload(id, payload))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
