use serde::{Deserialize, Serialize};

/// A row of the `products` table. `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl Product {
    /// Combine a store-assigned id with the client-supplied fields.
    pub fn from_payload(id: i64, payload: ProductPayload) -> Self {
        Self {
            id,
            name: payload.name,
            quantity: payload.quantity,
            price: payload.price,
        }
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of `POST /product` and `PUT /product/{id}`.
///
/// Update is a full replacement: an omitted `quantity` or `price` is written
/// as zero. Any `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub price: f64,
}
