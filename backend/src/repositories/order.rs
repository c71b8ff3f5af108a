//! Order repository for database operations

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::PgPool;
use storefront_shared::models::{Order, OrderItem};
use uuid::Uuid;

/// Order record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub items: Json<Vec<OrderItem>>,
    pub total_amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Order {
            id: record.id,
            owner_id: record.owner_id,
            items: record.items.0,
            total_amount: record.total_amount,
            status: record.status,
            created_at: record.created_at,
        }
    }
}

/// Input for creating an order
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub owner_id: Uuid,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
}

/// Order repository for database operations
pub struct OrderRepository;

impl OrderRepository {
    /// Insert a new order
    ///
    /// `status` and `created_at` come from the column defaults
    /// ('Pending', NOW()).
    pub async fn create(pool: &PgPool, order: NewOrder) -> Result<OrderRecord, sqlx::Error> {
        sqlx::query_as::<_, OrderRecord>(
            r#"
            INSERT INTO orders (owner_id, items, total_amount)
            VALUES ($1, $2, $3)
            RETURNING id, owner_id, items, total_amount, status, created_at
            "#,
        )
        .bind(order.owner_id)
        .bind(Json(order.items))
        .bind(order.total_amount)
        .fetch_one(pool)
        .await
    }

    /// List all orders for an owner, newest first
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: Uuid,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        sqlx::query_as::<_, OrderRecord>(
            r#"
            SELECT id, owner_id, items, total_amount, status, created_at
            FROM orders
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    // Covered by the database-backed integration tests.
    // Run with: cargo test -- --ignored
}
