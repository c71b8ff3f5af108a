//! Order service: creation and per-owner listing

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::{NewOrder, OrderRepository};
use rust_decimal::Decimal;
use sqlx::PgPool;
use storefront_shared::models::{Order, OrderItem};
use storefront_shared::types::MessageResponse;

/// Order service
pub struct OrderService;

impl OrderService {
    /// Create an order owned by the caller
    ///
    /// Returns an acknowledgment only, not the created order.
    pub async fn create_order(
        pool: &PgPool,
        identity: &AuthUser,
        items: Option<Vec<OrderItem>>,
    ) -> Result<MessageResponse, ApiError> {
        let items = items
            .filter(|items| !items.is_empty())
            .ok_or_else(|| ApiError::BadRequest("Order items are required".to_string()))?;

        let total_amount = Self::total_amount(&items)
            .ok_or_else(|| ApiError::BadRequest("Order total is out of range".to_string()))?;

        OrderRepository::create(
            pool,
            NewOrder {
                owner_id: identity.user_id,
                items,
                total_amount,
            },
        )
        .await
        .map_err(ApiError::Database)?;

        Ok(MessageResponse::new("Order created successfully"))
    }

    /// List the caller's orders, newest first
    ///
    /// An empty list is a valid result, not an error.
    pub async fn list_orders(pool: &PgPool, identity: &AuthUser) -> Result<Vec<Order>, ApiError> {
        let records = OrderRepository::list_by_owner(pool, identity.user_id)
            .await
            .map_err(ApiError::Database)?;

        Ok(records.into_iter().map(Order::from).collect())
    }

    /// Sum of `price * quantity` over the items, in exact decimal arithmetic
    ///
    /// Checked throughout: prices pass only a presence check, so an extreme
    /// value must come back as `None` (a 400 upstream), not a panic.
    pub fn total_amount(items: &[OrderItem]) -> Option<Decimal> {
        items.iter().try_fold(Decimal::ZERO, |total, item| {
            item.price
                .checked_mul(Decimal::from(item.quantity))
                .and_then(|line| total.checked_add(line))
        })
    }
}
