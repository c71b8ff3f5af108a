//! Domain models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single line item within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    /// Unit price. Decimal to keep money arithmetic exact.
    pub price: Decimal,
    pub quantity: i32,
}

/// An order placed by a user.
///
/// Orders are immutable once created; `total_amount` is derived at creation
/// time as the sum of `price * quantity` over the items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_serializes_decimal_amounts() {
        let order = Order {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            items: vec![OrderItem {
                name: "Widget".to_string(),
                price: Decimal::new(1050, 2),
                quantity: 3,
            }],
            total_amount: Decimal::new(3150, 2),
            status: "Pending".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["total_amount"], "31.50");
        assert_eq!(json["items"][0]["price"], "10.50");
        assert_eq!(json["status"], "Pending");
    }
}
