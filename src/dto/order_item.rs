use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::OrderItem;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItemDto {
    pub id: Option<i64>,

    #[serde(rename = "qtdeItem")]
    pub quantity: Option<i32>,

    #[serde(rename = "valUnidade")]
    pub unit_value: Option<f64>,

    #[serde(rename = "nroPedido")]
    pub order_id: Option<i64>,
}

impl From<OrderItem> for OrderItemDto {
    fn from(i: OrderItem) -> Self {
        OrderItemDto {
            id: Some(i.id),
            quantity: Some(i.quantity),
            unit_value: Some(i.unit_value),
            order_id: i.order_id,
        }
    }
}
