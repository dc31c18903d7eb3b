use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::OrderItemDto;
use crate::models::Order;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    #[serde(rename = "nroPedido")]
    pub id: Option<i64>,

    #[serde(rename = "datPedido")]
    pub ordered_at: Option<DateTime<Utc>>,

    // read-only: filled from the line items that reference this order
    #[serde(rename = "itensPedido", default)]
    pub items: Vec<OrderItemDto>,
}

impl OrderDto {
    pub fn from_entity(order: Order, items: Vec<OrderItemDto>) -> Self {
        OrderDto {
            id: Some(order.id),
            ordered_at: Some(order.ordered_at),
            items,
        }
    }
}
