use serde::{Deserialize, Serialize};

use crate::storage::Entity;

/// A line item. Items are their own aggregate; `order_id` links one to the
/// order whose `itensPedido` projection should include it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "_id")]
    pub id: i64,

    pub quantity: i32,
    pub unit_value: f64,

    #[serde(default)]
    pub order_id: Option<i64>,
}

impl Entity for OrderItem {
    const COLLECTION: &'static str = "itens_pedido";
    const PARENT_FIELD: Option<&'static str> = Some("order_id");

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn parent_id(&self) -> Option<i64> {
        self.order_id
    }
}
