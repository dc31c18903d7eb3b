use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: i64,

    // never null once persisted
    #[serde(rename = "data_pedido")]
    pub ordered_at: DateTime<Utc>,
}

impl Entity for Order {
    const COLLECTION: &'static str = "pedidos";

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
