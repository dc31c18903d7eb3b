use serde::{Deserialize, Serialize};

use crate::storage::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: i64,

    pub description: String,
    pub quantity: f64,
    pub unit_value: f64,
}

impl Entity for Product {
    const COLLECTION: &'static str = "produtos";

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
