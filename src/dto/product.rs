use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    #[serde(rename = "idProduto")]
    pub id: Option<i64>,

    #[serde(rename = "desPro")]
    pub description: Option<String>,

    #[serde(rename = "qtdeProduto")]
    pub quantity: Option<f64>,

    #[serde(rename = "valProduto")]
    pub unit_value: Option<f64>,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: Some(p.id),
            description: Some(p.description),
            quantity: Some(p.quantity),
            unit_value: Some(p.unit_value),
        }
    }
}
