use mongodb::{bson::doc, Database, IndexModel};

use crate::{error::StorageError, models::OrderItem, storage::Entity};

pub async fn ensure_indexes(db: &Database) -> Result<(), StorageError> {
    // itens_pedido: looked up by owning order when an order is read
    let col = db.collection::<mongodb::bson::Document>(OrderItem::COLLECTION);
    let model = IndexModel::builder()
        .keys(doc! { "order_id": 1 })
        .build();

    col.create_index(model, None).await?;

    Ok(())
}
