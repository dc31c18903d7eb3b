use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    dto::OrderItemDto,
    error::{ServiceError, ServiceResult},
    models::{Order, OrderItem},
    storage::Repository,
};

use super::CrudService;

const RESOURCE: &str = "item do pedido";

pub struct OrderItemService {
    items: Arc<dyn Repository<OrderItem>>,
    orders: Arc<dyn Repository<Order>>,
}

impl OrderItemService {
    pub fn new(items: Arc<dyn Repository<OrderItem>>, orders: Arc<dyn Repository<Order>>) -> Self {
        OrderItemService { items, orders }
    }

    async fn to_entity(&self, dto: OrderItemDto) -> ServiceResult<OrderItem> {
        let quantity = dto
            .quantity
            .ok_or_else(|| ServiceError::validation("qtdeItem is required"))?;
        let unit_value = dto
            .unit_value
            .ok_or_else(|| ServiceError::validation("valUnidade is required"))?;

        if let Some(order_id) = dto.order_id {
            if self.orders.find(order_id).await?.is_none() {
                return Err(ServiceError::validation(format!(
                    "nroPedido {order_id} does not reference an existing order"
                )));
            }
        }

        Ok(OrderItem {
            id: 0,
            quantity,
            unit_value,
            order_id: dto.order_id,
        })
    }

    fn not_found(id: i64) -> ServiceError {
        ServiceError::NotFound { resource: RESOURCE, id }
    }
}

#[async_trait]
impl CrudService<OrderItemDto, i64> for OrderItemService {
    async fn create(&self, entity: OrderItemDto) -> ServiceResult<OrderItemDto> {
        if entity.id.is_some() {
            return Err(ServiceError::validation("id is generated by the server"));
        }

        let item = self.to_entity(entity).await?;
        let stored = self.items.insert(item).await?;
        tracing::debug!(id = stored.id, order_id = ?stored.order_id, "order item stored");

        Ok(stored.into())
    }

    async fn read(&self, id: i64) -> ServiceResult<OrderItemDto> {
        self.items
            .find(id)
            .await?
            .map(OrderItemDto::from)
            .ok_or_else(|| Self::not_found(id))
    }

    async fn read_all(&self) -> ServiceResult<Vec<OrderItemDto>> {
        let items = self.items.find_all().await?;
        Ok(items.into_iter().map(OrderItemDto::from).collect())
    }

    async fn update(&self, id: i64, entity: OrderItemDto) -> ServiceResult<OrderItemDto> {
        let item = self.to_entity(entity).await?;

        self.items
            .replace(id, item)
            .await?
            .map(OrderItemDto::from)
            .ok_or_else(|| Self::not_found(id))
    }

    async fn delete(&self, id: i64) -> ServiceResult<()> {
        if !self.items.remove(id).await? {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
