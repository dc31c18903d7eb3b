use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    dto::{OrderDto, OrderItemDto},
    error::{ServiceError, ServiceResult},
    models::{Order, OrderItem},
    storage::Repository,
};

use super::CrudService;

const RESOURCE: &str = "pedido";

/// Orders own only their timestamp. `itensPedido` is assembled from the line
/// items that point at the order; items sent inside an order body are not
/// stored (they are created through the items resource). Deleting an order
/// clears `nroPedido` on the items that pointed at it.
pub struct OrderService {
    orders: Arc<dyn Repository<Order>>,
    items: Arc<dyn Repository<OrderItem>>,
}

impl OrderService {
    pub fn new(orders: Arc<dyn Repository<Order>>, items: Arc<dyn Repository<OrderItem>>) -> Self {
        OrderService { orders, items }
    }

    fn to_entity(dto: OrderDto) -> ServiceResult<Order> {
        if !dto.items.is_empty() {
            tracing::debug!(count = dto.items.len(), "ignoring itensPedido in order body");
        }

        let ordered_at = dto
            .ordered_at
            .ok_or_else(|| ServiceError::validation("datPedido is required"))?;

        Ok(Order { id: 0, ordered_at })
    }

    async fn with_items(&self, order: Order) -> ServiceResult<OrderDto> {
        let items = self
            .items
            .find_by_parent(order.id)
            .await?
            .into_iter()
            .map(OrderItemDto::from)
            .collect();

        Ok(OrderDto::from_entity(order, items))
    }

    async fn detach_items(&self, order_id: i64) -> ServiceResult<()> {
        for mut item in self.items.find_by_parent(order_id).await? {
            item.order_id = None;
            self.items.replace(item.id, item).await?;
        }
        Ok(())
    }

    fn not_found(id: i64) -> ServiceError {
        ServiceError::NotFound { resource: RESOURCE, id }
    }
}

#[async_trait]
impl CrudService<OrderDto, i64> for OrderService {
    async fn create(&self, entity: OrderDto) -> ServiceResult<OrderDto> {
        if entity.id.is_some() {
            return Err(ServiceError::validation("nroPedido is generated by the server"));
        }

        let stored = self.orders.insert(Self::to_entity(entity)?).await?;
        tracing::debug!(id = stored.id, "order stored");

        self.with_items(stored).await
    }

    async fn read(&self, id: i64) -> ServiceResult<OrderDto> {
        let Some(order) = self.orders.find(id).await? else {
            return Err(Self::not_found(id));
        };
        self.with_items(order).await
    }

    async fn read_all(&self) -> ServiceResult<Vec<OrderDto>> {
        let orders = self.orders.find_all().await?;

        // one pass over the items instead of a lookup per order
        let mut by_order: HashMap<i64, Vec<OrderItemDto>> = HashMap::new();
        for item in self.items.find_all().await? {
            if let Some(order_id) = item.order_id {
                by_order.entry(order_id).or_default().push(item.into());
            }
        }

        Ok(orders
            .into_iter()
            .map(|o| {
                let items = by_order.remove(&o.id).unwrap_or_default();
                OrderDto::from_entity(o, items)
            })
            .collect())
    }

    async fn update(&self, id: i64, entity: OrderDto) -> ServiceResult<OrderDto> {
        let order = Self::to_entity(entity)?;

        let Some(stored) = self.orders.replace(id, order).await? else {
            return Err(Self::not_found(id));
        };
        self.with_items(stored).await
    }

    async fn delete(&self, id: i64) -> ServiceResult<()> {
        // items outlive their order; they just stop referencing it
        self.detach_items(id).await?;

        if !self.orders.remove(id).await? {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
