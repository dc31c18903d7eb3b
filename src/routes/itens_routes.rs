use axum::Router;

use crate::{AppState, dto::OrderItemDto, services::OrderItemService};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    super::resource_routes::<OrderItemService, OrderItemDto>(router, "/api/itens")
}
