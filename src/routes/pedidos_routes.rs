use axum::Router;

use crate::{AppState, dto::OrderDto, services::OrderService};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    super::resource_routes::<OrderService, OrderDto>(router, "/api/pedidos")
}
