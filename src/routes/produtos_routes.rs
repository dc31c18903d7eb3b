use axum::Router;

use crate::{AppState, dto::ProductDto, services::ProductService};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    super::resource_routes::<ProductService, ProductDto>(router, "/api/produtos")
}
