use std::sync::Arc;

use axum::{
    extract::FromRef,
    middleware::from_fn,
    routing::get,
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower_http::trace::TraceLayer;

use crate::{
    controllers::{health_controller, resource_controller},
    services::CrudService,
    AppState,
};

pub mod health_routes;
pub mod docs_routes;
pub mod produtos_routes;
pub mod pedidos_routes;
pub mod itens_routes;

/// Mounts the five CRUD routes of one resource under `base`.
pub fn resource_routes<S, T>(router: Router<AppState>, base: &str) -> Router<AppState>
where
    S: CrudService<T, i64> + 'static,
    Arc<S>: FromRef<AppState>,
    T: Serialize + DeserializeOwned + Send + 'static,
{
    router
        .route(
            base,
            get(resource_controller::read_all::<S, T>).post(resource_controller::create::<S, T>),
        )
        .route(
            &format!("{base}/:id"),
            get(resource_controller::read::<S, T>)
                .put(resource_controller::update::<S, T>)
                .delete(resource_controller::delete::<S, T>),
        )
}

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = health_routes::add_routes(router);
    let router = docs_routes::add_routes(router);
    let router = produtos_routes::add_routes(router);
    let router = pedidos_routes::add_routes(router);
    let router = itens_routes::add_routes(router);

    router
        .fallback(health_controller::not_found)
        .layer(from_fn(crate::logging::log_operation))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
