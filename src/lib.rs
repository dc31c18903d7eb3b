//! Library entrypoint for RustPedidos.
//!
//! Integration tests under `tests/` import the app state and routers from
//! here and run them against in-memory storage.

use std::sync::Arc;

use axum::extract::FromRef;

pub mod config;
pub mod error;
pub mod models;
pub mod dto;
pub mod storage;
pub mod openapi;

#[path = "middleware/logging.rs"]
pub mod logging;

pub mod services;

pub mod controllers;
pub mod routes;

use services::{OrderItemService, OrderService, ProductService};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub storage: storage::Storage,
    pub produtos: Arc<ProductService>,
    pub pedidos: Arc<OrderService>,
    pub itens: Arc<OrderItemService>,
}

impl AppState {
    /// Binds one service per resource to the repositories in `storage`.
    pub fn new(storage: storage::Storage) -> Self {
        AppState {
            produtos: Arc::new(ProductService::new(storage.products.clone())),
            pedidos: Arc::new(OrderService::new(
                storage.orders.clone(),
                storage.order_items.clone(),
            )),
            itens: Arc::new(OrderItemService::new(
                storage.order_items.clone(),
                storage.orders.clone(),
            )),
            storage,
        }
    }
}
