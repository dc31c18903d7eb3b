pub mod crud;
pub mod db_init;

pub mod product_service;
pub mod order_service;
pub mod order_item_service;

pub use crud::CrudService;
pub use order_item_service::OrderItemService;
pub use order_service::OrderService;
pub use product_service::ProductService;
