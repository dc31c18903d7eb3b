pub mod product;
pub mod order;
pub mod order_item;

pub use product::Product;
pub use order::Order;
pub use order_item::OrderItem;
