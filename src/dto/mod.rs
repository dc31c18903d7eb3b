//! JSON shapes exposed by the API. Field names on the wire are fixed for
//! compatibility with existing clients.

pub mod product;
pub mod order;
pub mod order_item;

pub use product::ProductDto;
pub use order::OrderDto;
pub use order_item::OrderItemDto;
