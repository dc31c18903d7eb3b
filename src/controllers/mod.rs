pub mod docs_controller;
pub mod health_controller;
pub mod resource_controller;
