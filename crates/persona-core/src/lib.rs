pub mod gateway;
pub mod ports;
pub mod store;
