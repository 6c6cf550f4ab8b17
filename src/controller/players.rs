pub mod data_service;
pub mod http_handlers;
pub mod request;

pub use http_handlers::{hello, players, players_set};
