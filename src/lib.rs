pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod upstream;

pub use api::{router, Services};
pub use config::AppConfig;
pub use error::AppError;
pub use upstream::{create_client, GeocodingClient, OrdersUpstream};
