pub mod client;
pub mod geocoding;
pub mod orders;

pub use client::create_client;
pub use geocoding::{GeocodedAddress, GeocodingClient};
pub use orders::OrdersUpstream;
