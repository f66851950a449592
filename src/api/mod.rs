pub mod clients;
pub mod geocode;
pub mod handlers;
pub mod shell;

pub use handlers::*;

use crate::config::AppConfig;
use crate::service::{ClientDirectory, ShellStore};
use crate::upstream::{create_client, GeocodingClient, OrdersUpstream};
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;

/// 共享服务: 每组路由持有各自的状态
#[derive(Clone)]
pub struct Services {
    pub orders: Arc<OrdersUpstream>,
    pub geocoding: Arc<GeocodingClient>,
    pub clients: Arc<ClientDirectory>,
    pub shell: Arc<ShellStore>,
}

impl Services {
    pub fn from_config(config: &AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let orders_client = create_client(config.upstream.timeout_secs, "tecnoplant-admin")?;
        let geocoding_client =
            create_client(config.geocoding.timeout_secs, &config.geocoding.user_agent)?;

        let clients = match &config.clients_file {
            Some(path) => ClientDirectory::from_file(path)?,
            None => ClientDirectory::default(),
        };

        Ok(Self {
            orders: Arc::new(OrdersUpstream::new(orders_client, &config.upstream)),
            geocoding: Arc::new(GeocodingClient::new(
                geocoding_client,
                config.geocoding.base_url.clone(),
            )),
            clients: Arc::new(clients),
            shell: Arc::new(ShellStore::default()),
        })
    }
}

/// 构建路由
pub fn router(services: Services) -> Router {
    let order_routes = Router::new()
        .route(
            "/api/orders",
            get(handlers::proxy_orders)
                .post(handlers::post_orders)
                .put(handlers::put_orders)
                .delete(handlers::delete_orders),
        )
        .route("/api/orders/view", get(handlers::orders_view))
        .route("/api/orders/options", get(handlers::orders_options))
        .route("/api/orders/export", get(handlers::export_orders))
        .with_state(services.orders);

    let client_routes = Router::new()
        .route("/api/clients", get(clients::list_clients))
        .route("/api/clients/:id/visit", put(clients::set_visit))
        .route("/api/clients/:id/location", put(clients::set_location))
        .with_state(services.clients);

    let geocode_routes = Router::new()
        .route("/api/geocode/reverse", get(geocode::reverse))
        .route("/api/geocode/search", get(geocode::search))
        .route("/api/geocode/failure", get(geocode::geolocation_failure))
        .with_state(services.geocoding);

    let shell_routes = Router::new()
        .route("/api/shell", get(shell::get_shell))
        .route("/api/shell/actions", post(shell::dispatch_action))
        .route("/api/shell/navigate", post(shell::navigate))
        .with_state(services.shell);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/navigation", get(shell::get_navigation))
        .merge(order_routes)
        .merge(client_routes)
        .merge(geocode_routes)
        .merge(shell_routes)
        .layer(ServiceBuilder::new())
}
