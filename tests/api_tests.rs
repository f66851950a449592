//! HTTP tests against a local fake upstream (orders + geocoding)

use axum::{
    extract::Query,
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use axum_test::TestServer;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tecnoplant_admin::config::{
    AppConfig, GeocodingConfig, SecretToken, ServerConfig, UpstreamConfig,
};
use tecnoplant_admin::models::{Client, ClientStatus};
use tecnoplant_admin::service::ClientDirectory;
use tecnoplant_admin::{router, Services};

const TOKEN: &str = "test-token";

fn sample_orders() -> Value {
    json!([
        {
            "id": 1,
            "orderNumber": "1001",
            "tangoOrderNumber": null,
            "customerName": "Agro S.A.",
            "customerType": "Distribuidor",
            "sellerName": "Juan Vendedor",
            "date": "01/01/2024",
            "totalAmount": 100,
            "paymentTerm": 30,
            "comments": null,
            "status": "Pendiente"
        },
        {
            "id": 2,
            "orderNumber": "1002",
            "tangoOrderNumber": "T-0042",
            "customerName": "Agro S.A.",
            "customerType": "Distribuidor",
            "sellerName": "Juan Vendedor",
            "date": "2024-02-15",
            "totalAmount": 50,
            "paymentTerm": 60,
            "comments": "Cliente canceló",
            "status": "Anulado"
        },
        {
            "id": "a-3",
            "orderNumber": "1003",
            "tangoOrderNumber": "T-0099",
            "customerName": "El Campo SRL",
            "customerType": "Productor",
            "sellerName": "Maria Vendedora",
            "date": "2024-01-20T10:30:00",
            "totalAmount": 75.25,
            "paymentTerm": 15,
            "comments": null,
            "status": "despachado"
        }
    ])
}

/// 启动假上游, 返回 base url
async fn spawn_upstream(orders_status: StatusCode, orders_body: String) -> String {
    let orders = move |headers: HeaderMap| {
        let body = orders_body.clone();
        async move {
            let auth = headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            if auth.as_deref() != Some("Bearer test-token") {
                return (StatusCode::UNAUTHORIZED, String::new());
            }
            (orders_status, body)
        }
    };

    let app = Router::new()
        .route("/api/orders", get(orders))
        .route(
            "/reverse",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                Json(json!({ "display_name": format!("Punto {}, {}", q["lat"], q["lon"]) }))
            }),
        )
        .route(
            "/search",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                if q["q"] == "nowhere" {
                    Json(json!([]))
                } else {
                    Json(json!([{
                        "lat": "-34.6037",
                        "lon": "-58.3816",
                        "display_name": "Buenos Aires, Argentina"
                    }]))
                }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn config_for(base: &str, token: &str) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        upstream: UpstreamConfig {
            orders_url: format!("{}/api/orders", base),
            token: SecretToken::new(token),
            timeout_secs: 5,
        },
        geocoding: GeocodingConfig {
            base_url: base.to_string(),
            user_agent: "tecnoplant-admin-tests".to_string(),
            timeout_secs: 5,
        },
        clients_file: None,
    }
}

fn client(id: &str, cuit: &str, name: &str, seller: &str) -> Client {
    Client {
        id: id.to_string(),
        cuit: cuit.to_string(),
        business_name: name.to_string(),
        seller: seller.to_string(),
        status: ClientStatus::Activo,
        visit_registered: false,
        location: None,
    }
}

async fn create_test_server_with(status: StatusCode, body: String, token: &str) -> TestServer {
    let base = spawn_upstream(status, body).await;
    let mut services = Services::from_config(&config_for(&base, token)).unwrap();
    services.clients = Arc::new(ClientDirectory::new(vec![
        client("1", "30-12345678-5", "Agro S.A.", "Juan Vendedor"),
        client("2", "30-87654321-3", "El Campo SRL", "Maria Vendedora"),
        client("3", "33-55555555-5", "Futuro Rural", "Juan Vendedor"),
    ]));

    TestServer::new(router(services)).expect("Failed to create test server")
}

async fn create_test_server() -> TestServer {
    create_test_server_with(StatusCode::OK, sample_orders().to_string(), TOKEN).await
}

fn order_numbers(body: &Value) -> Vec<String> {
    body["orders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["orderNumber"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Proxy
// =============================================================================

mod proxy_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = create_test_server().await;
        let response = server.get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "OK");
    }

    #[tokio::test]
    async fn test_get_wraps_upstream_payload_unmodified() {
        let server = create_test_server().await;

        let response = server.get("/api/orders").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body, json!({ "orders": sample_orders() }));
    }

    #[tokio::test]
    async fn test_other_verbs_are_acknowledged() {
        let server = create_test_server().await;

        let body: Value = server.post("/api/orders").await.json();
        assert_eq!(body, json!({ "message": "POST method called" }));

        let body: Value = server.put("/api/orders").await.json();
        assert_eq!(body, json!({ "message": "PUT method called" }));

        let body: Value = server.delete("/api/orders").await.json();
        assert_eq!(body, json!({ "message": "DELETE method called" }));
    }

    #[tokio::test]
    async fn test_rejected_credential_becomes_bad_gateway() {
        let server =
            create_test_server_with(StatusCode::OK, sample_orders().to_string(), "wrong").await;

        let response = server.get("/api/orders").await;
        response.assert_status(StatusCode::BAD_GATEWAY);

        let body: Value = response.json();
        assert_eq!(body["code"], "UPSTREAM_STATUS");
    }

    #[tokio::test]
    async fn test_non_json_upstream_becomes_bad_gateway() {
        let server =
            create_test_server_with(StatusCode::OK, "<html>oops</html>".to_string(), TOKEN).await;

        let response = server.get("/api/orders").await;
        response.assert_status(StatusCode::BAD_GATEWAY);

        let body: Value = response.json();
        assert_eq!(body["code"], "UPSTREAM_PAYLOAD");
    }
}

// =============================================================================
// Order view / options / export
// =============================================================================

mod view_tests {
    use super::*;

    #[tokio::test]
    async fn test_default_view_hides_cancelled_and_sorts_by_date() {
        let server = create_test_server().await;

        let response = server.get("/api/orders/view").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(order_numbers(&body), vec!["1001", "1003"]);
        assert_eq!(body["total"], 2);
        assert_eq!(body["orders"][1]["displayDate"], "20/01/2024");
        assert_eq!(body["orders"][1]["status"], "Despachado");
        assert_eq!(
            body["orders"][0]["actions"],
            json!([
                { "action": "viewEdit", "label": "Ver/Editar" },
                { "action": "process", "label": "Procesar" },
                { "action": "cancel", "label": "Anular" }
            ])
        );
    }

    #[tokio::test]
    async fn test_blank_search_matches_nothing() {
        let server = create_test_server().await;

        let body: Value = server
            .get("/api/orders/view")
            .add_query_param("search", "   ")
            .await
            .json();
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn test_view_with_column_sort() {
        let server = create_test_server().await;

        let body: Value = server
            .get("/api/orders/view")
            .add_query_param("includeCancelledRejected", "true")
            .add_query_param("sort", "totalAmount")
            .add_query_param("direction", "desc")
            .await
            .json();

        assert_eq!(order_numbers(&body), vec!["1001", "1003", "1002"]);
    }

    #[tokio::test]
    async fn test_view_date_range() {
        let server = create_test_server().await;

        let body: Value = server
            .get("/api/orders/view")
            .add_query_param("includeCancelledRejected", "true")
            .add_query_param("startDate", "2024-02-01")
            .add_query_param("endDate", "28/02/2024")
            .await
            .json();

        assert_eq!(order_numbers(&body), vec!["1002"]);
    }

    #[tokio::test]
    async fn test_view_search_on_tango_number() {
        let server = create_test_server().await;

        let body: Value = server
            .get("/api/orders/view")
            .add_query_param("search", "t-0099")
            .await
            .json();

        assert_eq!(order_numbers(&body), vec!["1003"]);
    }

    #[tokio::test]
    async fn test_view_rejects_unknown_sort_field() {
        let server = create_test_server().await;

        let response = server
            .get("/api/orders/view")
            .add_query_param("sort", "price")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_options_list_unique_names() {
        let server = create_test_server().await;

        let body: Value = server.get("/api/orders/options").await.json();
        assert_eq!(body["clients"], json!(["Agro S.A.", "El Campo SRL"]));
        assert_eq!(body["sellers"], json!(["Juan Vendedor", "Maria Vendedora"]));
        assert_eq!(body["statuses"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_export_returns_csv() {
        let server = create_test_server().await;

        let response = server.get("/api/orders/export").await;
        response.assert_status_ok();
        assert_eq!(
            response.header(header::CONTENT_TYPE),
            "text/csv; charset=utf-8"
        );

        let text = response.text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1001,Agro S.A.,Distribuidor,Juan Vendedor,-,01/01/2024,100.00,30"));
        assert!(lines[2].contains("20/01/2024,75.25,15"));
    }
}

// =============================================================================
// Clients / geocoding
// =============================================================================

mod client_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_clients_with_filters() {
        let server = create_test_server().await;

        let body: Value = server
            .get("/api/clients")
            .add_query_param("seller", "Juan Vendedor")
            .add_query_param("search", "rural")
            .await
            .json();

        let clients = body["clients"].as_array().unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0]["businessName"], "Futuro Rural");
        assert_eq!(body["sellers"], json!(["Juan Vendedor", "Maria Vendedora"]));
    }

    #[tokio::test]
    async fn test_register_visit() {
        let server = create_test_server().await;

        let response = server
            .put("/api/clients/2/visit")
            .json(&json!({ "registered": true }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["visitRegistered"], true);

        let response = server
            .put("/api/clients/99/visit")
            .json(&json!({ "registered": true }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_set_location_validates_ranges() {
        let server = create_test_server().await;

        let response = server
            .put("/api/clients/1/location")
            .json(&json!({ "latitude": 95.0, "longitude": 10.0 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Latitud debe estar entre -90 y 90");

        let response = server
            .put("/api/clients/1/location")
            .json(&json!({ "latitude": -34.6, "longitude": -58.4, "accuracy": 20.0 }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["location"]["latitude"], -34.6);
        assert_eq!(body["location"]["accuracy"], 20.0);
    }

    #[tokio::test]
    async fn test_reverse_geocoding() {
        let server = create_test_server().await;

        let body: Value = server
            .get("/api/geocode/reverse")
            .add_query_param("lat", "-34.6037")
            .add_query_param("lng", "-58.3816")
            .await
            .json();
        assert_eq!(body["address"], "Punto -34.6037, -58.3816");

        let response = server
            .get("/api/geocode/reverse")
            .add_query_param("lat", "abc")
            .add_query_param("lng", "0")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_address_search() {
        let server = create_test_server().await;

        let body: Value = server
            .get("/api/geocode/search")
            .add_query_param("q", "Obelisco")
            .await
            .json();
        assert_eq!(body["latitude"], -34.6037);
        assert_eq!(body["address"], "Buenos Aires, Argentina");

        let response = server
            .get("/api/geocode/search")
            .add_query_param("q", "nowhere")
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let response = server
            .get("/api/geocode/search")
            .add_query_param("q", "  ")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_geolocation_failure_messages() {
        let server = create_test_server().await;

        let body: Value = server
            .get("/api/geocode/failure")
            .add_query_param("code", "1")
            .await
            .json();
        assert_eq!(body["failure"], "permissionDenied");
        assert_eq!(body["message"], "Permiso denegado para acceder a la ubicación");

        let body: Value = server
            .get("/api/geocode/failure")
            .add_query_param("code", "9")
            .await
            .json();
        assert_eq!(body["failure"], "unknown");
        assert_eq!(body["message"], "Error al obtener la ubicación");
    }
}

// =============================================================================
// Shell
// =============================================================================

mod shell_tests {
    use super::*;

    #[tokio::test]
    async fn test_initial_shell_state() {
        let server = create_test_server().await;

        let body: Value = server.get("/api/shell").await.json();
        assert_eq!(body["currentModule"], "Pedidos");
        assert_eq!(body["sidebarCollapsed"], false);
        assert_eq!(body["user"]["role"], "Admin");
    }

    #[tokio::test]
    async fn test_actions_update_state() {
        let server = create_test_server().await;

        let body: Value = server
            .post("/api/shell/actions")
            .json(&json!({ "type": "toggle-sidebar" }))
            .await
            .json();
        assert_eq!(body["sidebarCollapsed"], true);

        let body: Value = server
            .post("/api/shell/actions")
            .json(&json!({ "type": "set-user", "payload": null }))
            .await
            .json();
        assert_eq!(body["user"], Value::Null);
        assert_eq!(body["sidebarCollapsed"], true);
    }

    #[tokio::test]
    async fn test_navigate_sets_module_label() {
        let server = create_test_server().await;

        let body: Value = server
            .post("/api/shell/navigate")
            .json(&json!({ "path": "/clients" }))
            .await
            .json();
        assert_eq!(body["currentModule"], "Clientes");

        let response = server
            .post("/api/shell/navigate")
            .json(&json!({ "path": "/nowhere" }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_navigation_tree() {
        let server = create_test_server().await;

        let body: Value = server.get("/api/navigation").await.json();
        let sections = body.as_array().unwrap();
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[1]["label"], "GESTIÓN");
        assert_eq!(sections[1]["items"][3]["icon"], "ShoppingCart");
    }
}
