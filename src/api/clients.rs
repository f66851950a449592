use crate::error::AppError;
use crate::models::{Client, ClientFilter, Coordinates, LocationData, NameFilter};
use crate::service::ClientDirectory;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClientsQuery {
    pub search: Option<String>,
    pub seller: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClientsResponse {
    pub clients: Vec<Client>,
    pub sellers: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct VisitRequest {
    pub registered: bool,
}

#[derive(Debug, Deserialize)]
pub struct LocationRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: Option<f64>,
    pub address: Option<String>,
}

/// 客户列表
pub async fn list_clients(
    State(directory): State<Arc<ClientDirectory>>,
    Query(query): Query<ClientsQuery>,
) -> Json<ClientsResponse> {
    let filter = ClientFilter {
        search: query.search.unwrap_or_default(),
        seller: query.seller.as_deref().map(NameFilter::parse).unwrap_or_default(),
    };

    Json(ClientsResponse {
        clients: directory.list(&filter).await,
        sellers: directory.sellers().await,
    })
}

/// 登记拜访
pub async fn set_visit(
    State(directory): State<Arc<ClientDirectory>>,
    Path(id): Path<String>,
    Json(req): Json<VisitRequest>,
) -> Result<Json<Client>, AppError> {
    let client = directory
        .set_visit_registered(&id, req.registered)
        .await
        .ok_or_else(|| AppError::NotFound(format!("client {} not found", id)))?;

    tracing::info!("Client {} visit registered: {}", id, req.registered);
    Ok(Json(client))
}

/// 确认拜访位置
pub async fn set_location(
    State(directory): State<Arc<ClientDirectory>>,
    Path(id): Path<String>,
    Json(req): Json<LocationRequest>,
) -> Result<Json<Client>, AppError> {
    let at = Coordinates::new(req.latitude, req.longitude)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let location = LocationData {
        latitude: at.latitude,
        longitude: at.longitude,
        address: req.address,
        accuracy: req.accuracy,
        timestamp: chrono::Utc::now().timestamp_millis(),
    };

    let client = directory
        .set_location(&id, location)
        .await
        .ok_or_else(|| AppError::NotFound(format!("client {} not found", id)))?;

    tracing::info!("Client {} location set to {}, {}", id, at.latitude, at.longitude);
    Ok(Json(client))
}
