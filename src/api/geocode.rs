use crate::error::AppError;
use crate::models::{Coordinates, GeolocationFailure};
use crate::upstream::{GeocodedAddress, GeocodingClient};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ReverseQuery {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Serialize)]
pub struct ReverseResponse {
    pub address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FailureQuery {
    pub code: u16,
}

/// 定位失败原因及提示语
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub failure: GeolocationFailure,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// 坐标反查地址
pub async fn reverse(
    State(geocoding): State<Arc<GeocodingClient>>,
    Query(query): Query<ReverseQuery>,
) -> Result<Json<ReverseResponse>, AppError> {
    let at = Coordinates::parse(&query.lat, &query.lng)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let address = geocoding.reverse(at).await?;
    Ok(Json(ReverseResponse { address }))
}

/// 地址搜索
pub async fn search(
    State(geocoding): State<Arc<GeocodingClient>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<GeocodedAddress>, AppError> {
    let q = query.q.trim();
    if q.is_empty() {
        return Err(AppError::BadRequest("Ingrese una dirección".to_string()));
    }

    geocoding
        .search(q)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No se encontró la dirección especificada".to_string()))
}

/// 浏览器定位错误代码 -> 提示语
pub async fn geolocation_failure(Query(query): Query<FailureQuery>) -> Json<FailureResponse> {
    let failure = GeolocationFailure::from_code(query.code);
    Json(FailureResponse {
        message: failure.to_string(),
        failure,
    })
}
