use crate::error::AppError;
use crate::models::Coordinates;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Nominatim 兼容的地理编码服务
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

/// 地址搜索结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodedAddress {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    display_name: String,
}

impl GeocodingClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// 坐标 -> 地址
    pub async fn reverse(&self, at: Coordinates) -> Result<Option<String>, AppError> {
        let url = format!("{}/reverse", self.base_url);
        let lat = at.latitude.to_string();
        let lon = at.longitude.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "json"),
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("zoom", "18"),
                ("addressdetails", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamStatus(response.status().as_u16()));
        }

        let body: ReverseResponse = response.json().await?;
        Ok(body.display_name)
    }

    /// 地址 -> 坐标, 只取第一个结果
    pub async fn search(&self, query: &str) -> Result<Option<GeocodedAddress>, AppError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("q", query), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamStatus(response.status().as_u16()));
        }

        let hits: Vec<SearchHit> = response.json().await?;
        let Some(hit) = hits.into_iter().next() else {
            return Ok(None);
        };

        let latitude = hit.lat.parse::<f64>();
        let longitude = hit.lon.parse::<f64>();
        match (latitude, longitude) {
            (Ok(latitude), Ok(longitude)) => Ok(Some(GeocodedAddress {
                latitude,
                longitude,
                address: hit.display_name,
            })),
            _ => Err(AppError::UpstreamPayload(format!(
                "invalid coordinates in geocoding result: {}, {}",
                hit.lat, hit.lon
            ))),
        }
    }
}
