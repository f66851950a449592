use crate::config::{SecretToken, UpstreamConfig};
use crate::error::AppError;
use crate::models::Order;
use reqwest::{header, Client};
use serde_json::Value;

/// 上游订单接口
pub struct OrdersUpstream {
    client: Client,
    url: String,
    token: SecretToken,
}

impl OrdersUpstream {
    pub fn new(client: Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            url: config.orders_url.clone(),
            token: config.token.clone(),
        }
    }

    /// 原样获取上游 JSON
    pub async fn fetch_raw(&self) -> Result<Value, AppError> {
        let response = self
            .client
            .get(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(self.token.expose())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| AppError::UpstreamPayload(e.to_string()))
    }

    /// 获取并解析为订单列表
    pub async fn fetch_orders(&self) -> Result<Vec<Order>, AppError> {
        let raw = self.fetch_raw().await?;
        let orders: Vec<Order> =
            serde_json::from_value(raw).map_err(|e| AppError::UpstreamPayload(e.to_string()))?;

        tracing::info!("Fetched {} orders from upstream", orders.len());
        Ok(orders)
    }
}
