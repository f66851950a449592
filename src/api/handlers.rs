use crate::error::AppError;
use crate::models::{
    BadgeTone, FilterSpec, NameFilter, Order, RowAction, SortDirection, SortField, SortSpec,
    StatusFilter,
};
use crate::service::date::parse_filter_date;
use crate::service::export::orders_to_csv;
use crate::service::{apply_view, filter_options, format_order_date, FilterOptions};
use crate::upstream::OrdersUpstream;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

/// 订单视图查询参数
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrdersQuery {
    pub search: Option<String>,
    pub client: Option<String>,
    pub seller: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub include_cancelled_rejected: Option<bool>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl OrdersQuery {
    pub fn into_specs(self) -> Result<(FilterSpec, SortSpec), AppError> {
        let filter = FilterSpec {
            search: self.search.unwrap_or_default(),
            client: self.client.as_deref().map(NameFilter::parse).unwrap_or_default(),
            seller: self.seller.as_deref().map(NameFilter::parse).unwrap_or_default(),
            status: self.status.as_deref().map(StatusFilter::parse).unwrap_or_default(),
            start_date: date_param("startDate", self.start_date.as_deref())?,
            end_date: date_param("endDate", self.end_date.as_deref())?,
            include_cancelled_rejected: self.include_cancelled_rejected.unwrap_or(false),
        };

        let sort = match self.sort.as_deref().filter(|s| !s.is_empty()) {
            None => SortSpec::default(),
            Some(field) => {
                let field: SortField = field.parse().map_err(AppError::BadRequest)?;
                let direction = match self.direction.as_deref() {
                    None => SortDirection::Ascending,
                    Some(d) => d.parse().map_err(AppError::BadRequest)?,
                };
                SortSpec::new(field, direction)
            }
        };

        Ok((filter, sort))
    }
}

fn date_param(name: &str, raw: Option<&str>) -> Result<Option<chrono::NaiveDate>, AppError> {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => Ok(None),
        Some(r) => parse_filter_date(r)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("invalid {}: {}", name, r))),
    }
}

/// 视图中的订单行
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    #[serde(flatten)]
    pub order: Order,
    pub display_date: String,
    pub tone: BadgeTone,
    pub actions: Vec<RowAction>,
}

impl From<Order> for OrderRow {
    fn from(order: Order) -> Self {
        Self {
            display_date: format_order_date(&order.date),
            tone: order.status.tone(),
            actions: order.status.actions().into_iter().map(RowAction::from).collect(),
            order,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrdersView {
    pub orders: Vec<OrderRow>,
    pub total: usize,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 透传上游订单数据
pub async fn proxy_orders(State(upstream): State<Arc<OrdersUpstream>>) -> Result<Response, AppError> {
    let data = upstream.fetch_raw().await?;
    Ok((StatusCode::OK, Json(json!({ "orders": data }))).into_response())
}

fn acknowledge(method: &str) -> Response {
    let body: Value = json!({ "message": format!("{} method called", method) });
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn post_orders() -> Response {
    acknowledge("POST")
}

pub async fn put_orders() -> Response {
    acknowledge("PUT")
}

pub async fn delete_orders() -> Response {
    acknowledge("DELETE")
}

/// 过滤 + 排序后的订单视图
pub async fn orders_view(
    State(upstream): State<Arc<OrdersUpstream>>,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<OrdersView>, AppError> {
    let (filter, sort) = query.into_specs()?;
    let orders = upstream.fetch_orders().await?;

    let rows: Vec<OrderRow> = apply_view(&orders, &filter, &sort)
        .into_iter()
        .map(OrderRow::from)
        .collect();

    tracing::info!("Orders view: {} of {} orders", rows.len(), orders.len());
    Ok(Json(OrdersView {
        total: rows.len(),
        orders: rows,
    }))
}

/// 筛选栏选项
pub async fn orders_options(
    State(upstream): State<Arc<OrdersUpstream>>,
) -> Result<Json<FilterOptions>, AppError> {
    let orders = upstream.fetch_orders().await?;
    Ok(Json(filter_options(&orders)))
}

/// 导出 CSV
pub async fn export_orders(
    State(upstream): State<Arc<OrdersUpstream>>,
    Query(query): Query<OrdersQuery>,
) -> Result<Response, AppError> {
    let (filter, sort) = query.into_specs()?;
    let orders = upstream.fetch_orders().await?;
    let view = apply_view(&orders, &filter, &sort);

    let body = orders_to_csv(&view)?;
    tracing::info!("Exported {} orders as CSV", view.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"pedidos.csv\""),
        ],
        body,
    )
        .into_response())
}
