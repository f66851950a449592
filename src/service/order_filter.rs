use crate::models::{FilterSpec, Order, OrderStatus, SortDirection, SortField, SortSpec, StatusFilter};
use crate::service::date::{end_of_day, parse_order_date, start_of_day, OrderDate};
use bigdecimal::BigDecimal;
use indexmap::IndexSet;
use serde::Serialize;
use std::cmp::Ordering;

/// 按筛选条件过滤订单, 结果按日期升序 (旧 -> 新)
///
/// 不修改输入, 总是返回新的 Vec。
pub fn filter_orders(orders: &[Order], filter: &FilterSpec) -> Vec<Order> {
    let search = filter.search.to_lowercase();
    let date_bounds = (filter.start_date.map(start_of_day), filter.end_date.map(end_of_day));
    let range_active = date_bounds.0.is_some() || date_bounds.1.is_some();

    let mut kept: Vec<(OrderDate, &Order)> = orders
        .iter()
        // 1. 默认隐藏 Anulado / Rechazado
        .filter(|o| filter.include_cancelled_rejected || !o.status.is_cancelled_or_rejected())
        // 2. 订单号 / Tango 单号 模糊搜索
        .filter(|o| search.is_empty() || matches_search(o, &search))
        // 3. 客户
        .filter(|o| filter.client.accepts(&o.customer_name))
        // 4. 销售员
        .filter(|o| filter.seller.accepts(&o.seller_name))
        // 5. 状态; "全部有效" 与第 1 步条件相同
        .filter(|o| match &filter.status {
            StatusFilter::Only(status) => o.status.matches(status),
            StatusFilter::AllActive => {
                filter.include_cancelled_rejected || !o.status.is_cancelled_or_rejected()
            }
        })
        .map(|o| (parse_order_date(&o.date), o))
        // 6. 日期区间, 无法解析的日期直接排除
        .filter(|(date, _)| !range_active || within(*date, date_bounds))
        .collect();

    // 7. 默认按日期升序 (稳定排序)
    kept.sort_by(|a, b| a.0.cmp(&b.0));

    tracing::debug!("Filtered orders: {} of {}", kept.len(), orders.len());
    kept.into_iter().map(|(_, o)| o.clone()).collect()
}

/// 按列排序; `Unsorted` 时保持输入顺序
pub fn sort_orders(orders: &[Order], sort: &SortSpec) -> Vec<Order> {
    let compare: fn(&SortKey, &SortKey) -> Ordering = match sort.direction {
        SortDirection::Ascending => |a, b| a.cmp(b),
        SortDirection::Descending => |a, b| b.cmp(a),
        SortDirection::Unsorted => return orders.to_vec(),
    };

    let mut keyed: Vec<(SortKey, &Order)> = orders
        .iter()
        .map(|o| (SortKey::of(o, sort.field), o))
        .collect();
    keyed.sort_by(|a, b| compare(&a.0, &b.0));

    keyed.into_iter().map(|(_, o)| o.clone()).collect()
}

/// 先过滤再排序
pub fn apply_view(orders: &[Order], filter: &FilterSpec, sort: &SortSpec) -> Vec<Order> {
    let filtered = filter_orders(orders, filter);
    if sort.is_active() {
        sort_orders(&filtered, sort)
    } else {
        filtered
    }
}

/// 筛选栏下拉选项
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub clients: Vec<String>,
    pub sellers: Vec<String>,
    pub statuses: Vec<OrderStatus>,
}

/// 从订单中收集客户 / 销售员 (保序去重)
pub fn filter_options(orders: &[Order]) -> FilterOptions {
    let clients: IndexSet<&str> = orders.iter().map(|o| o.customer_name.as_str()).collect();
    let sellers: IndexSet<&str> = orders.iter().map(|o| o.seller_name.as_str()).collect();

    FilterOptions {
        clients: clients.into_iter().map(String::from).collect(),
        sellers: sellers.into_iter().map(String::from).collect(),
        statuses: OrderStatus::ALL.to_vec(),
    }
}

fn matches_search(order: &Order, needle: &str) -> bool {
    order.order_number.to_lowercase().contains(needle)
        || order
            .tango_order_number
            .as_deref()
            .is_some_and(|tango| tango.to_lowercase().contains(needle))
}

fn within(
    date: OrderDate,
    (start, end): (Option<chrono::NaiveDateTime>, Option<chrono::NaiveDateTime>),
) -> bool {
    let Some(at) = date.instant() else {
        return false;
    };
    start.map_or(true, |s| at >= s) && end.map_or(true, |e| at <= e)
}

/// 排序键; 同一次排序中所有键属于同一变体
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Text(String),
    Amount(BigDecimal),
    Days(i64),
    Date(OrderDate),
}

impl SortKey {
    fn of(order: &Order, field: SortField) -> Self {
        match field {
            SortField::Date => SortKey::Date(parse_order_date(&order.date)),
            SortField::TotalAmount => SortKey::Amount(order.total_amount.clone()),
            SortField::PaymentTerm => SortKey::Days(order.payment_term),
            SortField::OrderNumber => SortKey::Text(order.order_number.to_lowercase()),
            SortField::CustomerName => SortKey::Text(order.customer_name.to_lowercase()),
            SortField::CustomerType => SortKey::Text(order.customer_type.to_lowercase()),
            SortField::SellerName => SortKey::Text(order.seller_name.to_lowercase()),
            SortField::TangoOrderNumber => SortKey::Text(
                order
                    .tango_order_number
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase(),
            ),
            SortField::Status => SortKey::Text(order.status.label().to_lowercase()),
        }
    }
}
