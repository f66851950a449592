use crate::models::OrderStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 客户 / 销售员筛选: 全部 或 精确匹配名称
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NameFilter {
    #[default]
    All,
    Exact(String),
}

impl NameFilter {
    /// "all" / "Todos" / 空串 视为全部; 其余原样精确匹配
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") || raw == "Todos" {
            NameFilter::All
        } else {
            NameFilter::Exact(raw.to_string())
        }
    }

    pub fn accepts(&self, name: &str) -> bool {
        match self {
            NameFilter::All => true,
            NameFilter::Exact(expected) => expected == name,
        }
    }
}

/// 状态筛选: 全部有效状态 或 指定状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    AllActive,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw.eq_ignore_ascii_case("all-active") || raw == "Todos (activos)" {
            StatusFilter::AllActive
        } else {
            StatusFilter::Only(OrderStatus::from(raw))
        }
    }
}

/// 订单筛选条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub search: String,
    pub client: NameFilter,
    pub seller: NameFilter,
    pub status: StatusFilter,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub include_cancelled_rejected: bool,
}

/// 可排序列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    OrderNumber,
    CustomerName,
    CustomerType,
    SellerName,
    TangoOrderNumber,
    Date,
    TotalAmount,
    PaymentTerm,
    Status,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orderNumber" => Ok(SortField::OrderNumber),
            "customerName" => Ok(SortField::CustomerName),
            "customerType" => Ok(SortField::CustomerType),
            "sellerName" => Ok(SortField::SellerName),
            "tangoOrderNumber" => Ok(SortField::TangoOrderNumber),
            "date" => Ok(SortField::Date),
            "totalAmount" => Ok(SortField::TotalAmount),
            "paymentTerm" => Ok(SortField::PaymentTerm),
            "status" => Ok(SortField::Status),
            other => Err(format!("unknown sort field: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
    #[default]
    #[serde(rename = "none")]
    Unsorted,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            "none" | "" => Ok(SortDirection::Unsorted),
            other => Err(format!("unknown sort direction: {}", other)),
        }
    }
}

/// 列排序状态, 表头点击时切换
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: SortDirection::Unsorted,
        }
    }
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn is_active(&self) -> bool {
        self.direction != SortDirection::Unsorted
    }

    /// 同一列: asc -> desc -> none -> asc; 切换到新列时重置为 asc
    pub fn toggle(&mut self, field: SortField) {
        if self.field != field {
            self.field = field;
            self.direction = SortDirection::Ascending;
            return;
        }

        self.direction = match self.direction {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Unsorted,
            SortDirection::Unsorted => SortDirection::Ascending,
        };
    }
}
