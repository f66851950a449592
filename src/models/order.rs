use bigdecimal::BigDecimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// 订单状态 (大小写不敏感解析, 未知状态原样保留)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    InReview,
    Processed,
    Prepared,
    Dispatched,
    Rejected,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::InReview,
        OrderStatus::Processed,
        OrderStatus::Prepared,
        OrderStatus::Dispatched,
        OrderStatus::Rejected,
        OrderStatus::Cancelled,
    ];

    pub fn label(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pendiente",
            OrderStatus::InReview => "En revisión",
            OrderStatus::Processed => "Procesado",
            OrderStatus::Prepared => "Preparado",
            OrderStatus::Dispatched => "Despachado",
            OrderStatus::Rejected => "Rechazado",
            OrderStatus::Cancelled => "Anulado",
            OrderStatus::Other(label) => label,
        }
    }

    /// Anulado / Rechazado
    pub fn is_cancelled_or_rejected(&self) -> bool {
        matches!(self, OrderStatus::Cancelled | OrderStatus::Rejected)
    }

    /// 大小写不敏感比较
    pub fn matches(&self, other: &OrderStatus) -> bool {
        self.label().to_lowercase() == other.label().to_lowercase()
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            OrderStatus::Processed | OrderStatus::Pending | OrderStatus::InReview => {
                BadgeTone::Secondary
            }
            OrderStatus::Prepared | OrderStatus::Dispatched => BadgeTone::Default,
            OrderStatus::Rejected | OrderStatus::Cancelled => BadgeTone::Destructive,
            OrderStatus::Other(_) => BadgeTone::Outline,
        }
    }

    /// 当前状态下可执行的操作, 查看/编辑始终在首位
    pub fn actions(&self) -> Vec<OrderAction> {
        let mut actions = vec![OrderAction::ViewEdit];
        match self {
            OrderStatus::Processed => actions.extend([OrderAction::Prepare, OrderAction::Cancel]),
            OrderStatus::Pending => actions.extend([OrderAction::Process, OrderAction::Cancel]),
            OrderStatus::InReview => actions.extend([OrderAction::Approve, OrderAction::Reject]),
            _ => {}
        }
        actions
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "pendiente" => OrderStatus::Pending,
            "en revisión" => OrderStatus::InReview,
            "procesado" => OrderStatus::Processed,
            "preparado" => OrderStatus::Prepared,
            "despachado" => OrderStatus::Dispatched,
            "rechazado" => OrderStatus::Rejected,
            "anulado" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(value),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        OrderStatus::from(value.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 状态徽标样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Secondary,
    Default,
    Destructive,
    Outline,
}

/// 订单行操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderAction {
    ViewEdit,
    Process,
    Prepare,
    Approve,
    Reject,
    Cancel,
}

impl OrderAction {
    pub fn label(self) -> &'static str {
        match self {
            OrderAction::ViewEdit => "Ver/Editar",
            OrderAction::Process => "Procesar",
            OrderAction::Prepare => "Preparar",
            OrderAction::Approve => "Aprobar",
            OrderAction::Reject => "Rechazar",
            OrderAction::Cancel => "Anular",
        }
    }
}

/// 行操作按钮: 操作标识 + 显示文字
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowAction {
    pub action: OrderAction,
    pub label: &'static str,
}

impl From<OrderAction> for RowAction {
    fn from(action: OrderAction) -> Self {
        Self {
            action,
            label: action.label(),
        }
    }
}

/// 订单 (上游接口字段为 camelCase)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub order_number: String,
    #[serde(default)]
    pub tango_order_number: Option<String>,
    pub customer_name: String,
    pub customer_type: String,
    pub seller_name: String,
    pub date: String,           // dd/mm/yyyy 或 ISO-8601
    pub total_amount: BigDecimal,
    pub payment_term: i64,      // 天数
    #[serde(default)]
    pub comments: Option<String>,
    pub status: OrderStatus,
}

/// 上游的 id 可能是字符串也可能是数字
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("unsupported order id: {}", other))),
    }
}
