use crate::models::{LocationData, NameFilter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    Activo,
    Inactivo,
    Pendiente,
}

/// 客户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub cuit: String,            // CUIT / DNI
    pub business_name: String,   // 公司名称 (Razón Social)
    pub seller: String,
    pub status: ClientStatus,
    #[serde(default)]
    pub visit_registered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationData>,
}

/// 客户列表筛选条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFilter {
    pub search: String,
    pub seller: NameFilter,
}
