use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[serde(rename = "Administración")]
    Administration,
    #[serde(rename = "Vendedor")]
    Seller,
    #[serde(rename = "Depósito")]
    Warehouse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
}

/// 界面外壳状态: 当前用户 / 当前模块 / 侧边栏折叠
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellState {
    pub user: Option<User>,
    pub current_module: String,
    pub sidebar_collapsed: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            user: Some(User {
                id: "1".to_string(),
                name: "Admin User".to_string(),
                email: "admin@tecnoplant.com".to_string(),
                role: Role::Admin,
                is_active: true,
            }),
            current_module: "Pedidos".to_string(),
            sidebar_collapsed: false,
        }
    }
}

/// 外壳状态变更动作
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum ShellAction {
    SetUser(Option<User>),
    SetCurrentModule(String),
    ToggleSidebar,
}

/// 侧边栏图标 (封闭集合)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Icon {
    Package,
    ShoppingCart,
    Users,
    Newspaper,
    Building2,
    History,
    Settings,
    DollarSign,
    Warehouse,
    FileText,
    Calculator,
    Percent,
    CreditCard,
    BarChart3,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub path: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
    pub items: Vec<NavItem>,
}
