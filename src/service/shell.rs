use crate::models::{Icon, NavItem, NavSection, ShellAction, ShellState};
use tokio::sync::RwLock;

/// 纯函数: 根据动作计算新状态
pub fn reduce(state: &ShellState, action: ShellAction) -> ShellState {
    match action {
        ShellAction::SetUser(user) => ShellState {
            user,
            ..state.clone()
        },
        ShellAction::SetCurrentModule(module) => ShellState {
            current_module: module,
            ..state.clone()
        },
        ShellAction::ToggleSidebar => ShellState {
            sidebar_collapsed: !state.sidebar_collapsed,
            ..state.clone()
        },
    }
}

/// 外壳状态容器, 通过路由状态注入
#[derive(Default)]
pub struct ShellStore {
    state: RwLock<ShellState>,
}

impl ShellStore {
    pub fn new(state: ShellState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    pub async fn snapshot(&self) -> ShellState {
        self.state.read().await.clone()
    }

    pub async fn dispatch(&self, action: ShellAction) -> ShellState {
        let mut state = self.state.write().await;
        *state = reduce(&state, action);
        state.clone()
    }
}

fn item(id: &'static str, label: &'static str, icon: Icon, path: &'static str) -> NavItem {
    NavItem { id, label, icon, path }
}

/// 侧边栏导航
pub fn navigation() -> Vec<NavSection> {
    vec![
        NavSection {
            id: "commercial",
            label: "COMERCIAL",
            items: vec![
                item("news", "Novedades", Icon::Newspaper, "/news"),
                item("visit-history", "Historial de Visitas", Icon::History, "/visit-history"),
            ],
        },
        NavSection {
            id: "management",
            label: "GESTIÓN",
            items: vec![
                item("users", "Usuarios", Icon::Users, "/users"),
                item("clients", "Clientes", Icon::Building2, "/clients"),
                item("products", "Productos", Icon::Package, "/products"),
                item("orders", "Pedidos", Icon::ShoppingCart, "/orders"),
            ],
        },
        NavSection {
            id: "finance",
            label: "FINANZAS",
            items: vec![
                item(
                    "collection-management",
                    "Gestión de Cobros",
                    Icon::DollarSign,
                    "/collection-management",
                ),
                item("current-account", "Cuenta Corriente", Icon::CreditCard, "/current-account"),
            ],
        },
        NavSection {
            id: "warehouse",
            label: "DEPÓSITO",
            items: vec![
                item("stock-management", "Gestión de Stock", Icon::Warehouse, "/stock-management"),
                item(
                    "warehouse-management",
                    "ABM Depósitos",
                    Icon::Warehouse,
                    "/warehouse-management",
                ),
            ],
        },
        NavSection {
            id: "parameters",
            label: "PARÁMETROS",
            items: vec![
                item("client-type", "Tipo de Cliente", Icon::Users, "/client-type"),
                item("segment", "Segmento", Icon::BarChart3, "/segment"),
                item("technology", "Tecnología", Icon::Settings, "/technology"),
                item("presentation", "Presentación", Icon::Package, "/presentation"),
                item("brand", "Marca", Icon::FileText, "/brand"),
                item("price-list", "Lista de precios", Icon::DollarSign, "/price-list"),
                item("vat-condition", "Condición IVA", Icon::Percent, "/vat-condition"),
                item("vat", "IVA", Icon::Calculator, "/vat"),
                item("atm", "ATM", Icon::CreditCard, "/atm"),
                item("tax-rates", "Alícuotas", Icon::Percent, "/tax-rates"),
                item("surcharge", "Recargo", Icon::DollarSign, "/surcharge"),
            ],
        },
    ]
}

/// 按路径查找导航项
pub fn find_nav_item(path: &str) -> Option<NavItem> {
    navigation()
        .into_iter()
        .flat_map(|section| section.items)
        .find(|item| item.path == path)
}
