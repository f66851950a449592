use crate::config::ConfigError;
use crate::models::{Client, ClientFilter, LocationData};
use indexmap::IndexSet;
use std::path::Path;
use tokio::sync::RwLock;

/// 按公司名称 / CUIT 搜索, 并按销售员过滤
pub fn filter_clients(clients: &[Client], filter: &ClientFilter) -> Vec<Client> {
    let needle = filter.search.to_lowercase();

    clients
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.business_name.to_lowercase().contains(&needle)
                || c.cuit.to_lowercase().contains(&needle)
        })
        .filter(|c| filter.seller.accepts(&c.seller))
        .cloned()
        .collect()
}

/// 销售员列表 (保序去重)
pub fn distinct_sellers(clients: &[Client]) -> Vec<String> {
    clients
        .iter()
        .map(|c| c.seller.as_str())
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// 内存中的客户目录
pub struct ClientDirectory {
    clients: RwLock<Vec<Client>>,
}

impl ClientDirectory {
    pub fn new(clients: Vec<Client>) -> Self {
        Self {
            clients: RwLock::new(clients),
        }
    }

    /// 从 JSON 文件加载初始数据
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let to_err = |reason: String| ConfigError::ClientsFile {
            path: path.to_path_buf(),
            reason,
        };
        let raw = std::fs::read_to_string(path).map_err(|e| to_err(e.to_string()))?;
        let clients: Vec<Client> = serde_json::from_str(&raw).map_err(|e| to_err(e.to_string()))?;

        tracing::info!("Loaded {} clients from {}", clients.len(), path.display());
        Ok(Self::new(clients))
    }

    pub async fn list(&self, filter: &ClientFilter) -> Vec<Client> {
        let clients = self.clients.read().await;
        filter_clients(&clients, filter)
    }

    pub async fn sellers(&self) -> Vec<String> {
        distinct_sellers(&self.clients.read().await)
    }

    /// 登记 / 取消拜访; 客户不存在时返回 None
    pub async fn set_visit_registered(&self, id: &str, registered: bool) -> Option<Client> {
        let mut clients = self.clients.write().await;
        let client = clients.iter_mut().find(|c| c.id == id)?;
        client.visit_registered = registered;
        Some(client.clone())
    }

    pub async fn set_location(&self, id: &str, location: LocationData) -> Option<Client> {
        let mut clients = self.clients.write().await;
        let client = clients.iter_mut().find(|c| c.id == id)?;
        client.location = Some(location);
        Some(client.clone())
    }
}

impl Default for ClientDirectory {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
