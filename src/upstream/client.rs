use reqwest::Client;
use std::time::Duration;

/// 创建共享 HTTP 客户端
pub fn create_client(timeout_secs: u64, user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(5))
        .user_agent(user_agent)
        .build()
}
