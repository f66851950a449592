use crate::error::AppError;
use crate::models::{NavSection, ShellAction, ShellState};
use crate::service::shell::{find_nav_item, navigation};
use crate::service::ShellStore;
use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub path: String,
}

pub async fn get_shell(State(store): State<Arc<ShellStore>>) -> Json<ShellState> {
    Json(store.snapshot().await)
}

pub async fn dispatch_action(
    State(store): State<Arc<ShellStore>>,
    Json(action): Json<ShellAction>,
) -> Json<ShellState> {
    tracing::debug!("Shell action: {:?}", action);
    Json(store.dispatch(action).await)
}

/// 点击导航项: 当前模块切换为该项的名称
pub async fn navigate(
    State(store): State<Arc<ShellStore>>,
    Json(req): Json<NavigateRequest>,
) -> Result<Json<ShellState>, AppError> {
    let item = find_nav_item(&req.path)
        .ok_or_else(|| AppError::NotFound(format!("no navigation item for {}", req.path)))?;

    let state = store
        .dispatch(ShellAction::SetCurrentModule(item.label.to_string()))
        .await;
    Ok(Json(state))
}

pub async fn get_navigation() -> Json<Vec<NavSection>> {
    Json(navigation())
}
