//! Ping Handler
//!
//! 健康检查，同时回报当前生效的默认断词参数

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// 未指定 `minchars` 时使用的最小字符数
    pub min_length: usize,
    pub html_only: bool,
}

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        min_length: state.wordbreak.segmenter.min_length,
        html_only: state.wordbreak.html_only,
    })
}
