//! HTTP Middleware
//!
//! - 断词中间件：缓冲响应体，改写符合条件的文本后替换响应体
//! - 按请求开关的断词中间件：`?wordbreak=on&minchars=N`
//! - HTTP 状态码错误日志中间件

use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::{Query, Request, State},
    http::header,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use futures_util::StreamExt;
use serde::Deserialize;

use super::error::ApiError;
use super::state::AppState;
use crate::application::{ResponseRewriter, WordBreakOptions};
use crate::domain::WordBreakError;
use crate::infrastructure::html::KuchikiHtmlRewriter;

/// 为 Router 挂载断词中间件
pub trait WordBreakRouterExt: Sized {
    /// 使用固定选项挂载断词中间件
    ///
    /// 选项非法（空选择器、无法解析的选择器等）时返回 `InvalidConfiguration`
    fn word_break(self, options: WordBreakOptions) -> Result<Self, WordBreakError>;
}

impl<S> WordBreakRouterExt for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn word_break(self, options: WordBreakOptions) -> Result<Self, WordBreakError> {
        let rewriter = ResponseRewriter::new(options, Arc::new(KuchikiHtmlRewriter::new()))?;
        Ok(self.layer(middleware::from_fn_with_state(
            Arc::new(rewriter),
            word_break_middleware,
        )))
    }
}

/// 断词中间件
pub async fn word_break_middleware(
    State(rewriter): State<Arc<ResponseRewriter>>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    apply_word_break(&rewriter, response).await
}

/// 断词开关查询参数
#[derive(Debug, Default, Deserialize)]
pub struct WordBreakQuery {
    pub wordbreak: Option<String>,
    pub minchars: Option<String>,
}

impl WordBreakQuery {
    pub fn is_enabled(&self) -> bool {
        self.wordbreak.as_deref() == Some("on")
    }

    /// 无法解析的 minchars 被忽略
    pub fn min_chars(&self) -> Option<usize> {
        self.minchars.as_deref().and_then(|v| v.trim().parse().ok())
    }

    /// 在默认选项基础上生成本次请求的选项，未开启时返回 None
    pub fn to_options(&self, defaults: &WordBreakOptions) -> Option<WordBreakOptions> {
        if !self.is_enabled() {
            return None;
        }

        let mut options = defaults.clone();
        if let Some(min_chars) = self.min_chars() {
            options.segmenter.min_length = min_chars;
        }
        Some(options)
    }
}

/// 按请求开关的断词中间件
///
/// 每个请求根据查询参数构造独立的改写器
pub async fn query_toggle_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let query = Query::<WordBreakQuery>::try_from_uri(request.uri())
        .map(|Query(q)| q)
        .unwrap_or_default();

    let Some(options) = query.to_options(&state.wordbreak) else {
        return next.run(request).await;
    };

    let rewriter = match ResponseRewriter::new(options, state.html_rewriter.clone()) {
        Ok(rewriter) => rewriter,
        Err(e) => return ApiError::from(e).into_response(),
    };

    let response = next.run(request).await;
    apply_word_break(&rewriter, response).await
}

/// 对响应执行断词改写
///
/// 不符合条件的响应不做缓冲直接返回；非 UTF-8 响应体原样返回
pub async fn apply_word_break(rewriter: &ResponseRewriter, response: Response) -> Response {
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let Some(kind) = rewriter.classify(response.status(), content_type) else {
        return response;
    };

    let declared_len = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    if declared_len.is_some_and(|len| len > rewriter.max_body_bytes()) {
        tracing::debug!(limit = rewriter.max_body_bytes(), "Response body over limit, skipped");
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match buffer_body(body, rewriter.max_body_bytes()).await {
        Ok(BufferedBody::Complete(bytes)) => bytes,
        Ok(BufferedBody::Overflow(body)) => {
            tracing::debug!(limit = rewriter.max_body_bytes(), "Response body over limit, skipped");
            return Response::from_parts(parts, body);
        }
        Err(e) => {
            return ApiError::Internal(format!("Failed to buffer response body: {}", e))
                .into_response();
        }
    };

    let Ok(text) = std::str::from_utf8(&bytes) else {
        tracing::warn!(bytes = bytes.len(), "Response body is not valid UTF-8, skipped");
        return Response::from_parts(parts, Body::from(bytes));
    };

    let rewritten = match rewriter.rewrite(kind, text) {
        Ok(rewritten) => rewritten,
        Err(e) => {
            tracing::error!(error = %e, "Failed to rewrite response body");
            return Response::from_parts(parts, Body::from(bytes));
        }
    };

    tracing::debug!(
        kind = kind.as_str(),
        before = bytes.len(),
        after = rewritten.len(),
        "Response body rewritten"
    );

    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(rewritten))
}

/// 缓冲结果
enum BufferedBody {
    /// 完整读入
    Complete(Bytes),
    /// 超出上限，已读部分与剩余流重新拼接
    Overflow(Body),
}

/// 在上限内缓冲响应体
///
/// 超出上限时不丢弃数据，已读取的块会放回新的流最前面
async fn buffer_body(body: Body, limit: usize) -> Result<BufferedBody, axum::Error> {
    let mut stream = body.into_data_stream();
    let mut chunks: Vec<Bytes> = Vec::new();
    let mut total = 0usize;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        total += chunk.len();
        chunks.push(chunk);

        if total > limit {
            let head = futures_util::stream::iter(chunks.into_iter().map(Ok::<_, axum::Error>));
            return Ok(BufferedBody::Overflow(Body::from_stream(head.chain(stream))));
        }
    }

    Ok(BufferedBody::Complete(Bytes::from(chunks.concat())))
}

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}
