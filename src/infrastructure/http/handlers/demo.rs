//! Demo Page Handler
//!
//! 展示断词效果的示例页面，断词由 `query_toggle_middleware` 按查询参数开启

use axum::{
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::infrastructure::http::middleware::WordBreakQuery;
use crate::infrastructure::http::state::AppState;

/// 示例页面
pub async fn demo_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WordBreakQuery>,
) -> Html<String> {
    let enabled = query.is_enabled();
    let min_chars = query
        .min_chars()
        .unwrap_or(state.wordbreak.segmenter.min_length);

    Html(render_demo_page(enabled, min_chars))
}

fn render_demo_page(enabled: bool, min_chars: usize) -> String {
    let status = if enabled { "on" } else { "off" };
    let toggle = if enabled {
        format!("<a href=\"/?minchars={min_chars}\">Turn word breaking off</a>")
    } else {
        format!("<a href=\"/?wordbreak=on&amp;minchars={min_chars}\">Turn word breaking on</a>")
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Word Break Demo</title>
<style>
main {{ max-width: 18rem; border: 1px solid #ccc; padding: 1rem; }}
</style>
</head>
<body>
<main>
<p>Word breaking: <strong>{status}</strong>, minimum characters: <strong>{min_chars}</strong></p>
<p>{toggle}</p>
<h1>System.Net.Http.HttpClientHandler</h1>
<h2>Microsoft.Extensions.DependencyInjection.ServiceCollection</h2>
<h3>System.IO.XMLHttpRequestFactory</h3>
<p>Paragraph text is left alone: System.Collections.Generic.Dictionary</p>
<code class="text-break">MyLittleContentEngine.Services.Content.TableOfContents.ContentTocItem</code>
<pre>System.Net.Http.HttpClient inside pre</pre>
<script>var example = "System.Net.Http.HttpClient";</script>
</main>
</body>
</html>
"#
    )
}
