//! HTTP Layer - 断词中间件 + 演示页面

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::{
    apply_word_break, query_toggle_middleware, word_break_middleware, WordBreakQuery,
    WordBreakRouterExt,
};
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
