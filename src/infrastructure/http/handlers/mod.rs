//! HTTP Handlers

mod demo;
mod ping;

pub use demo::*;
pub use ping::*;
