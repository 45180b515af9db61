#[macro_use]
extern crate log;

pub mod chapters;
pub mod date;
pub mod dom;
pub mod error;
pub mod extensions;
pub mod http;
pub mod models;
pub mod prelude;
pub mod reader;

/// This is used to ensure both host and sources are built against the same protocol
pub static LIB_VERSION: &str = env!("CARGO_PKG_VERSION");
