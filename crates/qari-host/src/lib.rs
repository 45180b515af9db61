#[macro_use]
extern crate log;

pub mod config;
pub mod http;
pub mod manager;
pub mod prelude;
