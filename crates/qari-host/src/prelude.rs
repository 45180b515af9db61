pub use crate::config::Config;
pub use crate::http::HttpTransport;
pub use crate::manager::SourceManager;
