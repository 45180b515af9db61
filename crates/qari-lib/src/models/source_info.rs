use serde::{Deserialize, Serialize};

/// A type represent source
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceInfo {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub version: String,
    pub lang: String,
    pub supports_latest: bool,
}
