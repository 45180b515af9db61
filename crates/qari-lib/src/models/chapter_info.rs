use serde::{Deserialize, Serialize};

/// A type represent chapter, normalized across source
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChapterInfo {
    pub path: String,
    pub name: String,
    /// epoch millis, 0 when the site shows no readable date
    pub uploaded: i64,
}
