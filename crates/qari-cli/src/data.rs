use qari_lib::prelude::SourceInfo;

#[derive(serde::Serialize)]
pub struct SourceEntry {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub version: String,
    pub lib_version: String,
    pub lang: String,
    pub supports_latest: bool,
}

impl From<SourceInfo> for SourceEntry {
    fn from(info: SourceInfo) -> Self {
        Self {
            id: info.id,
            name: info.name,
            url: info.url,
            version: info.version,
            lib_version: qari_lib::LIB_VERSION.to_string(),
            lang: info.lang,
            supports_latest: info.supports_latest,
        }
    }
}
