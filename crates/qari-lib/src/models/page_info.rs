use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PageInfo {
    pub index: usize,
    pub image_url: String,
}

/// Number image urls positionally, starting at 0.
pub fn index_pages<I, S>(urls: I) -> Vec<PageInfo>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    urls.into_iter()
        .enumerate()
        .map(|(index, url)| PageInfo {
            index,
            image_url: url.into(),
        })
        .collect()
}
