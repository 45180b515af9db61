//! Reader page extraction strategies.

use scraper::Html;
use serde::Deserialize;
use serde_json::{Deserializer, Value};
use url::Url;

use crate::{
    dom,
    error::{Error, Result},
    models::{PageInfo, index_pages},
};

#[derive(Debug, Deserialize)]
struct ReaderPayload {
    sources: Vec<ReaderSource>,
}

#[derive(Debug, Deserialize)]
struct ReaderSource {
    images: Vec<String>,
}

/// Pages from a reader script such as `ts_reader.run({"sources":[{"images":[..]}]});`.
///
/// The script is the first one whose text contains `marker`. The payload is
/// the first json object inside it, whatever wraps it. Image urls are
/// returned as written in the payload.
pub fn pages_from_script(document: &Html, marker: &str) -> Result<Vec<PageInfo>> {
    let script = dom::select(document.root_element(), "script")?
        .into_iter()
        .map(|script| script.text().collect::<String>())
        .find(|script| script.contains(marker))
        .ok_or(Error::MissingField("reader script"))?;

    let payload = first_json_object(&script)?;
    let payload: ReaderPayload = serde_json::from_value(payload)
        .map_err(|e| Error::MalformedPayload(e.to_string()))?;

    let images = payload
        .sources
        .into_iter()
        .next()
        .ok_or_else(|| Error::MalformedPayload("empty sources".to_string()))?
        .images;

    Ok(index_pages(images))
}

/// Pages from the `src` of every image matched by `query`, in document order
pub fn pages_from_images(document: &Html, query: &str, base: &Url) -> Result<Vec<PageInfo>> {
    let urls = dom::select(document.root_element(), query)?
        .into_iter()
        .filter_map(|img| img.value().attr("src"))
        .map(|src| dom::abs_url(base, src).map(String::from))
        .collect::<Result<Vec<String>>>()?;

    Ok(index_pages(urls))
}

fn first_json_object(script: &str) -> Result<Value> {
    let start = script
        .find('{')
        .ok_or_else(|| Error::MalformedPayload("no json object in script".to_string()))?;

    Deserializer::from_str(&script[start..])
        .into_iter::<Value>()
        .next()
        .ok_or_else(|| Error::MalformedPayload("no json object in script".to_string()))?
        .map_err(|e| Error::MalformedPayload(e.to_string()))
}
