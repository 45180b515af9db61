use std::collections::BTreeMap;

use scraper::Html;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub type Headers = BTreeMap<String, Vec<String>>;

/// Description of a request, built by a source and executed by a [`Transport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

impl Request {
    pub fn get(url: &str) -> Request {
        Request {
            method: "GET".to_string(),
            url: url.to_string(),
            headers: Headers::new(),
            body: None,
        }
    }

    pub fn set(mut self, name: &str, value: &str) -> Request {
        self.headers
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
        self
    }

    pub fn with_headers(self, headers: &Headers) -> Request {
        headers.iter().fold(self, |request, (name, values)| {
            values
                .iter()
                .fold(request, |request, value| request.set(name, value))
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// final url, after redirects
    pub url: String,
    pub status: u16,
    pub headers: Headers,
    pub body: String,
}

/// Executes requests on behalf of sources.
///
/// Timeouts, default headers, cookies and anti-bot handling belong to the
/// implementation. Failures are opaque to sources and propagate unchanged.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &Request) -> anyhow::Result<Response>;
}

/// Execute `request` and parse the body as an html document
pub fn fetch_document(transport: &dyn Transport, request: &Request) -> Result<Html> {
    Ok(fetch_document_at(transport, request)?.1)
}

/// Like [`fetch_document`], also returning the url the document was served
/// from after redirects, which relative links in it resolve against
pub fn fetch_document_at(transport: &dyn Transport, request: &Request) -> Result<(String, Html)> {
    debug!("{} {}", request.method, request.url);
    let response = transport.execute(request)?;
    debug!("{} responded {}", response.url, response.status);

    let document = Html::parse_document(&response.body);
    Ok((response.url, document))
}
