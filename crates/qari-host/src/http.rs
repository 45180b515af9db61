use std::{sync::Arc, time::Duration};

use anyhow::{Result, anyhow, bail};
use qari_lib::prelude::{Headers, Request, Response, Transport};
use reqwest::{Method, blocking::Client, cookie::Jar};

use crate::config::Config;

/// [`Transport`] over a blocking reqwest client with a shared cookie jar
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .cookie_store(true)
            .cookie_provider(Arc::new(Jar::default()))
            .brotli(true)
            .deflate(true)
            .gzip(true)
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .timeout(Duration::from_secs(config.read_timeout))
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &Request) -> Result<Response> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|_| anyhow!("invalid method {}", request.method))?;

        let mut req = self.client.request(method, &request.url);
        for (name, values) in &request.headers {
            for value in values {
                req = req.header(name, value);
            }
        }
        if let Some(body) = &request.body {
            req = req.body(body.clone());
        }

        let res = req.send()?;
        let status = res.status();
        if !status.is_success() {
            bail!("{} {} returned {}", request.method, request.url, status);
        }

        let url = res.url().to_string();
        let mut headers = Headers::new();
        for (name, value) in res.headers() {
            headers
                .entry(name.to_string())
                .or_default()
                .push(value.to_str()?.to_string());
        }

        Ok(Response {
            url,
            status: status.as_u16(),
            headers,
            body: res.text()?,
        })
    }
}
