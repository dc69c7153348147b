//! Minimal HTTP client for the counter endpoint.
//!
//! Only plain GET requests are needed. Internally uses reqwest for HTTP
//! transport; bodies are collected from the byte stream with a size cap.

use crate::error::{Error, Result};
use futures::Stream;
use futures::StreamExt;
use futures::TryStreamExt;
use std::pin::Pin;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!("counter_view/", env!("CARGO_PKG_VERSION"));
const MAX_TEXT_BODY_BYTES: usize = 1024 * 1024;

type BodyStream = Pin<Box<dyn Stream<Item = std::io::Result<Vec<u8>>> + Send>>;

#[derive(Debug, Clone)]
pub struct Client {
    inner: reqwest::Client,
    default_timeout: Option<Duration>,
}

impl Client {
    pub fn new() -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .http1_only()
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            default_timeout: None,
        })
    }

    /// Apply `timeout` to every request built from this client.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn get(&self, url: &str) -> RequestBuilder<'_> {
        RequestBuilder::new(self, url)
    }
}

pub struct RequestBuilder<'a> {
    client: &'a Client,
    url: String,
    timeout: Option<Duration>,
}

impl<'a> RequestBuilder<'a> {
    fn new(client: &'a Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
            timeout: client.default_timeout,
        }
    }

    pub async fn send(self) -> Result<Response> {
        let Self {
            client,
            url,
            timeout,
        } = self;

        let mut builder = client.inner.get(&url);
        if let Some(duration) = timeout {
            builder = builder.timeout(duration);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::http("Request timed out")
            } else {
                Error::http(format!("HTTP request failed: {e}"))
            }
        })?;

        let status = response.status().as_u16();
        let stream = response
            .bytes_stream()
            .map(|result| {
                result
                    .map(|bytes| bytes.to_vec())
                    .map_err(|e| std::io::Error::other(e.to_string()))
            })
            .boxed();

        Ok(Response { status, stream })
    }
}

pub struct Response {
    status: u16,
    stream: BodyStream,
}

impl Response {
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    pub async fn text(self) -> Result<String> {
        let bytes = self
            .stream
            .try_fold(Vec::new(), |mut acc, chunk| async move {
                if acc.len().saturating_add(chunk.len()) > MAX_TEXT_BODY_BYTES {
                    return Err(std::io::Error::other("response body too large"));
                }
                acc.extend_from_slice(&chunk);
                Ok::<_, std::io::Error>(acc)
            })
            .await?;

        match String::from_utf8(bytes) {
            Ok(s) => Ok(s),
            Err(e) => Ok(String::from_utf8_lossy(e.as_bytes()).into_owned()),
        }
    }
}
