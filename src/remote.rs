//! The remote collaborator that computes the next counter value.
//!
//! The view never does arithmetic on its own: every new value comes from a
//! [`CounterSource`]. The production source talks to an HTTP endpoint that
//! accepts `?number=<n>` and answers `{"result": <integer>}`.

use crate::error::Result;
use crate::http::Client;
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

/// Query parameter carrying the current counter value.
pub const NUMBER_PARAM: &str = "number";

/// Produces the next counter value from the current one.
#[async_trait]
pub trait CounterSource: Send + Sync {
    /// Ask the source for the value that should replace `current`.
    async fn next(&self, current: i64) -> Result<i64>;
}

/// Server reply. Only `result` is read; anything else is ignored.
#[derive(Debug, Deserialize)]
struct CounterReply {
    result: i64,
}

/// Build the request URL for `current`.
///
/// Any existing `number` pair on the endpoint is replaced; other pairs are
/// kept in order.
#[must_use]
pub fn request_url(endpoint: &Url, current: i64) -> Url {
    let kept: Vec<(String, String)> = endpoint
        .query_pairs()
        .filter(|(key, _)| key != NUMBER_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = endpoint.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(NUMBER_PARAM, &current.to_string());
    }
    url
}

/// Decode a reply body into the new counter value.
pub fn parse_reply(body: &str) -> Result<i64> {
    let reply: CounterReply = serde_json::from_str(body)?;
    Ok(reply.result)
}

/// [`CounterSource`] backed by a GET request to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpCounterSource {
    client: Client,
    endpoint: Url,
}

impl HttpCounterSource {
    pub const fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CounterSource for HttpCounterSource {
    async fn next(&self, current: i64) -> Result<i64> {
        let url = request_url(&self.endpoint, current);
        tracing::debug!(%url, current, "requesting next count");

        let response = self.client.get(url.as_str()).send().await?;
        // The status is not checked: the body alone decides, like `fetch().json()`.
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status, bytes = body.len(), "count response received");

        parse_reply(&body)
    }
}
