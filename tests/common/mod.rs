//! Shared fixtures for integration tests.
//!
//! [`StubServer`] stands in for the counter endpoint: it answers `GET /`
//! with a body produced by a test-supplied closure and records every raw
//! query string it receives.

#![allow(dead_code)]

use axum::Router;
use axum::extract::RawQuery;
use axum::http::header;
use axum::routing::get;
use counter_view::app::CounterView;
use counter_view::http::Client;
use counter_view::remote::HttpCounterSource;
use counter_view::view::Theme;
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;
use url::Url;

type Reply = dyn Fn(Option<i64>) -> String + Send + Sync;

pub struct StubServer {
    endpoint: Url,
    queries: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Serve on an ephemeral local port. `reply` receives the parsed
    /// `number` parameter (if any) and returns the response body.
    pub fn spawn(
        rt: &Runtime,
        reply: impl Fn(Option<i64>) -> String + Send + Sync + 'static,
    ) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let reply: Arc<Reply> = Arc::new(reply);

        let handler = {
            let queries = Arc::clone(&queries);
            move |RawQuery(raw): RawQuery| {
                let queries = Arc::clone(&queries);
                let reply = Arc::clone(&reply);
                async move {
                    let raw = raw.unwrap_or_default();
                    let number = url::form_urlencoded::parse(raw.as_bytes())
                        .find(|(key, _)| key == "number")
                        .and_then(|(_, value)| value.parse::<i64>().ok());
                    queries.lock().unwrap().push(raw);
                    ([(header::CONTENT_TYPE, "application/json")], reply(number))
                }
            }
        };
        let router = Router::new().route("/", get(handler));

        let listener = rt
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");
        rt.spawn(async move {
            axum::serve(listener, router).await.expect("serve stub");
        });

        Self {
            endpoint: Url::parse(&format!("http://{addr}")).expect("stub endpoint"),
            queries,
        }
    }

    /// `{"result": f(number)}` for every request carrying a number.
    pub fn computing(rt: &Runtime, f: impl Fn(i64) -> i64 + Send + Sync + 'static) -> Self {
        Self::spawn(rt, move |number| {
            let number = number.expect("request without number");
            serde_json::json!({ "result": f(number) }).to_string()
        })
    }

    pub fn endpoint(&self) -> Url {
        self.endpoint.clone()
    }

    /// Raw query strings received so far, in arrival order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

pub fn runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("build runtime")
}

/// A counter view talking to `endpoint` over HTTP.
pub fn mount(rt: &Runtime, endpoint: Url) -> CounterView {
    let client = Client::new().expect("build client");
    let source = Arc::new(HttpCounterSource::new(client, endpoint));
    CounterView::new(source, rt.handle().clone()).with_theme(Theme::plain())
}

/// An endpoint nothing is listening on.
pub fn closed_endpoint() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    Url::parse(&format!("http://{addr}")).expect("closed endpoint")
}
