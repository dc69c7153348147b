//! counter-view: a terminal counter whose next value comes from a remote
//! HTTP endpoint.
//!
//! The view holds a single integer starting at 0. Each click sends the
//! current value to the endpoint as `?number=<n>` and replaces it with the
//! `result` field of the JSON reply. See [`app::CounterView`].

#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod headless;
pub mod http;
pub mod remote;
pub mod view;

pub use error::{Error, Result};
