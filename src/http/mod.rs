//! HTTP client layer: `PaprikaHttp`, one method per endpoint.

pub mod client;

pub use client::PaprikaHttp;
