//! HTTP client seam.
//!
//! All outgoing requests go through the [`HttpClient`] trait so the fetch
//! pipeline can be driven by a mock in tests.

mod client;

pub use client::{HttpClient, MockClient, MockResponse, ReqwestClient};
