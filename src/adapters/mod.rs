//! Concrete implementations of trait abstractions.
//!
//! Production adapters wrap real libraries behind the traits defined in
//! `crate::traits`; the [`mock`] submodule provides test doubles.

pub mod mock;
pub mod reqwest_http;

pub use mock::MockHttpClient;
pub use reqwest_http::ReqwestHttpClient;
