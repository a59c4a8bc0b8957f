//! Trait abstractions for external collaborators.
//!
//! The composer talks to the outside world through these seams so tests can
//! inject doubles instead of hitting the network.

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
