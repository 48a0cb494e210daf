//! API client core for the translation and form-assistance service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `ApiService` pairs that
//! sans-IO client with a `Transport` to offer one async call per endpoint.
//!
//! # Design
//! - `AssistClient` is stateless and holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - Every failure collapses into an `ApiError` whose `Display` is the
//!   user-facing message. Nothing is retried.
//! - Configuration is constructed once by the host and passed in.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod types;
pub mod upload;

pub use client::AssistClient;
pub use config::ClientConfig;
pub use error::{ApiError, ErrorKind, Failure};
pub use http::{HttpMethod, HttpRequest, HttpResponse, MultipartForm, Part, PartValue, RequestBody};
pub use service::ApiService;
pub use transport::{ReqwestTransport, Transport};
pub use types::*;
pub use upload::{Upload, ValidationError};
