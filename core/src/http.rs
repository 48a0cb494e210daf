//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! builds `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network; a `Transport` executes the actual I/O. Request bodies
//! are fully materialized before a request leaves the builder, including
//! multipart uploads.

use crate::upload::Upload;

/// HTTP method for a request. The backend is only ever read or posted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `AssistClient::build_*` methods. `path` is the absolute URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

/// Encoded request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized JSON document.
    Json(String),
    /// `multipart/form-data` parts; the transport picks the boundary.
    Multipart(MultipartForm),
}

impl RequestBody {
    pub fn as_json(&self) -> Option<&str> {
        match self {
            RequestBody::Json(body) => Some(body),
            RequestBody::Multipart(_) => None,
        }
    }

    pub fn as_multipart(&self) -> Option<&MultipartForm> {
        match self {
            RequestBody::Multipart(form) => Some(form),
            RequestBody::Json(_) => None,
        }
    }
}

/// Ordered list of multipart parts.
///
/// Optional fields are appended with `optional_text`, which skips `None`
/// and empty strings entirely rather than emitting an empty part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    pub value: PartValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartValue {
    Text(String),
    File(Upload),
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, name: &str, upload: Upload) -> Self {
        self.parts.push(Part {
            name: name.to_string(),
            value: PartValue::File(upload),
        });
        self
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(Part {
            name: name.to_string(),
            value: PartValue::Text(value.to_string()),
        });
        self
    }

    pub fn optional_text(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.text(name, value),
            _ => self,
        }
    }

    pub fn get(&self, name: &str) -> Option<&PartValue> {
        self.parts.iter().find(|p| p.name == name).map(|p| &p.value)
    }

    pub fn text_value(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(PartValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after executing an `HttpRequest`, then passed to
/// `AssistClient::parse_*` methods for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
