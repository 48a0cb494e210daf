//! The I/O seam between the sans-IO client and the network.
//!
//! `Transport` executes one `HttpRequest` and reports the response as data.
//! Status codes are never treated as errors here; only the absence of a
//! response is a `Failure`. Tests swap in their own implementations.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part as ReqwestPart};

use crate::config::ClientConfig;
use crate::error::Failure;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, MultipartForm, PartValue, RequestBody};

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Failure>;
}

/// `reqwest`-backed transport with the configured request timeout.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, Failure> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Failure::Transport(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Failure> {
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.path),
            HttpMethod::Post => self.http.post(&request.path),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            Some(RequestBody::Json(body)) => builder.body(body),
            Some(RequestBody::Multipart(form)) => builder.multipart(to_reqwest_form(form)?),
            None => builder,
        };

        let response = builder.send().await.map_err(transport_failure)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await.map_err(transport_failure)?;

        Ok(HttpResponse { status, headers, body })
    }
}

fn transport_failure(err: reqwest::Error) -> Failure {
    if err.is_timeout() {
        Failure::Timeout
    } else {
        Failure::Transport(err.to_string())
    }
}

fn to_reqwest_form(form: MultipartForm) -> Result<Form, Failure> {
    let mut out = Form::new();
    for part in form.parts {
        out = match part.value {
            PartValue::Text(value) => out.text(part.name, value),
            PartValue::File(upload) => {
                let file = ReqwestPart::bytes(upload.bytes)
                    .file_name(upload.file_name)
                    .mime_str(&upload.content_type)
                    .map_err(|e| Failure::Encode(e.to_string()))?;
                out.part(part.name, file)
            }
        };
    }
    Ok(out)
}
