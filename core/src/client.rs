//! Stateless HTTP request builder and response parser for the assistance API.
//!
//! # Design
//! `AssistClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Anything that is not a 2xx with a well-formed body comes back as a
//! `Failure`; mapping to user-facing text happens in `error`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{extract_detail, Failure};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, MultipartForm, RequestBody};
use crate::types::{
    CategoriesResponse, FormAnalysisRequest, FormAnalysisResponse, FormCategory, FormExplanationRequest,
    FormTemplatesResponse, HealthStatus, ImageTranslationRequest, Language, LanguagesResponse,
    TemplateFilter, TranslationRequest, TranslationResponse,
};

pub const PATH_TRANSLATE_TEXT: &str = "/api/v1/translate/text";
pub const PATH_TRANSLATE_IMAGE: &str = "/api/v1/translate/image";
pub const PATH_LANGUAGES: &str = "/api/v1/translate/languages";
pub const PATH_FORMS_ANALYZE: &str = "/api/v1/forms/analyze";
pub const PATH_FORMS_EXPLAIN: &str = "/api/v1/forms/explain";
pub const PATH_FORMS_TEMPLATES: &str = "/api/v1/forms/templates";
pub const PATH_FORMS_CATEGORIES: &str = "/api/v1/forms/categories";
pub const PATH_HEALTH: &str = "/health";
pub const PATH_HEALTH_STATUS: &str = "/api/v1/health/status";
pub const PATH_HEALTH_READINESS: &str = "/api/v1/health/readiness";
pub const PATH_HEALTH_LIVENESS: &str = "/api/v1/health/liveness";

/// Which of the four health probes to hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthProbe {
    Basic,
    Status,
    Readiness,
    Liveness,
}

impl HealthProbe {
    pub fn path(&self) -> &'static str {
        match self {
            HealthProbe::Basic => PATH_HEALTH,
            HealthProbe::Status => PATH_HEALTH_STATUS,
            HealthProbe::Readiness => PATH_HEALTH_READINESS,
            HealthProbe::Liveness => PATH_HEALTH_LIVENESS,
        }
    }
}

/// Synchronous, stateless client for the assistance API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct AssistClient {
    base_url: String,
}

impl AssistClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn post_json<T: Serialize>(&self, path: &str, input: &T) -> Result<HttpRequest, Failure> {
        let body = serde_json::to_string(input).map_err(|e| Failure::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(RequestBody::Json(body)),
        })
    }

    /// The content-type header (with boundary) is left to the transport.
    fn post_multipart(&self, path: &str, form: MultipartForm) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: Some(RequestBody::Multipart(form)),
        }
    }

    // -----------------------------------------------------------------------
    // Translation
    // -----------------------------------------------------------------------

    pub fn build_translate_text(&self, input: &TranslationRequest) -> Result<HttpRequest, Failure> {
        self.post_json(PATH_TRANSLATE_TEXT, input)
    }

    pub fn build_translate_image(&self, input: &ImageTranslationRequest) -> HttpRequest {
        let form = MultipartForm::new()
            .file("image", input.image.clone())
            .text("target_language", &input.target_language)
            .optional_text("source_language", input.source_language.as_deref())
            .optional_text("context", input.context.as_deref());
        self.post_multipart(PATH_TRANSLATE_IMAGE, form)
    }

    pub fn build_get_languages(&self) -> HttpRequest {
        self.get(PATH_LANGUAGES)
    }

    pub fn parse_translation(&self, response: HttpResponse) -> Result<TranslationResponse, Failure> {
        parse_json(response)
    }

    pub fn parse_languages(&self, response: HttpResponse) -> Result<Vec<Language>, Failure> {
        parse_json::<LanguagesResponse>(response).map(|r| r.languages)
    }

    // -----------------------------------------------------------------------
    // Forms
    // -----------------------------------------------------------------------

    pub fn build_analyze_form(&self, input: &FormAnalysisRequest) -> HttpRequest {
        let form = MultipartForm::new()
            .file("document", input.document.clone())
            .text("target_language", &input.target_language)
            .optional_text("document_type", input.document_type.as_deref())
            .optional_text("country", input.country.as_deref());
        self.post_multipart(PATH_FORMS_ANALYZE, form)
    }

    pub fn build_explain_field(&self, input: &FormExplanationRequest) -> Result<HttpRequest, Failure> {
        self.post_json(PATH_FORMS_EXPLAIN, input)
    }

    pub fn build_get_templates(&self, filter: &TemplateFilter) -> HttpRequest {
        let query = templates_query(filter);
        if query.is_empty() {
            self.get(PATH_FORMS_TEMPLATES)
        } else {
            self.get(&format!("{PATH_FORMS_TEMPLATES}?{query}"))
        }
    }

    pub fn build_get_categories(&self) -> HttpRequest {
        self.get(PATH_FORMS_CATEGORIES)
    }

    pub fn parse_form_analysis(&self, response: HttpResponse) -> Result<FormAnalysisResponse, Failure> {
        parse_json(response)
    }

    /// The explanation shape is backend-defined; hand it over untouched.
    pub fn parse_explanation(&self, response: HttpResponse) -> Result<serde_json::Value, Failure> {
        parse_json(response)
    }

    pub fn parse_templates(&self, response: HttpResponse) -> Result<FormTemplatesResponse, Failure> {
        parse_json(response)
    }

    pub fn parse_categories(&self, response: HttpResponse) -> Result<Vec<FormCategory>, Failure> {
        parse_json::<CategoriesResponse>(response).map(|r| r.categories)
    }

    // -----------------------------------------------------------------------
    // Health
    // -----------------------------------------------------------------------

    pub fn build_health(&self, probe: HealthProbe) -> HttpRequest {
        self.get(probe.path())
    }

    pub fn parse_health(&self, response: HttpResponse) -> Result<HealthStatus, Failure> {
        parse_json(response)
    }
}

/// Encode present filters as `country`, `category`, `language`, in that order.
pub fn templates_query(filter: &TemplateFilter) -> String {
    [
        ("country", filter.country.as_deref()),
        ("category", filter.category.as_deref()),
        ("language", filter.language.as_deref()),
    ]
    .into_iter()
    .filter_map(|(key, value)| match value {
        Some(v) if !v.is_empty() => Some(format!("{key}={}", urlencoding::encode(v))),
        _ => None,
    })
    .collect::<Vec<_>>()
    .join("&")
}

/// Map a non-2xx status to `Failure::Status`, keeping any backend detail.
fn check_status(response: &HttpResponse) -> Result<(), Failure> {
    if response.is_success() {
        return Ok(());
    }
    Err(Failure::Status {
        status: response.status,
        detail: extract_detail(&response.body),
    })
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, Failure> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| Failure::Decode(e.to_string()))
}
