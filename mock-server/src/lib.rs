//! Stand-in for the translation and form-assistance backend.
//!
//! Serves every endpoint the client consumes with canned, deterministic
//! answers, and reproduces the backend's validation behavior: blank input
//! and disallowed file types are 400s with a `detail`, oversize uploads are
//! 413s, missing form fields are 422s.

pub mod catalog;

use std::collections::HashMap;

use axum::{
    extract::{DefaultBodyLimit, Multipart, Query},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use catalog::{FormCategory, FormTemplate, Language};

pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];
pub const SERVICE_VERSION: &str = "1.0.0";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextTranslationRequest {
    pub text: String,
    pub source_language: Option<String>,
    pub target_language: String,
    pub context: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub context_explanation: Option<String>,
    pub confidence: Option<f64>,
    pub detected_objects: Option<Vec<String>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FormField {
    pub field_name: String,
    pub field_type: String,
    pub label: String,
    pub explanation: String,
    pub required: bool,
    pub example_value: Option<String>,
    pub validation_rules: Option<Vec<String>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FormAnalysisResponse {
    pub form_type: String,
    pub title: String,
    pub description: String,
    pub fields: Vec<FormField>,
    pub instructions: Vec<String>,
    pub required_documents: Option<Vec<String>>,
    pub estimated_time: Option<String>,
    pub tips: Option<Vec<String>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FormExplanationRequest {
    pub field_name: String,
    pub field_context: String,
    pub form_type: String,
    pub target_language: String,
    pub user_situation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    pub country: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
}

type Rejection = (StatusCode, Json<Value>);

fn reject(status: StatusCode, detail: impl Into<String>) -> Rejection {
    (status, Json(json!({ "detail": detail.into() })))
}

/// Validation error in the list shape the real backend uses.
fn missing_field(name: &str) -> Rejection {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "detail": [{ "loc": ["body", name], "msg": "field required", "type": "value_error.missing" }]
        })),
    )
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

pub fn app() -> Router {
    let api = Router::new()
        .route("/translate/text", post(translate_text))
        .route("/translate/image", post(translate_image))
        .route("/translate/languages", get(languages))
        .route("/forms/analyze", post(analyze_form))
        .route("/forms/explain", post(explain_field))
        .route("/forms/templates", get(templates))
        .route("/forms/categories", get(categories))
        .route("/health/status", get(health_status))
        .route("/health/readiness", get(readiness))
        .route("/health/liveness", get(liveness));

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        // Leave room above the upload cap so oversize files reach the handler.
        .layer(DefaultBodyLimit::max(MAX_FILE_SIZE * 2))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// ---------------------------------------------------------------------------
// Multipart
// ---------------------------------------------------------------------------

struct UploadedFile {
    content_type: String,
    bytes: Vec<u8>,
}

struct UploadForm {
    file: Option<UploadedFile>,
    text: HashMap<String, String>,
}

impl UploadForm {
    fn required_text(&self, name: &str) -> Result<String, Rejection> {
        self.text.get(name).cloned().ok_or_else(|| missing_field(name))
    }

    fn optional_text(&self, name: &str) -> Option<String> {
        self.text.get(name).cloned()
    }
}

async fn read_upload(mut multipart: Multipart, file_field: &str) -> Result<UploadForm, Rejection> {
    let mut form = UploadForm {
        file: None,
        text: HashMap::new(),
    };
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| reject(e.status(), e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == file_field {
            let content_type = field.content_type().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| reject(e.status(), e.body_text()))?;
            form.file = Some(UploadedFile {
                content_type,
                bytes: bytes.to_vec(),
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| reject(e.status(), e.body_text()))?;
            form.text.insert(name, value);
        }
    }
    Ok(form)
}

fn check_size(file: &UploadedFile) -> Result<(), Rejection> {
    if file.bytes.len() > MAX_FILE_SIZE {
        return Err(reject(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("File too large. Maximum size: {}MB", MAX_FILE_SIZE / (1024 * 1024)),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

async fn translate_text(Json(input): Json<TextTranslationRequest>) -> Result<Json<TranslationResponse>, Rejection> {
    if input.text.trim().is_empty() {
        return Err(reject(StatusCode::BAD_REQUEST, "Text cannot be empty"));
    }
    Ok(Json(TranslationResponse {
        translated_text: format!("[{}] {}", input.target_language, input.text),
        original_text: input.text,
        source_language: input.source_language.unwrap_or_else(|| "auto-detected".to_string()),
        target_language: input.target_language,
        context_explanation: input.context.map(|c| format!("Translated with context: {c}")),
        confidence: Some(0.90),
        detected_objects: None,
    }))
}

async fn translate_image(multipart: Multipart) -> Result<Json<TranslationResponse>, Rejection> {
    let form = read_upload(multipart, "image").await?;
    let target_language = form.required_text("target_language")?;
    let image = form.file.as_ref().ok_or_else(|| missing_field("image"))?;

    if !ALLOWED_IMAGE_TYPES.contains(&image.content_type.as_str()) {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            format!("Invalid file type. Allowed types: {}", ALLOWED_IMAGE_TYPES.join(", ")),
        ));
    }
    check_size(image)?;

    Ok(Json(TranslationResponse {
        original_text: "Text detected in image".to_string(),
        translated_text: format!("[{target_language}] Text detected in image"),
        source_language: form
            .optional_text("source_language")
            .unwrap_or_else(|| "auto-detected".to_string()),
        target_language,
        context_explanation: form.optional_text("context"),
        confidence: Some(0.85),
        detected_objects: Some(vec![format!("{} bytes of {}", image.bytes.len(), image.content_type)]),
    }))
}

async fn languages() -> Json<Value> {
    Json(json!({ "languages": catalog::languages() }))
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

async fn analyze_form(multipart: Multipart) -> Result<Json<FormAnalysisResponse>, Rejection> {
    let form = read_upload(multipart, "document").await?;
    let target_language = form.required_text("target_language")?;
    let document = form.file.as_ref().ok_or_else(|| missing_field("document"))?;

    let allowed = document.content_type == "application/pdf"
        || ALLOWED_IMAGE_TYPES.contains(&document.content_type.as_str());
    if !allowed {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            "Invalid file type. Allowed types: images and PDF",
        ));
    }
    check_size(document)?;

    let form_type = form
        .optional_text("document_type")
        .unwrap_or_else(|| "Government Form".to_string());
    let description = match form.optional_text("country") {
        Some(country) => format!("Form analysis for {country}, explained in {target_language}"),
        None => format!("Form analysis explained in {target_language}"),
    };

    Ok(Json(FormAnalysisResponse {
        form_type,
        title: "Analyzed Form".to_string(),
        description,
        fields: vec![FormField {
            field_name: "sample_field".to_string(),
            field_type: "text".to_string(),
            label: "Sample Field".to_string(),
            explanation: "This is a sample field explanation".to_string(),
            required: true,
            example_value: Some("Example value".to_string()),
            validation_rules: None,
        }],
        instructions: vec![
            "Fill out all required fields".to_string(),
            "Provide accurate information".to_string(),
            "Review before submission".to_string(),
        ],
        required_documents: Some(vec!["ID document".to_string(), "Proof of address".to_string()]),
        estimated_time: Some("15-30 minutes".to_string()),
        tips: None,
    }))
}

async fn explain_field(Json(input): Json<FormExplanationRequest>) -> Result<Json<Value>, Rejection> {
    if input.field_name.trim().is_empty() {
        return Err(reject(StatusCode::BAD_REQUEST, "Field name cannot be empty"));
    }
    Ok(Json(json!({
        "field_name": input.field_name,
        "explanation": format!("Detailed explanation for {} in {}", input.field_name, input.target_language),
        "form_type": input.form_type,
        "example_values": ["Example 1", "Example 2"],
        "common_mistakes": ["Don't leave blank", "Use proper format"],
        "required_documents": ["Supporting document if needed"],
        "tips": ["Be accurate and honest", "Double-check spelling", "Keep copies of everything"]
    })))
}

async fn templates(Query(query): Query<TemplateQuery>) -> Json<Value> {
    let templates = catalog::filter_templates(query.country.as_deref(), query.category.as_deref());
    Json(json!({
        "templates": templates,
        "categories": catalog::TEMPLATE_CATEGORIES,
        "countries": catalog::TEMPLATE_COUNTRIES,
    }))
}

async fn categories() -> Json<Value> {
    Json(json!({ "categories": catalog::categories() }))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "message": "Refugee Assistance API is running" }))
}

async fn health_status() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": now(),
        "version": SERVICE_VERSION,
        "uptime": "Available"
    }))
}

async fn readiness() -> Json<Value> {
    Json(json!({
        "ready": true,
        "timestamp": now(),
        "checks": [{ "service": "mock_backend", "status": "ready", "message": "Canned responses loaded" }]
    }))
}

async fn liveness() -> Json<Value> {
    Json(json!({
        "alive": true,
        "timestamp": now(),
        "service": "refugee-assistance-api"
    }))
}
