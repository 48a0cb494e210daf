//! Domain DTOs exchanged with the backend.
//!
//! # Design
//! These are plain request/response records; the client passes them through
//! without mutating them. They mirror the mock-server's schema but are
//! defined independently so integration tests catch schema drift. Optional
//! request fields are omitted from JSON rather than sent as `null`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::upload::Upload;

/// Text translation request, sent as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationRequest {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    pub target_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Image translation request, sent as `multipart/form-data`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTranslationRequest {
    pub image: Upload,
    pub target_language: String,
    pub source_language: Option<String>,
    pub context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationResponse {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_explanation: Option<String>,
    /// Model confidence in `[0, 1]` when the backend reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_objects: Option<Vec<String>>,
}

/// Catalog entry for a supported language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub native_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguagesResponse {
    pub languages: Vec<Language>,
}

/// Form document analysis request, sent as `multipart/form-data`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormAnalysisRequest {
    pub document: Upload,
    pub target_language: String,
    pub document_type: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormField {
    pub field_name: String,
    pub field_type: String,
    pub label: String,
    pub explanation: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_rules: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormAnalysisResponse {
    pub form_type: String,
    pub title: String,
    pub description: String,
    pub fields: Vec<FormField>,
    /// Steps in the order they should be followed.
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_documents: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
}

/// Request for a detailed explanation of a single form field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormExplanationRequest {
    pub field_name: String,
    pub field_context: String,
    pub form_type: String,
    pub target_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_situation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormTemplate {
    pub id: String,
    pub name: String,
    pub country: String,
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormTemplatesResponse {
    pub templates: Vec<FormTemplate>,
    pub categories: Vec<String>,
    pub countries: Vec<String>,
}

/// Optional filters for the template listing. Absent or empty filters are
/// left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    pub country: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
}

impl TemplateFilter {
    pub fn country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoriesResponse {
    pub categories: Vec<FormCategory>,
}

/// Health probe result.
///
/// The backend's probes do not agree on a shape: liveness reports `alive`,
/// readiness reports `ready` and `checks`, and the root probe has no
/// timestamp. Missing common fields default to empty strings and anything
/// else lands in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
