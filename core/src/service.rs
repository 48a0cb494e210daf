//! Async facade: one call per backend endpoint.
//!
//! Each call builds the request, hands it to the transport and parses the
//! response. Whatever fails along the way is mapped to an `ApiError` exactly
//! once, here. Calls share no mutable state, so independent calls can be
//! awaited together with `tokio::join!`.

use tracing::{debug, warn};

use crate::client::{AssistClient, HealthProbe};
use crate::config::ClientConfig;
use crate::error::{classify, ApiError, Failure};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{
    FormAnalysisRequest, FormAnalysisResponse, FormCategory, FormExplanationRequest, FormTemplatesResponse,
    HealthStatus, ImageTranslationRequest, Language, TemplateFilter, TranslationRequest, TranslationResponse,
};

pub struct ApiService<T> {
    client: AssistClient,
    transport: T,
}

impl ApiService<ReqwestTransport> {
    /// Service talking to `config.base_url` over HTTP.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::new(AssistClient::new(&config.base_url), transport))
    }
}

impl<T: Transport> ApiService<T> {
    pub fn new(client: AssistClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &AssistClient {
        &self.client
    }

    async fn send<R>(
        &self,
        request: Result<HttpRequest, Failure>,
        parse: impl FnOnce(&AssistClient, HttpResponse) -> Result<R, Failure>,
    ) -> Result<R, ApiError> {
        let outcome = async {
            let request = request?;
            debug!(method = request.method.as_str(), url = %request.path, "api request");
            let response = self.transport.execute(request).await?;
            parse(&self.client, response)
        }
        .await;
        outcome.map_err(|failure| {
            warn!(kind = ?classify(&failure), error = %failure, "api request failed");
            ApiError::from(failure)
        })
    }

    pub async fn translate_text(&self, request: &TranslationRequest) -> Result<TranslationResponse, ApiError> {
        self.send(self.client.build_translate_text(request), AssistClient::parse_translation)
            .await
    }

    pub async fn translate_image(&self, request: &ImageTranslationRequest) -> Result<TranslationResponse, ApiError> {
        self.send(Ok(self.client.build_translate_image(request)), AssistClient::parse_translation)
            .await
    }

    pub async fn get_languages(&self) -> Result<Vec<Language>, ApiError> {
        self.send(Ok(self.client.build_get_languages()), AssistClient::parse_languages)
            .await
    }

    pub async fn analyze_form(&self, request: &FormAnalysisRequest) -> Result<FormAnalysisResponse, ApiError> {
        self.send(Ok(self.client.build_analyze_form(request)), AssistClient::parse_form_analysis)
            .await
    }

    pub async fn explain_field(&self, request: &FormExplanationRequest) -> Result<serde_json::Value, ApiError> {
        self.send(self.client.build_explain_field(request), AssistClient::parse_explanation)
            .await
    }

    pub async fn get_templates(&self, filter: &TemplateFilter) -> Result<FormTemplatesResponse, ApiError> {
        self.send(Ok(self.client.build_get_templates(filter)), AssistClient::parse_templates)
            .await
    }

    pub async fn get_categories(&self) -> Result<Vec<FormCategory>, ApiError> {
        self.send(Ok(self.client.build_get_categories()), AssistClient::parse_categories)
            .await
    }

    pub async fn probe(&self, probe: HealthProbe) -> Result<HealthStatus, ApiError> {
        self.send(Ok(self.client.build_health(probe)), AssistClient::parse_health)
            .await
    }

    pub async fn get_health(&self) -> Result<HealthStatus, ApiError> {
        self.probe(HealthProbe::Basic).await
    }

    pub async fn get_status(&self) -> Result<HealthStatus, ApiError> {
        self.probe(HealthProbe::Status).await
    }

    pub async fn get_readiness(&self) -> Result<HealthStatus, ApiError> {
        self.probe(HealthProbe::Readiness).await
    }

    pub async fn get_liveness(&self) -> Result<HealthStatus, ApiError> {
        self.probe(HealthProbe::Liveness).await
    }
}
