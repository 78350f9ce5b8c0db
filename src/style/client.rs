use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use serde_json::Value;

use crate::http::{ApiClient, is_not_found};
use crate::path::NormalizePath;

use super::types::{ReportId, StyleTransferPayload};

/// Primary path of the legacy transfer endpoint.
pub const TRANSFER_PATH: &str = "/api/transfer";

/// Path retried once when [`TRANSFER_PATH`] answers 404.
pub const LEGACY_TRANSFER_PATH: &str = "/transfer";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StyleTransferApi: Send + Sync {
    async fn transfer_style(&self, data: &Value) -> Result<Value>;

    async fn perform_style_transfer(
        &self,
        input_type: &str,
        new_theme: &str,
        provider: &str,
        model: &str,
        source_text: &str,
        analysis_report_id: Option<ReportId>,
    ) -> Result<Value>;

    async fn get_style_transfer_results(&self) -> Result<Value>;
    async fn get_style_transfer_result(&self, report_id: &ReportId) -> Result<Value>;
    async fn save_style_transfer_result(&self, data: &Value) -> Result<Value>;
}

/// Style transfer operations over two transports: `long_running` for job
/// submission, `standard` for reading and saving results.
pub struct StyleTransferClient<L: ApiClient, S: ApiClient, N: NormalizePath> {
    long_running: L,
    standard: S,
    normalizer: N,
}

impl<L: ApiClient, S: ApiClient, N: NormalizePath> StyleTransferClient<L, S, N> {
    pub fn new(long_running: L, standard: S, normalizer: N) -> Self {
        Self {
            long_running,
            standard,
            normalizer,
        }
    }

    pub fn long_running(&self) -> &L {
        &self.long_running
    }

    pub fn standard(&self) -> &S {
        &self.standard
    }
}

#[async_trait]
impl<L: ApiClient, S: ApiClient, N: NormalizePath> StyleTransferApi
    for StyleTransferClient<L, S, N>
{
    #[tracing::instrument(skip(self, data))]
    async fn transfer_style(&self, data: &Value) -> Result<Value> {
        match self.long_running.post(TRANSFER_PATH, data).await {
            Err(e) if is_not_found(&e) => {
                info!(
                    "{} not found, falling back to {}",
                    TRANSFER_PATH, LEGACY_TRANSFER_PATH
                );
                self.long_running.post(LEGACY_TRANSFER_PATH, data).await
            }
            outcome => outcome,
        }
    }

    #[tracing::instrument(skip(self, new_theme, source_text))]
    async fn perform_style_transfer(
        &self,
        input_type: &str,
        new_theme: &str,
        provider: &str,
        model: &str,
        source_text: &str,
        analysis_report_id: Option<ReportId>,
    ) -> Result<Value> {
        let payload = StyleTransferPayload {
            input_type: input_type.to_string(),
            new_theme: new_theme.to_string(),
            provider: provider.to_string(),
            model: model.to_string(),
            source_text: source_text.to_string(),
            analysis_report_id,
        };
        debug!("Sending style transfer payload: {:?}", payload);

        let body = serde_json::to_value(&payload).context("Failed to encode style transfer payload")?;
        self.long_running
            .post(&self.normalizer.normalize("transfer/"), &body)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_style_transfer_results(&self) -> Result<Value> {
        self.standard
            .get(&self.normalizer.normalize("results/list-style"))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_style_transfer_result(&self, report_id: &ReportId) -> Result<Value> {
        self.standard
            .get(&self.normalizer.normalize(&format!("results/style/{}", report_id)))
            .await
    }

    #[tracing::instrument(skip(self, data))]
    async fn save_style_transfer_result(&self, data: &Value) -> Result<Value> {
        self.standard
            .post(&self.normalizer.normalize("results/save-style"), data)
            .await
    }
}
