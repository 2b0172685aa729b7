use crate::core::{ConfigProvider, ListItem, Pipeline, Storage, TransformResult};
use crate::domain::match_table::match_table;
use crate::utils::error::{EtlError, Result};
use chrono::Utc;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use url::Url;

pub struct ExportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> ExportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    // The registry authenticates with a `key` query parameter.
    fn request_url(&self) -> Result<Url> {
        let mut url = Url::parse(self.config.api_endpoint())?;
        if let Some(key) = self.config.api_key() {
            url.query_pairs_mut().append_pair("key", key);
        }
        Ok(url)
    }

    fn output_filename(&self) -> String {
        match self.config.output_filename() {
            Some(name) => name.to_string(),
            None => format!("facility_matches_{}.csv", Utc::now().format("%Y%m%d")),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ExportPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<ListItem>> {
        let url = self.request_url()?;
        tracing::debug!("Fetching list items from: {}", self.config.api_endpoint());

        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.config.timeout_seconds()))
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("API response status: {}", response.status());

        let items: Vec<ListItem> = response.json().await?;
        if items.is_empty() {
            // An empty list is a legitimate export; it becomes a header-only CSV.
            tracing::warn!("List contains no items");
        }

        Ok(items)
    }

    async fn transform(&self, items: Vec<ListItem>) -> Result<TransformResult> {
        let rows = match_table(&items);

        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in &rows {
            writer.write_record(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| EtlError::ProcessingError {
                message: format!("Failed to flush CSV buffer: {}", e),
            })?;
        let csv_output = String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
            message: format!("CSV output is not valid UTF-8: {}", e),
        })?;

        Ok(TransformResult {
            item_count: items.len(),
            rows,
            csv_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let filename = self.output_filename();
        let output_path = Path::new(self.config.output_path())
            .join(&filename)
            .display()
            .to_string();

        tracing::debug!(
            "Writing {} rows ({} bytes) to {}",
            result.rows.len(),
            result.csv_output.len(),
            output_path
        );
        self.storage
            .write_file(&filename, result.csv_output.as_bytes())
            .await?;

        Ok(output_path)
    }
}
