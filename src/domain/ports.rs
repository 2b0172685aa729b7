use crate::domain::model::{ListItem, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Write-only sink for the produced CSV; the export never reads back.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_filename(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<ListItem>>;
    async fn transform(&self, items: Vec<ListItem>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
