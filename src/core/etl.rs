use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting export");

        let items = self.pipeline.extract().await?;
        tracing::info!("Extracted {} list items", items.len());

        let result = self.pipeline.transform(items).await?;
        tracing::info!(
            "Expanded {} items into {} rows",
            result.item_count,
            result.rows.len() - 1
        );

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Export written to: {}", output_path);

        Ok(output_path)
    }
}
