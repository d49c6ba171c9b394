use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting ETL process");

        tracing::info!("📥 Extracting data...");
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("📥 Extracted {} records", raw_data.len());
        self.monitor.log_stage("Extract", raw_data.len());

        tracing::info!("🔄 Transforming data...");
        let report = self.pipeline.transform(raw_data).await?;
        tracing::info!("🔄 Transformed {} records", report.records.len());
        self.monitor.log_stage("Transform", report.records.len());

        tracing::info!("💾 Loading data...");
        let output_path = self.pipeline.load(report).await?;
        tracing::info!("💾 Output saved to: {}", output_path);

        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
