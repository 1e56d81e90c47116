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

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting catalog scrape...");

        // Extract
        let tables = self.pipeline.extract().await?;
        tracing::info!("Extracted {} tables", tables.len());
        self.monitor.log_stats("extract");

        // Transform
        let result = self.pipeline.transform(tables).await?;
        tracing::info!("Collected {} records", result.records.len());
        self.monitor.log_stats("transform");

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Workbook saved to: {}", output_path);
        self.monitor.log_stats("load");
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
