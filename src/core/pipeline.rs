use crate::core::{columns, parse, report};
use crate::core::{ConfigProvider, Pipeline, Storage, TableData, TransformResult};
use crate::utils::error::{EtlError, Result};
use reqwest::{Client, StatusCode};

pub struct ScrapePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> ScrapePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ScrapePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<TableData>> {
        tracing::debug!("Requesting catalog page: {}", self.config.page_url());
        let response = self.client.get(self.config.page_url()).send().await?;

        let status = response.status();
        tracing::debug!("Page response status: {}", status);
        if status != StatusCode::OK {
            return Err(EtlError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        let html = response.text().await?;
        let tables = parse::parse_tables(&html, self.config.table_class())?;

        tracing::info!(
            "Found {} tables with class '{}'",
            tables.len(),
            self.config.table_class()
        );
        for (index, table) in tables.iter().enumerate() {
            tracing::debug!(
                "Table {} headers ({}): {:?}",
                index + 1,
                table.headers.len(),
                table.headers
            );
        }

        Ok(tables)
    }

    async fn transform(&self, tables: Vec<TableData>) -> Result<TransformResult> {
        let specs = self.config.field_specs();
        let mut records = Vec::new();

        for (index, table) in tables.iter().enumerate() {
            tracing::info!("Processing table {} of {}", index + 1, tables.len());

            // Column layouts differ per table, so the index is rebuilt each time.
            let column_index = columns::match_columns(&table.headers, specs);
            for spec in specs {
                match column_index.get(&spec.name) {
                    Some(col) => tracing::info!(
                        "Matched column '{}' -> '{}' (index {})",
                        spec.pattern,
                        spec.name,
                        col
                    ),
                    None => tracing::warn!(
                        "No column matching '{}' in table {}",
                        spec.pattern,
                        index + 1
                    ),
                }
            }

            let table_records = columns::project_rows(table, &column_index);
            for record in &table_records {
                tracing::debug!("Collected row: {:?}", record.values);
            }
            tracing::info!(
                "Table {} contributed {} records",
                index + 1,
                table_records.len()
            );
            records.extend(table_records);
        }

        // Output columns follow field spec declaration order, restricted to
        // fields that bound in at least one table.
        let output_columns = specs
            .iter()
            .map(|spec| spec.name.clone())
            .filter(|name| records.iter().any(|r| r.values.contains_key(name)))
            .collect();

        Ok(TransformResult {
            records,
            columns: output_columns,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        if result.records.is_empty() {
            return Err(EtlError::NoDataError);
        }

        let workbook_name = self.config.workbook_name();
        let existing = match self.storage.read_file(workbook_name).await {
            Ok(bytes) => {
                tracing::debug!("Opening existing workbook '{}'", workbook_name);
                Some(bytes)
            }
            Err(EtlError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Workbook '{}' not found, creating it", workbook_name);
                None
            }
            Err(e) => return Err(e),
        };

        let bytes = report::build_workbook(existing.as_deref(), self.config.sheet_name(), &result)?;

        tracing::debug!("Writing workbook ({} bytes) to storage", bytes.len());
        self.storage.write_file(workbook_name, &bytes).await?;

        Ok(format!("{}/{}", self.config.output_path(), workbook_name))
    }
}
