use crate::domain::model::{FieldSpec, TableData, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn page_url(&self) -> &str;
    fn table_class(&self) -> &str;
    fn field_specs(&self) -> &[FieldSpec];
    fn output_path(&self) -> &str;
    fn workbook_name(&self) -> &str;
    fn sheet_name(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<TableData>>;
    async fn transform(&self, tables: Vec<TableData>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
