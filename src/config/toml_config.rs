use crate::core::ConfigProvider;
use crate::domain::model::FieldSpec;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: Option<PipelineConfig>,
    pub source: SourceConfig,
    pub extract: ExtractConfig,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub url: String,
    pub table_class: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// `[[extract.fields]]` entries; array order is the output column order.
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub workbook: String,
    pub sheet: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitutes `${VAR_NAME}` references with environment values; unknown
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn page_url(&self) -> &str {
        &self.source.url
    }

    fn table_class(&self) -> &str {
        self.source.table_class.as_deref().unwrap_or("goodsByArticul")
    }

    fn field_specs(&self) -> &[FieldSpec] {
        &self.extract.fields
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn workbook_name(&self) -> &str {
        &self.load.workbook
    }

    fn sheet_name(&self) -> &str {
        &self.load.sheet
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.url", &self.source.url)?;
        if let Some(class) = &self.source.table_class {
            validation::validate_non_empty_string("source.table_class", class)?;
        }
        validation::validate_field_specs("extract.fields", &self.extract.fields)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_non_empty_string("load.workbook", &self.load.workbook)?;
        validation::validate_non_empty_string("load.sheet", &self.load.sheet)?;
        Ok(())
    }
}
