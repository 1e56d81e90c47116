pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::FieldSpec;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "catalog-etl")]
#[command(about = "Scrapes catalog page tables into an XLSX sheet")]
pub struct CliConfig {
    /// Catalog page to fetch.
    #[arg(
        long,
        default_value = "https://www.smd.ru/katalog/poluprovodnikovye_diody_SMD/smd_LED_svetodiody/LED_0603_1204_1206/"
    )]
    pub url: String,

    /// Class attribute of the tables to harvest.
    #[arg(long, default_value = "goodsByArticul")]
    pub table_class: String,

    /// Output field and its header search pattern, as NAME=PATTERN.
    /// Repeatable; the order given here is the output column order.
    #[arg(
        long = "field",
        value_parser = parse_field_spec,
        default_values = [
            "Color=Цвет свечения диода",
            "Voltage=Прямое напряжение (В) при токе 20 мА",
        ]
    )]
    pub fields: Vec<FieldSpec>,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    /// Workbook file name inside the output path.
    #[arg(long, default_value = "Library.xlsx")]
    pub workbook: String,

    /// Sheet that receives the extracted rows (replaced when it exists).
    #[arg(long, default_value = "LedsParsed")]
    pub sheet: String,

    /// Read the run configuration from a TOML file instead of flags.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU/memory usage per stage")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
fn parse_field_spec(s: &str) -> std::result::Result<FieldSpec, String> {
    match s.split_once('=') {
        Some((name, pattern)) if !name.trim().is_empty() && !pattern.trim().is_empty() => {
            Ok(FieldSpec::new(name.trim(), pattern.trim()))
        }
        _ => Err(format!("expected NAME=PATTERN, got '{}'", s)),
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn page_url(&self) -> &str {
        &self.url
    }

    fn table_class(&self) -> &str {
        &self.table_class
    }

    fn field_specs(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn workbook_name(&self) -> &str {
        &self.workbook
    }

    fn sheet_name(&self) -> &str {
        &self.sheet
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("url", &self.url)?;
        validation::validate_non_empty_string("table_class", &self.table_class)?;
        validation::validate_field_specs("field", &self.fields)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("workbook", &self.workbook)?;
        validation::validate_non_empty_string("sheet", &self.sheet)?;
        Ok(())
    }
}
