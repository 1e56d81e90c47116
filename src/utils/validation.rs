use crate::domain::model::FieldSpec;
use crate::utils::error::{EtlError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Field specs drive both column matching and the output column order, so the
/// set must be non-empty, with non-blank names/patterns and unique names.
pub fn validate_field_specs(field_name: &str, specs: &[FieldSpec]) -> Result<()> {
    if specs.is_empty() {
        return Err(EtlError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for spec in specs {
        validate_non_empty_string(field_name, &spec.name)?;
        validate_non_empty_string(field_name, &spec.pattern)?;
        if !seen.insert(spec.name.as_str()) {
            return Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: spec.name.clone(),
                reason: "Duplicate output field name".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("url", "https://example.com").is_ok());
        assert!(validate_url("url", "http://example.com").is_ok());
        assert!(validate_url("url", "").is_err());
        assert!(validate_url("url", "invalid-url").is_err());
        assert!(validate_url("url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("sheet", "LedsParsed").is_ok());
        assert!(validate_non_empty_string("sheet", "   ").is_err());
    }

    #[test]
    fn test_validate_field_specs() {
        let specs = vec![
            FieldSpec::new("Color", "Цвет свечения диода"),
            FieldSpec::new("Voltage", "Прямое напряжение"),
        ];
        assert!(validate_field_specs("fields", &specs).is_ok());

        assert!(validate_field_specs("fields", &[]).is_err());

        let duplicated = vec![FieldSpec::new("Color", "a"), FieldSpec::new("Color", "b")];
        assert!(validate_field_specs("fields", &duplicated).is_err());

        let blank_pattern = vec![FieldSpec::new("Color", "  ")];
        assert!(validate_field_specs("fields", &blank_pattern).is_err());
    }
}
