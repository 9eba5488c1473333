use crate::utils::error::{ReportError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ReportError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Report types and periods become one path segment and part of an element id.
pub fn validate_report_identifier(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value == "." || value == ".." {
        return Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Relative path segments are not allowed".to_string(),
        });
    }

    if let Some(bad) = value
        .chars()
        .find(|c| *c == '/' || *c == '?' || *c == '#' || c.is_whitespace())
    {
        return Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Character '{}' is not allowed", bad),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ReportError::MissingConfig {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://example.com").is_ok());
        assert!(validate_url("base_url", "http://localhost:5000").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_report_identifier() {
        assert!(validate_report_identifier("report_type", "signups").is_ok());
        assert!(validate_report_identifier("report_period", "month_to_date").is_ok());
        assert!(validate_report_identifier("report_type", "").is_err());
        assert!(validate_report_identifier("report_type", "  ").is_err());
        assert!(validate_report_identifier("report_type", "a/b").is_err());
        assert!(validate_report_identifier("report_period", "week ly").is_err());
        assert!(validate_report_identifier("report_type", ".").is_err());
        assert!(validate_report_identifier("report_type", "..").is_err());
        assert!(validate_report_identifier("report_period", "v1.2").is_ok());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        let absent: Option<u32> = None;
        assert_eq!(*validate_required_field("x", &present).unwrap(), 3);
        assert!(matches!(
            validate_required_field("x", &absent),
            Err(ReportError::MissingConfig { .. })
        ));
    }
}
