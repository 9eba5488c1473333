use crate::utils::error::{ReportError, Result};
use crate::utils::validation::validate_report_identifier;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one report on the reporting API, e.g. `signups` / `weekly`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportKey {
    pub report_type: String,
    pub report_period: String,
}

impl ReportKey {
    pub fn new(report_type: impl Into<String>, report_period: impl Into<String>) -> Result<Self> {
        let key = Self {
            report_type: report_type.into(),
            report_period: report_period.into(),
        };
        validate_report_identifier("report_type", &key.report_type)?;
        validate_report_identifier("report_period", &key.report_period)?;
        Ok(key)
    }

    pub fn path(&self) -> String {
        format!("/api/reports/{}/{}", self.report_type, self.report_period)
    }

    pub fn element_id(&self) -> ElementId {
        ElementId(format!("{}_{}", self.report_type, self.report_period))
    }

    pub fn error_info_id(&self) -> ElementId {
        ElementId(format!(
            "{}_{}_error_info",
            self.report_type, self.report_period
        ))
    }
}

impl fmt::Display for ReportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.report_type, self.report_period)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a widget renders: its mount point and its error panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetHandles {
    pub mount: ElementId,
    pub error_info: ElementId,
}

impl WidgetHandles {
    pub fn new(mount: ElementId, error_info: ElementId) -> Self {
        Self { mount, error_info }
    }

    pub fn for_key(key: &ReportKey) -> Self {
        Self {
            mount: key.element_id(),
            error_info: key.error_info_id(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Line,
    Compare,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetKind::Line => f.write_str("line"),
            WidgetKind::Compare => f.write_str("compare"),
        }
    }
}

/// One widget on a dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub kind: WidgetKind,
    pub key: ReportKey,
    pub handles: WidgetHandles,
}

impl Widget {
    pub fn new(kind: WidgetKind, key: ReportKey) -> Self {
        let handles = WidgetHandles::for_key(&key);
        Self { kind, key, handles }
    }

    pub fn with_handles(mut self, handles: WidgetHandles) -> Self {
        self.handles = handles;
        self
    }
}

/// Parses `line:<type>/<period>` or `compare:<type>/<period>`.
impl FromStr for Widget {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| ReportError::InvalidConfigValue {
            field: "widget".to_string(),
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (kind, rest) = s
            .split_once(':')
            .ok_or_else(|| invalid("expected <kind>:<type>/<period>"))?;
        let kind = match kind {
            "line" => WidgetKind::Line,
            "compare" => WidgetKind::Compare,
            _ => return Err(invalid("kind must be 'line' or 'compare'")),
        };
        let (report_type, report_period) = rest
            .split_once('/')
            .ok_or_else(|| invalid("expected <type>/<period>"))?;

        Ok(Widget::new(kind, ReportKey::new(report_type, report_period)?))
    }
}

/// Response envelope: `{"status": "success" | "error", "data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum ReportResponse<T> {
    Success(T),
    Error(ErrorPayload),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGraphData {
    pub labels: Vec<String>,
    pub label: String,
    pub data: Vec<f64>,
    pub label_average: String,
    pub data_average: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareData {
    pub data: String,
    #[serde(default, deserialize_with = "change_from_any")]
    pub change: Change,
}

/// Anything but the strings `increase` / `decrease` (null, numbers, other text) is no change.
fn change_from_any<'de, D>(deserializer: D) -> std::result::Result<Change, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value.as_ref().and_then(|v| v.as_str()) {
        Some("increase") => Change::Increase,
        Some("decrease") => Change::Decrease,
        _ => Change::None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Change {
    Increase,
    Decrease,
    // 其他任何值都視為無變化
    #[default]
    #[serde(other)]
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_key_identifiers() {
        let key = ReportKey::new("signups", "weekly").unwrap();
        assert_eq!(key.path(), "/api/reports/signups/weekly");
        assert_eq!(key.element_id().as_str(), "signups_weekly");
        assert_eq!(key.error_info_id().as_str(), "signups_weekly_error_info");
        assert_eq!(key.to_string(), "signups/weekly");
    }

    #[test]
    fn test_report_key_rejects_bad_segments() {
        assert!(ReportKey::new("", "weekly").is_err());
        assert!(ReportKey::new("..", "weekly").is_err());
        assert!(ReportKey::new("signups", "weekly/extra").is_err());
    }

    #[test]
    fn test_parse_widget() {
        let widget: Widget = "compare:signups/weekly".parse().unwrap();
        assert_eq!(widget.kind, WidgetKind::Compare);
        assert_eq!(widget.key, ReportKey::new("signups", "weekly").unwrap());
        assert_eq!(widget.handles.mount.as_str(), "signups_weekly");

        assert!("pie:signups/weekly".parse::<Widget>().is_err());
        assert!("line:signups".parse::<Widget>().is_err());
        assert!("signups/weekly".parse::<Widget>().is_err());
        assert!("line:signups/weekly/extra".parse::<Widget>().is_err());
    }

    #[test]
    fn test_change_falls_back_to_none() {
        let data: CompareData =
            serde_json::from_value(serde_json::json!({"data": "1", "change": "flat"})).unwrap();
        assert_eq!(data.change, Change::None);

        let data: CompareData = serde_json::from_value(serde_json::json!({"data": "1"})).unwrap();
        assert_eq!(data.change, Change::None);

        let data: CompareData =
            serde_json::from_value(serde_json::json!({"data": "1", "change": "decrease"}))
                .unwrap();
        assert_eq!(data.change, Change::Decrease);

        let data: CompareData =
            serde_json::from_value(serde_json::json!({"data": "1", "change": null})).unwrap();
        assert_eq!(data.change, Change::None);

        let data: CompareData =
            serde_json::from_value(serde_json::json!({"data": "1", "change": 3})).unwrap();
        assert_eq!(data.change, Change::None);

        let data: CompareData =
            serde_json::from_value(serde_json::json!({"data": "1", "change": {"up": true}}))
                .unwrap();
        assert_eq!(data.change, Change::None);
    }

    #[test]
    fn test_error_envelope() {
        let resp: ReportResponse<CompareData> = serde_json::from_value(serde_json::json!({
            "status": "error",
            "data": {"message": "no data"}
        }))
        .unwrap();
        assert_eq!(
            resp,
            ReportResponse::Error(ErrorPayload {
                message: "no data".to_string()
            })
        );
    }
}
